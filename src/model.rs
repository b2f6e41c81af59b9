// Data model: a registration record and the ordered roster of records.
// The serde attributes pin the on-disk shape: a bare JSON array of
// objects keyed `FirstName`, `LastName`, `CourseName`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One student registered for one course.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    pub course_name: String,
}

impl Record {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        Record {
            first_name: first_name.into(),
            last_name: last_name.into(),
            course_name: course_name.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.first_name, self.last_name, self.course_name)
    }
}

/// All records for the current run, in insertion order. Duplicates are
/// allowed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Roster(Vec<Record>);

impl Roster {
    pub fn new() -> Self {
        Roster(Vec::new())
    }

    pub fn push(&mut self, record: Record) {
        self.0.push(record);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.0
    }
}

impl From<Vec<Record>> for Roster {
    fn from(records: Vec<Record>) -> Self {
        Roster(records)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
