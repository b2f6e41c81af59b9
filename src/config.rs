// Runtime configuration. The only setting is where registrations are
// stored; it is fixed to `enrollments.json` in the working directory.

use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "enrollments.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_enrollments_json() {
        assert_eq!(Config::default().data_file, PathBuf::from("enrollments.json"));
    }
}
