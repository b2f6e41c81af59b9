// Storage module: reads and writes the whole roster as one JSON array.
//
// `read_roster` / `write_roster` are the fallible layer and return typed
// errors. `load` / `save` wrap them for the menu loop: failures are
// reported on the console and never escape, so a bad file can't stop the
// program.

use crate::console::{Diagnostic, Reporter, UNKNOWN_ERROR};
use crate::model::Roster;
use log::info;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const FILE_NOT_FOUND: &str = "File not found.";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("No such file or directory: '{}'", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed JSON in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not encode registrations: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            StorageError::NotFound { path, source }
        } else {
            StorageError::Io { path, source }
        }
    }

    /// Headline shown above the error details.
    pub fn headline(&self) -> &'static str {
        match self {
            StorageError::NotFound { .. } => FILE_NOT_FOUND,
            _ => UNKNOWN_ERROR,
        }
    }
}

impl Diagnostic for StorageError {
    fn category(&self) -> &'static str {
        match self {
            StorageError::NotFound { .. } => "StorageError::NotFound",
            StorageError::Io { .. } => "StorageError::Io",
            StorageError::Parse { .. } => "StorageError::Parse",
            StorageError::Encode { .. } => "StorageError::Encode",
        }
    }

    fn details(&self) -> &'static str {
        match self {
            StorageError::NotFound { .. } => "File or directory not found.",
            StorageError::Io { .. } => "The file could not be read or written.",
            StorageError::Parse { .. } => "The file is not a JSON array of registrations.",
            StorageError::Encode { .. } => "The registrations could not be converted to JSON.",
        }
    }
}

/// Parse the file at `path` into a roster.
pub fn read_roster(path: &Path) -> Result<Roster, StorageError> {
    let file = File::open(path).map_err(|e| StorageError::from_io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            StorageError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            StorageError::Parse {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Overwrite `path` with the full roster.
pub fn write_roster(path: &Path, roster: &Roster) -> Result<(), StorageError> {
    let file = File::create(path).map_err(|e| StorageError::from_io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, roster).map_err(|source| {
        if source.is_io() {
            StorageError::from_io(path, source.into())
        } else {
            StorageError::Encode { source }
        }
    })?;
    writer.flush().map_err(|e| StorageError::from_io(path, e))
}

/// Load the roster from `path`, or hand back `roster` unchanged if the
/// file is missing or unreadable. The returned error only covers failing
/// to print the diagnostic.
pub fn load(path: &Path, roster: Roster, reporter: &mut impl Reporter) -> io::Result<Roster> {
    match read_roster(path) {
        Ok(loaded) => {
            info!("Loaded {} registrations from {}", loaded.len(), path.display());
            Ok(loaded)
        }
        Err(e) => {
            info!("Load failed: {e}");
            reporter.report_error(e.headline(), Some(&e))?;
            Ok(roster)
        }
    }
}

/// Save the roster to `path`, reporting any failure. The in-memory roster
/// is never touched.
pub fn save(path: &Path, roster: &Roster, reporter: &mut impl Reporter) -> io::Result<()> {
    match write_roster(path, roster) {
        Ok(()) => {
            info!("Saved {} registrations to {}", roster.len(), path.display());
            Ok(())
        }
        Err(e) => {
            info!("Save failed: {e}");
            reporter.report_error(e.headline(), Some(&e))
        }
    }
}
