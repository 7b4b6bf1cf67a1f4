use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde_json::Value;
use shared::domain::Person;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read person file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("person file '{path}' is not a JSON array: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only list of people loaded once from a JSON file.
///
/// Cloning is cheap; clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct PersonDirectory {
    persons: Arc<Vec<Person>>,
}

impl PersonDirectory {
    pub fn new(persons: Vec<Person>) -> Self {
        Self {
            persons: Arc::new(persons),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DirectoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<Value> =
            serde_json::from_str(&raw).map_err(|source| DirectoryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let total = records.len();
        let persons: Vec<Person> = records.into_iter().filter_map(person_from_record).collect();
        let skipped = total - persons.len();
        if skipped > 0 {
            warn!(
                path = %path.display(),
                skipped,
                "skipping person records without a string identifier"
            );
        }
        info!(path = %path.display(), count = persons.len(), "person directory loaded");
        Ok(Self::new(persons))
    }

    /// First record whose identifier matches exactly. Linear scan, no index.
    pub fn find(&self, identifier: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

/// Records that can never match a lookup (not an object, or no string
/// `identifier`) are dropped instead of failing the whole file.
fn person_from_record(record: Value) -> Option<Person> {
    let Value::Object(mut attributes) = record else {
        return None;
    };
    let Some(Value::String(identifier)) = attributes.shift_remove("identifier") else {
        return None;
    };
    Some(Person {
        identifier,
        attributes,
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
