//! Launch records and the loaders that bring them into memory.
//!
//! A dataset document is either `{ "launches": [...] }` or a bare JSON array
//! of records. Records are never mutated once loaded.

mod parser;
mod record;

pub use record::{LaunchRecord, Outcome, DATE_TIME_SEPARATOR, UNSPECIFIED};

use crate::config::DatasetConfig;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

const BUNDLED_DATASET: &str = include_str!("../../data/launches.json");

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid launch dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a launch array or an object with a \"launches\" array, found {found}")]
    UnexpectedShape { found: &'static str },
    #[error("launch record {index} is invalid: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Accepts `{ "launches": [...] }` or a bare array, decoding records one at a
/// time so a failure names the offending record.
fn decode_document(document: Value) -> Result<Vec<LaunchRecord>, DatasetError> {
    let launches = match document {
        Value::Array(launches) => launches,
        Value::Object(mut fields) => match fields.remove("launches") {
            Some(Value::Array(launches)) => launches,
            Some(other) => {
                return Err(DatasetError::UnexpectedShape {
                    found: json_kind(&other),
                })
            }
            None => {
                return Err(DatasetError::UnexpectedShape {
                    found: "an object without \"launches\"",
                })
            }
        },
        other => {
            return Err(DatasetError::UnexpectedShape {
                found: json_kind(&other),
            })
        }
    };

    launches
        .into_iter()
        .enumerate()
        .map(|(index, launch)| {
            serde_json::from_value(launch).map_err(|source| DatasetError::Record { index, source })
        })
        .collect()
}

/// The immutable, in-memory launch collection every aggregation runs over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
}

impl LaunchDataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    /// Reads the configured file, or the bundled dataset when none is set.
    pub fn from_config(config: &DatasetConfig) -> Result<Self, DatasetError> {
        match &config.path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(std::io::BufReader::new(file))?;
        debug!(path = %path.display(), records = dataset.len(), "loaded launch dataset");
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let document: Value = serde_json::from_reader(reader)?;
        Ok(Self::new(decode_document(document)?))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let document: Value = serde_json::from_str(raw)?;
        Ok(Self::new(decode_document(document)?))
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
