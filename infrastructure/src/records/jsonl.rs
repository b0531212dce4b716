//! JSONL answer record reader
//!
//! One record per line: `{"task": "t1", "worker": "w3", "text": "..."}`.
//! Blank lines are skipped; a malformed line fails the load with its line
//! number rather than being dropped silently.

use crowdsum_domain::AnswerRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors while reading an answer record file
#[derive(Error, Debug)]
pub enum RecordReadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record at {path}:{line}: {source}")]
    Parse {
        path: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Read all answer records from a JSONL file, preserving input order
pub fn read_jsonl_records(path: impl AsRef<Path>) -> Result<Vec<AnswerRecord>, RecordReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| RecordReadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut records = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| RecordReadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| RecordReadError::Parse {
            path: path.display().to_string(),
            line: index + 1,
            source,
        })?;
        records.push(record);
    }

    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}
