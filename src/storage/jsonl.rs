//! JSONL (JSON Lines) storage for benchmark records.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::BenchError;
use crate::core::schema::{RunRecord, SCHEMA_VERSION};

/// JSONL writer/reader for benchmark records.
///
/// Each record is stored as a single JSON line, making it easy to append
/// and stream records without loading the entire file.
#[derive(Debug, Clone)]
pub struct JsonlWriter {
    path: PathBuf,
}

impl JsonlWriter {
    /// Create a new JsonlWriter for the given path.
    ///
    /// The file will be created if it doesn't exist when writing.
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonlWriter {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the JSONL file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a single record to the JSONL file.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The record's schema_version doesn't match SCHEMA_VERSION
    /// - File operations fail
    /// - JSON serialization fails
    pub fn append(&self, record: &RunRecord) -> Result<(), BenchError> {
        if record.schema_version != SCHEMA_VERSION {
            return Err(BenchError::Message(format!(
                "schema version mismatch: record has v{}, expected v{}",
                record.schema_version, SCHEMA_VERSION
            )));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| BenchError::Message(format!("failed to create directory: {e}")))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| BenchError::Message(format!("failed to open file: {e}")))?;

        let json = serde_json::to_string(record)
            .map_err(|e| BenchError::Message(format!("failed to serialize record: {e}")))?;

        writeln!(file, "{}", json)
            .map_err(|e| BenchError::Message(format!("failed to write record: {e}")))?;

        Ok(())
    }

    /// Read all records from the JSONL file.
    ///
    /// # Errors
    /// Returns an error if the file doesn't exist, file operations fail,
    /// or JSON deserialization fails for any line.
    pub fn read_all(&self) -> Result<Vec<RunRecord>, BenchError> {
        self.read_filtered(None)
    }

    /// Read records from the JSONL file, optionally filtered by engine name.
    pub fn read_filtered(&self, engine: Option<&str>) -> Result<Vec<RunRecord>, BenchError> {
        if !self.path.exists() {
            return Err(BenchError::Message(format!(
                "file not found: {}",
                self.path.display()
            )));
        }

        let file = File::open(&self.path)
            .map_err(|e| BenchError::Message(format!("failed to open file: {e}")))?;

        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(|e| {
                BenchError::Message(format!("failed to read line {}: {e}", line_num + 1))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let record: RunRecord = serde_json::from_str(&line).map_err(|e| {
                BenchError::Message(format!("failed to parse line {}: {e}", line_num + 1))
            })?;

            if let Some(name) = engine {
                if record.engine != name {
                    continue;
                }
            }

            records.push(record);
        }

        Ok(records)
    }

    /// Check if the JSONL file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the number of records in the file.
    ///
    /// This reads through the entire file to count lines.
    pub fn count(&self) -> Result<usize, BenchError> {
        if !self.path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.path)
            .map_err(|e| BenchError::Message(format!("failed to open file: {e}")))?;

        let reader = BufReader::new(file);
        let count = reader
            .lines()
            .filter_map(|l| l.ok())
            .filter(|l| !l.trim().is_empty())
            .count();

        Ok(count)
    }
}
