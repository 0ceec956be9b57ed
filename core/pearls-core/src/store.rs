//! Flat record store for daily sessions.
//!
//! The store only knows how to load every record and append one more; it never
//! updates or deletes. Ordering and one-record-per-day are not checked here;
//! `Tracker::open` rejects a history whose dates are not strictly ascending.
//!
//! # File Format
//!
//! ```text
//! date,reps
//! 2025-01-01,10
//! 2025-01-02,0
//! ```
//!
//! - Missing file: empty history
//! - Blank lines and a leading header: skipped
//! - `\r\n` line endings: accepted

use fs_err as fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TrackerError};
use crate::session::SessionRecord;

const HEADER: &str = "date,reps";

/// Load-all / append-one contract for session persistence.
pub trait RecordStore {
    fn load_all(&self) -> Result<Vec<SessionRecord>>;
    fn append(&mut self, record: &SessionRecord) -> Result<()>;
}

/// CSV file backed store.
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    file_path: PathBuf,
}

impl CsvRecordStore {
    pub fn new(file_path: &Path) -> Self {
        CsvRecordStore {
            file_path: file_path.to_path_buf(),
        }
    }
}

fn parse_records(content: &str) -> Result<Vec<SessionRecord>> {
    let mut records = Vec::new();
    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            tracing::warn!(line = idx + 1, "Skipping blank line in record file");
            continue;
        }
        if line.eq_ignore_ascii_case(HEADER) {
            continue;
        }

        let position = records.len() + 1;
        let mut fields = line.split(',');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(date), Some(reps), None) => records.push(SessionRecord {
                date: date.trim().to_string(),
                reps: reps.trim().to_string(),
            }),
            _ => {
                return Err(TrackerError::MalformedRecord {
                    record: position,
                    details: format!("expected `date,reps`, got {:?} (line {})", line, idx + 1),
                })
            }
        }
    }
    Ok(records)
}

impl RecordStore for CsvRecordStore {
    fn load_all(&self) -> Result<Vec<SessionRecord>> {
        if !self.file_path.exists() {
            tracing::info!(path = %self.file_path.display(), "No record file yet, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .map_err(|e| TrackerError::io("reading record file", e))?;
        let records = parse_records(&content)?;
        tracing::debug!(records = records.len(), path = %self.file_path.display(), "Records loaded");
        Ok(records)
    }

    fn append(&mut self, record: &SessionRecord) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| TrackerError::io("creating record directory", e))?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.file_path)
            .map_err(|e| TrackerError::io("opening record file", e))?;

        let mut line = String::new();
        let len = file
            .metadata()
            .map_err(|e| TrackerError::io("reading record file metadata", e))?
            .len();
        if len == 0 {
            line.push_str(HEADER);
            line.push('\n');
        } else if !ends_with_newline(&mut file)? {
            line.push('\n');
        }
        line.push_str(&format!("{},{}\n", record.date, record.reps));

        file.write_all(line.as_bytes())
            .map_err(|e| TrackerError::io("appending record", e))?;
        file.flush()
            .map_err(|e| TrackerError::io("flushing record file", e))?;
        tracing::info!(date = %record.date, reps = %record.reps, "Record appended");
        Ok(())
    }
}

fn ends_with_newline(file: &mut fs::File) -> Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))
        .and_then(|_| file.read_exact(&mut last))
        .map_err(|e| TrackerError::io("reading record file tail", e))?;
    Ok(last[0] == b'\n')
}

/// Store kept entirely in memory, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<SessionRecord>,
}

impl InMemoryRecordStore {
    pub fn new(records: Vec<SessionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load_all(&self) -> Result<Vec<SessionRecord>> {
        Ok(self.records.clone())
    }

    fn append(&mut self, record: &SessionRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
