//! Analysis history persistence
//!
//! The classification engine treats history as an opaque document store:
//! records are appended fire-and-forget and listed newest-first per user.
//! The JSON-lines store keeps one record per line, append-only; records are
//! never mutated, only written and read back.

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use skinsafe_core::{Error, HistoryRecord, Result};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Document-store capability for saved analysis results
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append a record. Records are immutable once written.
    async fn append(&self, record: &HistoryRecord) -> Result<()>;

    /// List a user's records, newest first
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<HistoryRecord>>;
}

/// In-memory store for tests and demos
#[derive(Default)]
pub struct MemoryHistoryStore {
    records: RwLock<Vec<HistoryRecord>>,
}

impl MemoryHistoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records across all users
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(&self, record: &HistoryRecord) -> Result<()> {
        self.records.write().push(record.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<HistoryRecord>> {
        let mut records: Vec<HistoryRecord> = self
            .records
            .read()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(records)
    }
}

/// Append-only JSON-lines file store
pub struct JsonlHistoryStore {
    path: PathBuf,
    // Serializes appends so concurrent saves never interleave lines.
    write_lock: Mutex<()>,
}

impl JsonlHistoryStore {
    /// Open (or create) a store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryStore for JsonlHistoryStore {
    async fn append(&self, record: &HistoryRecord) -> Result<()> {
        let line = serde_json::to_string(record)?;

        let _guard = self.write_lock.lock();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{line}")?;
        writer.flush()?;

        debug!(record_id = %record.id, user = %record.user_id, "history record appended");
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<HistoryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = std::fs::File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<HistoryRecord>(&line) {
                Ok(record) if record.user_id == user_id => records.push(record),
                Ok(_) => {}
                Err(e) => {
                    // Skip corrupt lines instead of failing the whole listing.
                    warn!(line = line_no + 1, error = %e, "skipping unreadable history line");
                }
            }
        }

        records.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(records)
    }
}

/// Convenience: snapshot a result into a new record and append it
pub async fn save_history(
    store: &dyn HistoryStore,
    user_id: &str,
    input_text: &str,
    result: skinsafe_core::AnalysisResult,
) -> Result<HistoryRecord> {
    let record = HistoryRecord::new(user_id, input_text, result);
    store
        .append(&record)
        .await
        .map_err(|e| Error::store(format!("failed to save history: {e}")))?;
    Ok(record)
}
