use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One line of the internal audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append-only journal of store operations (JSON lines).
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an internal log line.
    pub fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        // Timestamp locale, ISO 8601
        let entry = LogEntry {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", serde_json::to_string(&entry)?)?;
        Ok(())
    }

    /// Read all entries, oldest first. Lines that do not parse are skipped.
    pub fn entries(&self) -> AppResult<Vec<LogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .filter_map(|l| serde_json::from_str(l).ok())
            .collect())
    }
}
