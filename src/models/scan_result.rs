use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Final counters of one run, handed back to the caller for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extensions: Vec<String>,
    pub max_depth: usize,
    pub scan_only: bool,
    pub found: usize,
    pub copied: usize,
    pub failed: usize,
    pub copy_errors: usize,
    pub dir_errors: usize,
    pub depth_limit_reached: usize,
    pub bytes_copied: u64,
    /// Highest sequential ID handed out, 0 when nothing was allocated.
    pub last_id: u64,
    pub errors: Vec<ScanError>,
    pub scan_duration: Duration,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanError {
    pub path: PathBuf,
    pub source: ScanErrorSource,
    pub error_type: ScanErrorType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanErrorSource {
    Directory,
    Copy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanErrorType {
    PermissionDenied,
    NotFound,
    IoError,
    Other,
}

impl From<io::ErrorKind> for ScanErrorType {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::Other => Self::Other,
            _ => Self::IoError,
        }
    }
}

pub fn human_readable_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    const GB: u64 = 1024 * MB;
    const TB: u64 = 1024 * GB;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
