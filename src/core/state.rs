use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;

use crate::config::settings::Settings;
use crate::models::scan_result::{ScanError, ScanErrorSource, ScanErrorType, ScanSummary};

/// Mutable counters for a single run. Owned by the scanner and turned into a
/// [`ScanSummary`] once traversal is over.
#[derive(Debug)]
pub struct ScanState {
    next_id: u64,
    pub found: usize,
    pub copied: usize,
    pub failed: usize,
    pub copy_errors: usize,
    pub dir_errors: usize,
    pub depth_limit_reached: usize,
    pub bytes_copied: u64,
    pub errors: Vec<ScanError>,
    start_time: Instant,
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            found: 0,
            copied: 0,
            failed: 0,
            copy_errors: 0,
            dir_errors: 0,
            depth_limit_reached: 0,
            bytes_copied: 0,
            errors: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Hand out the next destination stem. IDs are never reused, even when
    /// the copy that consumed one fails.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn last_id(&self) -> u64 {
        self.next_id - 1
    }

    pub fn record_found(&mut self) {
        self.found += 1;
    }

    pub fn record_copied(&mut self, bytes: u64) {
        self.copied += 1;
        self.bytes_copied += bytes;
    }

    pub fn record_depth_limit(&mut self) {
        self.depth_limit_reached += 1;
    }

    pub fn record_dir_error(&mut self, path: PathBuf, error: &std::io::Error) {
        self.failed += 1;
        self.dir_errors += 1;
        self.errors.push(ScanError {
            path,
            source: ScanErrorSource::Directory,
            error_type: ScanErrorType::from(error.kind()),
            message: error.to_string(),
        });
    }

    pub fn record_copy_error(&mut self, path: PathBuf, error_type: ScanErrorType, message: String) {
        self.failed += 1;
        self.copy_errors += 1;
        self.errors.push(ScanError {
            path,
            source: ScanErrorSource::Copy,
            error_type,
            message,
        });
    }

    pub fn finish(self, settings: &Settings) -> ScanSummary {
        ScanSummary {
            input_dir: settings.input_dir.clone(),
            output_dir: settings.output_dir.clone(),
            extensions: settings.extensions.sorted(),
            max_depth: settings.max_depth,
            scan_only: settings.scan_only,
            found: self.found,
            copied: self.copied,
            failed: self.failed,
            copy_errors: self.copy_errors,
            dir_errors: self.dir_errors,
            depth_limit_reached: self.depth_limit_reached,
            bytes_copied: self.bytes_copied,
            last_id: self.last_id(),
            scan_duration: self.start_time.elapsed(),
            timestamp: Local::now(),
            errors: self.errors,
        }
    }
}
