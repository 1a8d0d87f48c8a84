use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::models::scan_result::ScanSummary;

use super::copy::{CopyOps, FsCopier};
use super::events::{Event, EventSender};
use super::state::ScanState;

/// Platform thumbnail and index files. Never counted, never logged.
pub const EXCLUDED_NAMES: &[&str] = &[
    ".DS_Store",
    ".DS_STORE",
    "Thumbs.db",
    "thumbs.db",
    "Thumb.db",
    "thumb.db",
    "desktop.ini",
];

/// Depth-first traversal that copies every qualifying file into the flat
/// output directory under a sequential numeric name.
pub struct Scanner<C = FsCopier> {
    settings: Settings,
    copier: C,
    event_tx: Option<EventSender>,
}

impl Scanner<FsCopier> {
    pub fn new(settings: Settings) -> Self {
        Self::with_copier(settings, FsCopier)
    }
}

impl<C: CopyOps> Scanner<C> {
    pub fn with_copier(settings: Settings, copier: C) -> Self {
        Self {
            settings,
            copier,
            event_tx: None,
        }
    }

    pub fn with_events(mut self, event_tx: EventSender) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    /// Run one full traversal from the input root and report the counters.
    /// Never fails: directory and copy errors are counted and skipped.
    pub fn scan(&self) -> ScanSummary {
        // Both ends canonical, and links are never followed below, so every
        // directory path reached is canonical too and `==` is enough to spot
        // the output directory inside the input tree.
        let input = canonical_or_absolute(&self.settings.input_dir);
        let output = canonical_or_absolute(&self.settings.output_dir);

        self.emit(Event::ScanStarted {
            input: input.clone(),
            output: output.clone(),
        });

        let mut state = ScanState::new();
        self.scan_directory(&input, &output, 0, &mut state);
        let summary = state.finish(&self.settings);

        tracing::debug!(
            found = summary.found,
            copied = summary.copied,
            failed = summary.failed,
            "scan finished"
        );
        self.emit(Event::ScanCompleted {
            found: summary.found,
            copied: summary.copied,
            failed: summary.failed,
            duration_ms: summary.scan_duration.as_millis() as u64,
        });

        summary
    }

    fn scan_directory(&self, from: &Path, to: &Path, depth: usize, state: &mut ScanState) {
        if depth > self.settings.max_depth {
            state.record_depth_limit();
            self.emit(Event::DepthLimitReached {
                path: from.to_path_buf(),
                depth,
            });
            return;
        }

        if from == to {
            return;
        }

        let entries = match read_dir_batch(from) {
            Ok(entries) => entries,
            Err(e) => {
                if self.settings.verbosity.shows_errors() {
                    tracing::warn!("{}: {}", from.display(), e);
                }
                state.record_dir_error(from.to_path_buf(), &e);
                self.emit(Event::DirectoryError {
                    path: from.to_path_buf(),
                    error: e.to_string(),
                });
                return;
            }
        };

        for entry in entries {
            if entry.is_dir {
                self.scan_directory(&entry.path, to, depth + 1, state);
            } else {
                self.process_file(&entry, to, state);
            }
        }
    }

    fn process_file(&self, entry: &DirEntryData, to: &Path, state: &mut ScanState) {
        if is_excluded(&entry.name) {
            return;
        }
        let Some(ext) = self.settings.extensions.match_path(&entry.path) else {
            return;
        };

        state.record_found();
        self.emit(Event::FileFound {
            source: entry.path.clone(),
        });

        if self.settings.scan_only {
            if self.settings.verbosity.shows_info() {
                tracing::info!("{}", entry.path.display());
            }
            return;
        }

        let id = state.allocate_id();
        let destination = to.join(format!("{id}{ext}"));
        if self.settings.verbosity.shows_info() {
            tracing::info!("\"{}\",\"{}\"", entry.path.display(), destination.display());
        }

        match self.copier.copy_file(&entry.path, &destination) {
            Ok(bytes) => {
                state.record_copied(bytes);
                self.emit(Event::FileCopied {
                    id,
                    source: entry.path.clone(),
                    destination,
                    bytes,
                });
            }
            Err(e) => {
                if self.settings.verbosity.shows_errors() {
                    tracing::warn!("{}", e);
                }
                state.record_copy_error(entry.path.clone(), e.io_kind().into(), e.to_string());
                self.emit(Event::CopyFailed {
                    id,
                    source: entry.path.clone(),
                    destination,
                    error: e.to_string(),
                });
            }
        }
    }

    fn emit(&self, event: Event) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event);
        }
    }
}

/// Collected directory entry from batch I/O.
struct DirEntryData {
    path: PathBuf,
    name: OsString,
    is_dir: bool,
}

/// Read a whole directory up front so its handle is closed before recursing.
/// Any failure abandons the directory as a unit. Entries are sorted by name.
fn read_dir_batch(dir_path: &Path) -> std::io::Result<Vec<DirEntryData>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir_path)? {
        let entry = entry?;
        // file_type() does not follow symlinks: linked directories are
        // treated as files and never descended into.
        let is_dir = entry.file_type()?.is_dir();
        entries.push(DirEntryData {
            path: entry.path(),
            name: entry.file_name(),
            is_dir,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn is_excluded(name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| EXCLUDED_NAMES.contains(&name))
}

fn canonical_or_absolute(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
