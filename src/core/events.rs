use std::path::PathBuf;
use std::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    // Scan state
    ScanStarted { input: PathBuf, output: PathBuf },
    ScanCompleted { found: usize, copied: usize, failed: usize, duration_ms: u64 },

    // Per-entry outcomes
    FileFound { source: PathBuf },
    FileCopied { id: u64, source: PathBuf, destination: PathBuf, bytes: u64 },
    CopyFailed { id: u64, source: PathBuf, destination: PathBuf, error: String },
    DirectoryError { path: PathBuf, error: String },
    DepthLimitReached { path: PathBuf, depth: usize },
}

pub type EventSender = mpsc::Sender<Event>;
pub type EventReceiver = mpsc::Receiver<Event>;

pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::channel()
}
