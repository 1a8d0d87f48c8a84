use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::CopyError;

/// Copies one file to one destination. The scanner only talks to this seam,
/// so tests can swap the filesystem out.
pub trait CopyOps {
    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64, CopyError>;
}

/// Plain byte-for-byte copy on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCopier;

impl CopyOps for FsCopier {
    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64, CopyError> {
        copy_file(from, to)
    }
}

/// Stream `from` into `to`, creating or truncating `to`.
///
/// The source is opened first, so a missing source leaves nothing behind.
/// A failure after the destination was created leaves it as-is: callers must
/// assume a truncated or empty file may exist at `to`. Both handles are
/// closed on return.
pub fn copy_file(from: &Path, to: &Path) -> Result<u64, CopyError> {
    let mut reader = File::open(from).map_err(|source| CopyError::Open {
        path: from.to_path_buf(),
        source,
    })?;

    let mut writer = File::create(to).map_err(|source| CopyError::Create {
        path: to.to_path_buf(),
        source,
    })?;

    let bytes = io::copy(&mut reader, &mut writer).map_err(|source| CopyError::Stream {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;

    writer.flush().map_err(|source| CopyError::Finalize {
        path: to.to_path_buf(),
        source,
    })?;

    Ok(bytes)
}
