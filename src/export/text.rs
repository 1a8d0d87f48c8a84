use std::fmt::Write;

use crate::models::scan_result::{human_readable_size, ScanSummary};

/// Human-readable end-of-run summary printed by the binary.
pub fn render_summary(summary: &ScanSummary) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_summary(&mut out, summary);
    out
}

fn write_summary(out: &mut String, summary: &ScanSummary) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "Image Organizer v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(
        out,
        "Found {} files with extension {} under directory",
        summary.found,
        summary.extensions.join("|")
    )?;
    writeln!(out, "{}", summary.input_dir.display())?;

    if summary.copied != 0 {
        writeln!(
            out,
            "Copied {} files ({}) to directory",
            summary.copied,
            human_readable_size(summary.bytes_copied)
        )?;
        writeln!(out, "{}", summary.output_dir.display())?;
    }
    if summary.failed != 0 {
        writeln!(
            out,
            "Encountered {} failures, including {} copy failures and {} directory failures",
            summary.failed, summary.copy_errors, summary.dir_errors
        )?;
    }
    if summary.depth_limit_reached != 0 {
        writeln!(
            out,
            "Stopped at maximum depth {} for {} times",
            summary.max_depth, summary.depth_limit_reached
        )?;
    }
    writeln!(out)?;
    Ok(())
}
