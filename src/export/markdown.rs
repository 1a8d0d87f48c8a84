use std::fmt::Write;
use std::path::Path;

use crate::models::scan_result::{human_readable_size, ScanSummary};

pub fn export_markdown(summary: &ScanSummary, output_path: &Path) -> anyhow::Result<()> {
    let mut md = String::new();

    writeln!(md, "# Image Organizer Report")?;
    writeln!(md)?;
    writeln!(md, "- **Input:** {}", summary.input_dir.display())?;
    writeln!(md, "- **Output:** {}", summary.output_dir.display())?;
    writeln!(md, "- **Extensions:** {}", summary.extensions.join(", "))?;
    writeln!(md, "- **Max Depth:** {}", summary.max_depth)?;
    writeln!(md, "- **Scan Only:** {}", summary.scan_only)?;
    writeln!(md, "- **Started:** {}", summary.timestamp.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(md, "- **Scan Duration:** {:.2}s", summary.scan_duration.as_secs_f64())?;
    writeln!(md)?;

    writeln!(md, "## Counters")?;
    writeln!(md)?;
    writeln!(md, "| Counter | Value |")?;
    writeln!(md, "|---------|-------|")?;
    writeln!(md, "| Found | {} |", summary.found)?;
    writeln!(md, "| Copied | {} |", summary.copied)?;
    writeln!(md, "| Bytes Copied | {} |", human_readable_size(summary.bytes_copied))?;
    writeln!(md, "| Failed | {} |", summary.failed)?;
    writeln!(md, "| Copy Failures | {} |", summary.copy_errors)?;
    writeln!(md, "| Directory Failures | {} |", summary.dir_errors)?;
    writeln!(md, "| Depth Limit Stops | {} |", summary.depth_limit_reached)?;

    if !summary.errors.is_empty() {
        writeln!(md)?;
        writeln!(md, "## Errors ({} total)", summary.errors.len())?;
        writeln!(md)?;
        for err in &summary.errors {
            writeln!(
                md,
                "- **{:?} / {:?}**: {} ({})",
                err.source,
                err.error_type,
                err.path.display(),
                err.message
            )?;
        }
    }

    std::fs::write(output_path, md)?;
    Ok(())
}
