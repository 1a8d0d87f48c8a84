use std::path::Path;

use crate::models::scan_result::ScanSummary;

pub fn export_json(summary: &ScanSummary, output_path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
