use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use sclite_rs::SessionReport;

pub fn write_report(path: &Path, report: &SessionReport) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!(
                    "Failed to create summary output directory '{}': {err}",
                    parent.display()
                )
            })?;
        }
    }

    let mut file = File::create(path)
        .map_err(|err| format!("Failed to create summary file '{}': {err}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, report).map_err(|err| {
        format!(
            "Failed to serialize summary JSON '{}': {err}",
            path.display()
        )
    })?;
    file.write_all(b"\n")
        .map_err(|err| format!("Failed to finalize summary file '{}': {err}", path.display()))?;
    Ok(())
}
