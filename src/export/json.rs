use crate::errors::{AppError, AppResult};
use crate::export::ScheduleExport;

/// Write the exported schedules as pretty-printed JSON.
pub fn write_json(path: &str, rows: &[ScheduleExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {}", e)))?;
    std::fs::write(path, json)?;
    Ok(())
}
