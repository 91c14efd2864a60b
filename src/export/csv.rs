use crate::export::ScheduleExport;
use csv::Writer;

/// Write the exported schedules as CSV.
pub fn write_csv(path: &str, rows: &[ScheduleExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "student",
        "start",
        "end",
        "meal",
        "notes",
        "attendance",
    ])?;

    for row in rows {
        wtr.write_record(&[
            row.id.to_string(),
            row.student.clone(),
            row.start.clone(),
            row.end.clone(),
            row.meal.to_string(),
            row.notes.clone().unwrap_or_default(),
            row.attendance.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
