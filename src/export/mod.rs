mod csv;
mod json;

use crate::db::pool::DbPool;
use crate::db::queries::{load_schedules, load_students};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// A schedule row joined with its student's name, flattened for export.
#[derive(Debug, Serialize)]
pub struct ScheduleExport {
    pub id: i64,
    pub student: String,
    pub start: String,
    pub end: String,
    pub meal: bool,
    pub notes: Option<String>,
    pub attendance: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "File '{}' already exists (use --force to overwrite)",
                file
            )));
        }

        let names: HashMap<i64, String> = load_students(&pool.conn)?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        let rows: Vec<ScheduleExport> = load_schedules(&pool.conn, None, None)?
            .into_iter()
            .map(|s| ScheduleExport {
                id: s.id,
                student: names
                    .get(&s.student_id)
                    .cloned()
                    .unwrap_or_else(|| format!("#{}", s.student_id)),
                start: s.start_str(),
                end: s.end_str(),
                meal: s.meal,
                notes: s.notes,
                attendance: s.attendance,
            })
            .collect();

        match format {
            ExportFormat::Csv => self::csv::write_csv(file, &rows)?,
            ExportFormat::Json => self::json::write_json(file, &rows)?,
        }

        success(format!(
            "{} export completed: {} ({} rows)",
            format.as_str().to_uppercase(),
            file,
            rows.len()
        ));
        Ok(())
    }
}
