use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// Storage format for schedule timestamps (TEXT column).
pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub id: i64,                // ⇔ schedules.id (INTEGER PK)
    pub student_id: i64,        // ⇔ schedules.student_id (FK → students.id)
    pub start: NaiveDateTime,   // ⇔ schedules.start (TEXT "YYYY-MM-DD HH:MM")
    pub end: NaiveDateTime,     // ⇔ schedules.end (TEXT "YYYY-MM-DD HH:MM")
    pub meal: bool,             // ⇔ schedules.meal (INT 0/1)
    pub notes: Option<String>,  // ⇔ schedules.notes (TEXT NULL)
    pub attendance: bool,       // ⇔ schedules.attendance (INT 0/1)
    pub created_at: String,     // ⇔ schedules.created_at (TEXT, ISO8601)
}

impl Schedule {
    /// Constructor for freshly generated records.
    /// - `id = 0` means "not yet persisted" (SQLite assigns the real id)
    /// - `created_at = now() in ISO8601`
    pub fn new(
        student_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
        meal: bool,
        notes: Option<String>,
        attendance: bool,
    ) -> Self {
        Self {
            id: 0,
            student_id,
            start,
            end,
            meal,
            notes,
            attendance,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format(DATETIME_FMT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(DATETIME_FMT).to_string()
    }
}
