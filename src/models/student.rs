use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub id: i64,        // ⇔ students.id (INTEGER PK)
    pub name: String,   // ⇔ students.name (TEXT)
    pub created_at: String, // ⇔ students.created_at (TEXT, ISO8601)
}

impl Student {
    /// Constructor for students created by the fixture tool.
    /// `id = 0` means "not yet persisted" (SQLite assigns the real id).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            created_at: Local::now().to_rfc3339(),
        }
    }
}
