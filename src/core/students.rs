use crate::db::log::slog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_student, load_students};
use crate::errors::AppResult;
use crate::models::student::Student;

/// High-level business logic for the `students` command.
pub struct StudentLogic;

impl StudentLogic {
    /// Insert `count` synthetic students. Numbering continues after the
    /// students already present so repeated runs keep names unique.
    pub fn create(pool: &mut DbPool, count: usize) -> AppResult<Vec<i64>> {
        let offset = load_students(&pool.conn)?.len();

        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let student = Student::new(format!("Test Student {:02}", offset + i + 1));
            ids.push(insert_student(&pool.conn, &student)?);
        }

        slog(
            &pool.conn,
            "students",
            "",
            &format!("Created {} synthetic students", count),
        )?;

        Ok(ids)
    }
}
