use crate::db::log::slog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_all_schedules, delete_all_students};
use crate::errors::AppResult;

/// High-level business logic for the `reset` command.
pub struct ResetLogic;

impl ResetLogic {
    /// Delete all seeded schedules, and the students too when requested.
    /// Returns (schedules deleted, students deleted).
    pub fn apply(pool: &mut DbPool, include_students: bool) -> AppResult<(usize, usize)> {
        // schedules first, they reference students
        let schedules = delete_all_schedules(&pool.conn)?;
        let students = if include_students {
            delete_all_students(&pool.conn)?
        } else {
            0
        };

        slog(
            &pool.conn,
            "reset",
            "",
            &format!(
                "Deleted {} schedules and {} students",
                schedules, students
            ),
        )?;

        Ok((schedules, students))
    }
}
