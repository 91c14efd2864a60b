use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::students::StudentLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Insert synthetic students.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Students { count } = cmd {
        let count = count.unwrap_or(cfg.default_student_count);

        let mut pool = DbPool::new(&cfg.database)?;
        let ids = StudentLogic::create(&mut pool, count)?;

        success(format!("Created {} students.", ids.len()));
    }

    Ok(())
}
