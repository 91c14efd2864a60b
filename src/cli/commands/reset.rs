use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { students, yes } = cmd {
        let prompt = if *students {
            "Delete ALL seeded schedules AND students? This action is irreversible."
        } else {
            "Delete ALL seeded schedules? This action is irreversible."
        };

        if !*yes && !ask_confirmation(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let (schedules, deleted_students) = ResetLogic::apply(&mut pool, *students)?;

        if *students {
            success(format!(
                "Deleted {} schedules and {} students.",
                schedules, deleted_students
            ));
        } else {
            success(format!("Deleted {} schedules.", schedules));
        }
    }

    Ok(())
}
