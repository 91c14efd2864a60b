use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREY, RESET};

pub struct LogLogic;

impl LogLogic {
    /// Print the internal operation log table.
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            println!("{GREY}Log is empty.{RESET}");
            return Ok(());
        }

        for (id, date, operation, target, message) in rows {
            let target = if target.is_empty() {
                String::new()
            } else {
                format!(" [{}]", target)
            };
            println!(
                "{:>4}  {}{}{}  {}{:<10}{}{} {}",
                id, GREY, date, RESET, CYAN, operation, RESET, target, message
            );
        }

        Ok(())
    }
}
