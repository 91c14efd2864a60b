use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let students: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
    let schedules: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM schedules", [], |row| row.get(0))?;

    println!("{}• Students:{} {}{}{}", CYAN, RESET, GREEN, students, RESET);
    println!(
        "{}• Schedules:{} {}{}{}",
        CYAN, RESET, GREEN, schedules, RESET
    );

    //
    // 3) SEEDED DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT start FROM schedules ORDER BY start ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT start FROM schedules ORDER BY start DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}• Seeded range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) ATTENDANCE RATIO
    //
    if schedules > 0 {
        let attended: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM schedules WHERE attendance = 1",
            [],
            |row| row.get(0),
        )?;

        let pct = (attended as f64) * 100.0 / (schedules as f64);
        println!(
            "{}• Attendance recorded:{} {}/{} ({:.1}%)",
            CYAN, RESET, attended, schedules, pct
        );
    }

    println!();
    Ok(())
}
