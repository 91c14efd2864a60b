use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_schedules, load_student, load_students};
use crate::errors::{AppError, AppResult};
use crate::models::schedule::Schedule;
use crate::utils::date;
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        student,
        month,
        summary,
    } = cmd
    {
        let month = match month {
            Some(m) => {
                Some(date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?)
            }
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;

        // fail fast on a bogus student filter
        if let Some(id) = student {
            load_student(&pool.conn, *id)?;
        }

        let schedules = load_schedules(&pool.conn, *student, month)?;

        if schedules.is_empty() {
            println!("No schedules found.");
            return Ok(());
        }

        let names: HashMap<i64, String> = load_students(&pool.conn)?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        if *summary {
            print_summary(&schedules, &names);
        } else {
            print_rows(&schedules, &names);
        }
    }
    Ok(())
}

fn student_name(names: &HashMap<i64, String>, id: i64) -> String {
    names.get(&id).cloned().unwrap_or_else(|| format!("#{}", id))
}

fn print_rows(schedules: &[Schedule], names: &HashMap<i64, String>) {
    println!("SCHEDULES:");
    for s in schedules {
        println!(
            "- {:>5} | {:<16} | {} → {} | meal={} | attended={} | {}",
            s.id,
            student_name(names, s.student_id),
            s.start_str(),
            s.end.format("%H:%M"),
            s.meal,
            s.attendance,
            s.notes.as_deref().unwrap_or("--"),
        );
    }
}

fn print_summary(schedules: &[Schedule], names: &HashMap<i64, String>) {
    // keyed by student id, kept in id order
    let mut ids: Vec<i64> = Vec::new();
    let mut totals: HashMap<i64, (usize, usize)> = HashMap::new();

    for s in schedules {
        let entry = totals.entry(s.student_id).or_insert_with(|| {
            ids.push(s.student_id);
            (0, 0)
        });
        entry.0 += 1;
        if s.attendance {
            entry.1 += 1;
        }
    }

    println!("{:<20} {:>9} {:>9}", "STUDENT", "RECORDS", "ATTENDED");
    for id in ids {
        let (records, attended) = totals[&id];
        println!(
            "{:<20} {:>9} {:>9}",
            student_name(names, id),
            records,
            attended
        );
    }
    println!("\nTotal: {} records", schedules.len());
}
