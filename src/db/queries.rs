use crate::errors::{AppError, AppResult};
use crate::models::schedule::{DATETIME_FMT, Schedule};
use crate::models::student::Student;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

pub fn map_student_row(row: &Row) -> Result<Student> {
    Ok(Student {
        id: row.get("id")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_schedule_row(row: &Row) -> Result<Schedule> {
    let start_str: String = row.get("start")?;
    let end_str: String = row.get("end")?;

    let start = parse_datetime(&start_str)?;
    let end = parse_datetime(&end_str)?;

    Ok(Schedule {
        id: row.get("id")?,
        student_id: row.get("student_id")?,
        start,
        end,
        meal: row.get::<_, i64>("meal")? != 0,
        notes: row.get("notes")?,
        attendance: row.get::<_, i64>("attendance")? != 0,
        created_at: row.get("created_at")?,
    })
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

pub fn load_students(conn: &Connection) -> AppResult<Vec<Student>> {
    let mut stmt = conn.prepare("SELECT * FROM students ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_student_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_student(conn: &Connection, id: i64) -> AppResult<Student> {
    let mut stmt = conn.prepare("SELECT * FROM students WHERE id = ?1")?;

    stmt.query_row([id], map_student_row)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => AppError::UnknownStudent(id),
            other => AppError::Db(other),
        })
}

pub fn insert_student(conn: &Connection, student: &Student) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO students (name, created_at) VALUES (?1, ?2)",
        params![student.name, student.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_schedule(conn: &Connection, schedule: &Schedule) -> AppResult<()> {
    conn.execute(
        "INSERT INTO schedules (student_id, start, end, meal, notes, attendance, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            schedule.student_id,
            schedule.start_str(),
            schedule.end_str(),
            if schedule.meal { 1 } else { 0 },
            schedule.notes,
            if schedule.attendance { 1 } else { 0 },
            schedule.created_at,
        ],
    )?;
    Ok(())
}

/// Load schedules, optionally filtered by student and/or calendar month.
/// Timestamps are stored as "YYYY-MM-DD HH:MM" text, so range filters
/// compare lexicographically.
pub fn load_schedules(
    conn: &Connection,
    student_id: Option<i64>,
    month: Option<NaiveDate>,
) -> AppResult<Vec<Schedule>> {
    let mut sql = String::from("SELECT * FROM schedules WHERE 1=1");
    let mut args: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some(id) = student_id {
        sql.push_str(&format!(" AND student_id = ?{}", args.len() + 1));
        args.push(Box::new(id));
    }

    if let Some(m) = month {
        let from = crate::utils::date::first_of_month(m)
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .format(DATETIME_FMT)
            .to_string();
        let to = crate::utils::date::next_month(m)
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .format(DATETIME_FMT)
            .to_string();

        sql.push_str(&format!(" AND start >= ?{}", args.len() + 1));
        args.push(Box::new(from));
        sql.push_str(&format!(" AND start < ?{}", args.len() + 1));
        args.push(Box::new(to));
    }

    sql.push_str(" ORDER BY student_id ASC, start ASC");

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn rusqlite::ToSql> = args.iter().map(|a| a.as_ref()).collect();

    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_schedule_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_schedules(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM schedules", [], |row| row.get(0))?;
    Ok(n)
}

pub fn count_schedules_for_student(conn: &Connection, student_id: i64) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM schedules WHERE student_id = ?1",
        [student_id],
        |row| row.get(0),
    )?;
    Ok(n)
}

pub fn delete_all_schedules(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM schedules", [])?;
    Ok(n)
}

pub fn delete_all_students(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM students", [])?;
    Ok(n)
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt =
        conn.prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use chrono::NaiveDate;

    fn seeded_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("in-memory db");
        init_db(&conn).expect("init db");
        conn
    }

    fn sample_schedule(student_id: i64, day: u32) -> Schedule {
        let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        Schedule::new(
            student_id,
            date.and_hms_opt(13, 0, 0).unwrap(),
            date.and_hms_opt(15, 30, 0).unwrap(),
            true,
            Some("備考テキスト1".to_string()),
            false,
        )
    }

    #[test]
    fn insert_and_load_roundtrip() {
        let conn = seeded_conn();
        let id = insert_student(&conn, &Student::new("Test Student 01")).unwrap();
        insert_schedule(&conn, &sample_schedule(id, 7)).unwrap();

        let loaded = load_schedules(&conn, Some(id), None).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].student_id, id);
        assert_eq!(loaded[0].start_str(), "2024-05-07 13:00");
        assert!(loaded[0].meal);
        assert!(!loaded[0].attendance);
        assert_eq!(loaded[0].notes.as_deref(), Some("備考テキスト1"));
    }

    #[test]
    fn month_filter_excludes_other_months() {
        let conn = seeded_conn();
        let id = insert_student(&conn, &Student::new("Test Student 01")).unwrap();
        insert_schedule(&conn, &sample_schedule(id, 7)).unwrap();

        let april = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let may = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        assert!(load_schedules(&conn, None, Some(april)).unwrap().is_empty());
        assert_eq!(load_schedules(&conn, None, Some(may)).unwrap().len(), 1);
    }

    #[test]
    fn unknown_student_is_reported() {
        let conn = seeded_conn();
        match load_student(&conn, 42) {
            Err(AppError::UnknownStudent(42)) => {}
            other => panic!("expected UnknownStudent, got {:?}", other.map(|s| s.id)),
        }
    }
}
