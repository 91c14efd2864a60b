use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `students` table.
fn create_students_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `schedules` table with its indexes.
fn create_schedules_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id INTEGER NOT NULL REFERENCES students(id),
            start      TEXT NOT NULL,
            end        TEXT NOT NULL,
            meal       INTEGER NOT NULL DEFAULT 0,
            notes      TEXT,
            attendance INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_schedules_student ON schedules(student_id);
        CREATE INDEX IF NOT EXISTS idx_schedules_start ON schedules(start);
        "#,
    )?;
    Ok(())
}

/// Check if a migration version was already recorded in the log table.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Early schemas stored schedules without the optional `notes` column.
fn migrate_add_notes_column(conn: &Connection) -> Result<()> {
    let version = "20240401_0001_add_schedule_notes";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let mut stmt = conn.prepare("PRAGMA table_info('schedules')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut has_notes = false;
    for c in cols {
        if c? == "notes" {
            has_notes = true;
            break;
        }
    }

    if !has_notes {
        conn.execute("ALTER TABLE schedules ADD COLUMN notes TEXT;", [])?;
        success(format!(
            "Migration applied: {} → added 'notes' to schedules table",
            version
        ));
    }

    mark_migration_applied(conn, version, "Added optional notes to schedules")?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table first, migrations are recorded there
    ensure_log_table(conn)?;

    // 2) Base schema
    let schedules_existed = table_exists(conn, "schedules")?;
    create_students_table(conn)?;
    create_schedules_table(conn)?;

    if !schedules_existed {
        success("Created students and schedules tables.");
    }

    // 3) Incremental migrations
    migrate_add_notes_column(conn)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mem_conn() -> Connection {
        Connection::open_in_memory().expect("in-memory db")
    }

    #[test]
    fn migrations_create_all_tables() {
        let conn = mem_conn();
        run_pending_migrations(&conn).unwrap();

        for t in ["students", "schedules", "log"] {
            assert!(table_exists(&conn, t).unwrap(), "missing table {}", t);
        }
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = mem_conn();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        // notes migration recorded exactly once
        let n: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(n, 1);
    }
}
