use crate::core::generate::draft_schedule;
use crate::db::log::slog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_schedule, load_students};
use crate::errors::AppResult;
use crate::models::schedule::Schedule;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use rand::Rng;

/// High-level business logic for the `seed` command.
pub struct SeedLogic;

pub struct SeedReport {
    pub students: usize,
    pub records: usize,
}

impl SeedLogic {
    /// Generate `per_student` schedules for every student in the store and
    /// persist them one at a time. The first insert error aborts the run;
    /// this is a fixture tool, not an ingestion path.
    pub fn apply<R: Rng>(
        pool: &mut DbPool,
        rng: &mut R,
        reference: NaiveDate,
        per_student: usize,
    ) -> AppResult<SeedReport> {
        let students = load_students(&pool.conn)?;

        if students.is_empty() {
            warning("No students in the database. Run `schedseed students --count N` first.");
            return Ok(SeedReport {
                students: 0,
                records: 0,
            });
        }

        //
        // 1. Accumulate every record before touching the schedules table
        //
        let mut pending: Vec<Schedule> = Vec::with_capacity(students.len() * per_student);

        for (s_i, student) in students.iter().enumerate() {
            for a_i in 0..per_student {
                let note_index = s_i * per_student + a_i + 1;
                let draft = draft_schedule(rng, reference, note_index)?;

                pending.push(Schedule::new(
                    student.id,
                    draft.start,
                    draft.end,
                    draft.meal,
                    draft.notes,
                    draft.attendance,
                ));
            }
        }

        //
        // 2. Insert sequentially, one row per statement
        //
        for schedule in &pending {
            insert_schedule(&pool.conn, schedule)?;
        }

        slog(
            &pool.conn,
            "seed",
            &reference.to_string(),
            &format!(
                "Seeded {} schedules for {} students",
                pending.len(),
                students.len()
            ),
        )?;

        Ok(SeedReport {
            students: students.len(),
            records: pending.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::{count_schedules_for_student, insert_student, load_schedules};
    use crate::models::student::Student;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rusqlite::Connection;

    fn seeded_pool(students: usize) -> (DbPool, Vec<i64>) {
        let conn = Connection::open_in_memory().expect("in-memory db");
        init_db(&conn).expect("init db");
        let mut ids = Vec::new();
        for i in 0..students {
            let s = Student::new(format!("Test Student {:02}", i + 1));
            ids.push(insert_student(&conn, &s).unwrap());
        }
        (DbPool { conn }, ids)
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn thirty_six_records_per_student() {
        let (mut pool, ids) = seeded_pool(3);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let report = SeedLogic::apply(&mut pool, &mut rng, reference(), 36).unwrap();
        assert_eq!(report.students, 3);
        assert_eq!(report.records, 108);

        for id in ids {
            assert_eq!(count_schedules_for_student(&pool.conn, id).unwrap(), 36);
        }
    }

    #[test]
    fn empty_store_seeds_nothing() {
        let (mut pool, _) = seeded_pool(0);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let report = SeedLogic::apply(&mut pool, &mut rng, reference(), 36).unwrap();
        assert_eq!(report.records, 0);
    }

    #[test]
    fn zero_per_student_is_valid() {
        let (mut pool, _) = seeded_pool(2);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let report = SeedLogic::apply(&mut pool, &mut rng, reference(), 0).unwrap();
        assert_eq!(report.students, 2);
        assert_eq!(report.records, 0);
    }

    #[test]
    fn note_indexes_increase_within_a_student() {
        let (mut pool, ids) = seeded_pool(2);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        SeedLogic::apply(&mut pool, &mut rng, reference(), 36).unwrap();

        for id in ids {
            let rows = load_schedules(&pool.conn, Some(id), None).unwrap();
            let mut last = 0usize;
            // created order is id order, not start order
            let mut rows = rows;
            rows.sort_by_key(|s| s.id);
            for row in rows {
                if let Some(text) = row.notes {
                    let n: usize = text
                        .trim_start_matches("備考テキスト")
                        .parse()
                        .expect("numeric note index");
                    assert!(n > last, "indexes must increase: {} after {}", n, last);
                    last = n;
                }
            }
        }
    }
}
