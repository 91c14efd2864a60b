use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::seed::SeedLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;
use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate and persist schedule fixtures.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed {
        seed,
        reference,
        per_student,
    } = cmd
    {
        //
        // 1. Resolve the reference date (explicit, or current month
        //    pinned to the configured reference year)
        //
        let reference = match reference {
            Some(s) => date::parse_date(s)
                .ok_or_else(|| AppError::InvalidReference(s.to_string()))?,
            None => {
                let month = date::today().month();
                NaiveDate::from_ymd_opt(cfg.reference_year, month, 1).ok_or_else(|| {
                    AppError::InvalidReference(format!("{}-{:02}-01", cfg.reference_year, month))
                })?
            }
        };

        //
        // 2. Resolve the RNG: seeded runs are reproducible, unseeded runs
        //    draw a seed and print it so they can be replayed
        //
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let per_student = per_student.unwrap_or(cfg.schedules_per_student);

        info(format!(
            "Seeding schedules (reference {}, seed {}, {} per student)",
            reference, seed, per_student
        ));

        //
        // 3. Run the generator
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let report = SeedLogic::apply(&mut pool, &mut rng, reference, per_student)?;

        if report.records > 0 {
            success(format!(
                "Seeded {} schedules for {} students.",
                report.records, report.students
            ));
        }
    }

    Ok(())
}
