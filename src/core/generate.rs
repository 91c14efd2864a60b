//! Per-record schedule generation.
//!
//! All randomness flows through the injected `Rng`, so a seeded generator
//! reproduces a run exactly. The reference date anchors the 3-month window
//! and the attendance cutoff; no wall-clock reads happen here.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{cutoff, month_window};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rand::Rng;

/// Default records per student: 3 terms × 4 weeks × 3 sessions.
pub const SCHEDULES_PER_STUDENT: usize = 36;

/// A generated record before it is tied to a student row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub meal: bool,
    pub notes: Option<String>,
    pub attendance: bool,
}

/// Draw one synthetic schedule.
///
/// - date: random month of the 3-month window, day in [1, 28]
/// - start: hour in [12, 15], minute a multiple of 5
/// - end, same day: hour = max(start hour + 1, random in [12, 22]),
///   minute a multiple of 5
/// - meal: fair coin
/// - notes: fair coin; when present carries `note_index`
/// - attendance: 5/6 weighted true when `end` lies before the cutoff
///   (midnight, first of the reference month), always false otherwise
pub fn draft_schedule<R: Rng>(
    rng: &mut R,
    reference: NaiveDate,
    note_index: usize,
) -> AppResult<ScheduleDraft> {
    let window = month_window(reference);
    let month = window[rng.random_range(0..window.len())];
    let date = month.with_day(rng.random_range(1..=28)).unwrap();

    let start_hour: u32 = rng.random_range(12..=15);
    let start = date
        .and_hms_opt(start_hour, rng.random_range(0..12) * 5, 0)
        .unwrap();

    let end_hour = (start_hour + 1).max(rng.random_range(12..=22));
    let end = date
        .and_hms_opt(end_hour, rng.random_range(0..12) * 5, 0)
        .unwrap();

    // The hour construction already guarantees end > start; keep the
    // invariant checked instead of trusting the ranges.
    if end <= start {
        return Err(AppError::ScheduleRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let meal = rng.random_bool(0.5);

    let notes = if rng.random_bool(0.5) {
        Some(format!("備考テキスト{}", note_index))
    } else {
        None
    };

    let attendance = if end < cutoff(reference) {
        rng.random_range(0..6) < 5
    } else {
        false
    };

    Ok(ScheduleDraft {
        start,
        end,
        meal,
        notes,
        attendance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn drafts(seed: u64, n: usize) -> Vec<ScheduleDraft> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..n)
            .map(|i| draft_schedule(&mut rng, reference(), i + 1).unwrap())
            .collect()
    }

    #[test]
    fn end_falls_on_the_start_day() {
        for d in drafts(1, 500) {
            assert_eq!(d.start.date(), d.end.date());
        }
    }

    #[test]
    fn end_is_at_least_an_hour_later() {
        for d in drafts(2, 500) {
            assert!(d.end > d.start);
            assert!(d.end.hour() >= d.start.hour() + 1);
        }
    }

    #[test]
    fn dates_stay_inside_the_window() {
        for d in drafts(3, 500) {
            let ym = (d.start.year(), d.start.month());
            assert!(
                ym == (2024, 4) || ym == (2024, 5) || ym == (2024, 6),
                "unexpected month {:?}",
                ym
            );
            assert!(d.start.day() <= 28);
            assert!((12..=15).contains(&d.start.hour()));
            assert!((13..=22).contains(&d.end.hour()));
            assert_eq!(d.start.minute() % 5, 0);
            assert_eq!(d.end.minute() % 5, 0);
        }
    }

    #[test]
    fn attendance_never_set_at_or_after_cutoff() {
        let c = cutoff(reference());
        for d in drafts(4, 1000) {
            if d.end >= c {
                assert!(!d.attendance);
            }
        }
    }

    #[test]
    fn attendance_before_cutoff_is_weighted_five_in_six() {
        let c = cutoff(reference());
        let all = drafts(5, 12_000);
        let before: Vec<_> = all.iter().filter(|d| d.end < c).collect();
        assert!(before.len() > 4000, "window should be 2/3 pre-cutoff");

        let attended = before.iter().filter(|d| d.attendance).count();
        let ratio = attended as f64 / before.len() as f64;
        assert!(
            (0.79..0.88).contains(&ratio),
            "attendance ratio {} too far from 5/6",
            ratio
        );
    }

    #[test]
    fn notes_carry_the_sequential_index() {
        let mut seen = 0usize;
        for (i, d) in drafts(6, 500).into_iter().enumerate() {
            if let Some(text) = d.notes {
                assert_eq!(text, format!("備考テキスト{}", i + 1));
                seen += 1;
            }
        }
        // fair coin: roughly half present
        assert!((150..350).contains(&seen));
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        assert_eq!(drafts(42, 100), drafts(42, 100));
    }

    #[test]
    fn january_reference_rolls_into_previous_year() {
        let reference = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut years = std::collections::HashSet::new();
        for i in 0..500 {
            let d = draft_schedule(&mut rng, reference, i + 1).unwrap();
            years.insert(d.start.year());
        }
        assert_eq!(
            years,
            std::collections::HashSet::from([2023, 2024]),
            "window must span both years"
        );
    }
}
