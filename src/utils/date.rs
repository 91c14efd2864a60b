use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// First day of the month the given date falls in.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

/// The 3-month generation window ending at the reference month:
/// the reference month itself plus the two months before it.
/// Crossing January rolls into the previous year.
pub fn month_window(reference: NaiveDate) -> [NaiveDate; 3] {
    let last = first_of_month(reference);
    let anchor = last.checked_sub_months(Months::new(2)).unwrap();
    [
        anchor,
        anchor.checked_add_months(Months::new(1)).unwrap(),
        last,
    ]
}

/// Attendance cutoff: midnight on the first day of the reference month.
pub fn cutoff(reference: NaiveDate) -> NaiveDateTime {
    first_of_month(reference).and_hms_opt(0, 0, 0).unwrap()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a "YYYY-MM" month filter into its first day.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()
}

/// First day of the month following the given date's month.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date).checked_add_months(Months::new(1)).unwrap()
}
