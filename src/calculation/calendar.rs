//! Calendar arithmetic shared by the calculation stages.
//!
//! Competency dates, index rows, and base-salary windows are all keyed or
//! bounded by calendar months, so the same handful of date helpers shows up
//! in every stage.

use chrono::{Datelike, Months, NaiveDate};

/// Returns the first day of the date's month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Returns the number of days in the date's month (28, 29, 30 or 31).
pub fn days_in_month(date: NaiveDate) -> u32 {
    last_of_month(date).day()
}

/// Returns the last day of the date's month.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let next = first_of_month(date) + Months::new(1);
    next.pred_opt().expect("month start has a predecessor")
}

/// Returns the first day of the month `n` months after the date's month.
pub fn add_months(date: NaiveDate, n: u32) -> NaiveDate {
    first_of_month(date) + Months::new(n)
}

/// Returns the first day of the month `n` months before the date's month.
pub fn sub_months(date: NaiveDate, n: u32) -> NaiveDate {
    first_of_month(date) - Months::new(n)
}

/// Whole calendar years elapsed from `from` to `to` (negative-free: returns
/// zero when `to` precedes `from`). A year completes on the anniversary day.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to < from {
        return 0;
    }
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years.max(0) as u32
}
