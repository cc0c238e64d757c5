//! Timeline construction.
//!
//! Derives the ordered, deduplicated sequence of competency dates a claim
//! must evaluate: one day-1 entry per month between the statute-of-
//! limitations floor and the last closed month, one day-13 entry per
//! December in range (13th salary), and one day-15 entry per injected
//! vacation date.

use chrono::{Datelike, NaiveDate};

use crate::models::PeriodKind;

use super::calendar::{first_of_month, sub_months};

/// How many years back from the filing date the claim may reach.
pub const LIMITATION_YEARS: u32 = 5;

/// One competency date to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Competency {
    /// The competency date (day 1, 13 or 15 depending on the kind).
    pub date: NaiveDate,
    /// The kind of payable event.
    pub kind: PeriodKind,
}

/// Returns the inclusive `[lower, upper]` month bounds of the timeline.
///
/// The lower bound is the later of the enlistment month and the month five
/// years before filing, at day 1. The upper bound is the month before
/// `as_of`, the last closed month; the running month's pay has not posted
/// and is never evaluated. When the bounds cross (a member enlisted within
/// the running month), the timeline collapses to the single lower month.
pub fn timeline_bounds(
    enlistment: NaiveDate,
    filing: NaiveDate,
    as_of: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    let limitation_floor = sub_months(filing, LIMITATION_YEARS * 12);
    let lower = first_of_month(enlistment.max(limitation_floor));
    let upper = sub_months(as_of, 1);
    if upper < lower {
        (lower, lower)
    } else {
        (lower, upper)
    }
}

/// Builds the full competency timeline.
///
/// Vacation dates are clamped to day 15 of their month and kept only when
/// inside the bounds; duplicates collapse to one entry. The result is
/// sorted ascending by date.
///
/// # Example
///
/// ```
/// use revision_engine::calculation::build_timeline;
/// use chrono::NaiveDate;
///
/// let enlistment = NaiveDate::from_ymd_opt(2010, 2, 1).unwrap();
/// let filing = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let timeline = build_timeline(enlistment, filing, filing, &[]);
/// assert_eq!(timeline.first().unwrap().date, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
/// assert_eq!(timeline.last().unwrap().date, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
/// ```
pub fn build_timeline(
    enlistment: NaiveDate,
    filing: NaiveDate,
    as_of: NaiveDate,
    vacation_dates: &[NaiveDate],
) -> Vec<Competency> {
    let (lower, upper) = timeline_bounds(enlistment, filing, as_of);

    let mut competencies = Vec::new();

    let mut month = lower;
    while month <= upper {
        competencies.push(Competency {
            date: month,
            kind: PeriodKind::Monthly,
        });
        month = super::calendar::add_months(month, 1);
    }

    for year in lower.year()..=upper.year() {
        let thirteenth = NaiveDate::from_ymd_opt(year, 12, 13).expect("December 13th exists");
        if thirteenth >= lower && thirteenth <= upper {
            competencies.push(Competency {
                date: thirteenth,
                kind: PeriodKind::ThirteenthSalary,
            });
        }
    }

    for vacation in vacation_dates {
        let clamped = vacation.with_day(15).expect("day 15 exists in every month");
        if clamped >= lower && clamped <= upper {
            competencies.push(Competency {
                date: clamped,
                kind: PeriodKind::VacationBonus,
            });
        }
    }

    competencies.sort();
    competencies.dedup();
    competencies
}
