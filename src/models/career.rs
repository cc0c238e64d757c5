//! Career history model.
//!
//! This module defines the [`CareerEntry`] and [`CareerHistory`] types that
//! record a service member's promotions over time and answer point-in-time
//! rank queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Rank;

/// A single promotion (or enlistment) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerEntry {
    /// The date the rank takes effect.
    pub effective_date: NaiveDate,
    /// The rank held from that date on.
    pub rank: Rank,
}

/// An ordered list of promotion events.
///
/// The rank in force at a date `D` is the rank of the latest entry with an
/// effective date on or before `D`. Dates before the first entry have no
/// rank ("not yet enlisted"), which the engine treats as a zero entitlement.
///
/// # Example
///
/// ```
/// use revision_engine::models::{CareerEntry, CareerHistory, Rank};
/// use chrono::NaiveDate;
///
/// let history = CareerHistory::new(vec![
///     CareerEntry {
///         effective_date: NaiveDate::from_ymd_opt(2010, 2, 1).unwrap(),
///         rank: Rank::Private,
///     },
///     CareerEntry {
///         effective_date: NaiveDate::from_ymd_opt(2015, 6, 10).unwrap(),
///         rank: Rank::Corporal,
///     },
/// ]);
///
/// let d = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
/// assert_eq!(history.rank_on(d), Some(Rank::Private));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerHistory {
    entries: Vec<CareerEntry>,
}

impl CareerHistory {
    /// Creates a history from entries in any order; entries are sorted by
    /// effective date (stable, so same-day entries keep their input order).
    pub fn new(mut entries: Vec<CareerEntry>) -> Self {
        entries.sort_by_key(|e| e.effective_date);
        Self { entries }
    }

    /// Returns the entries in ascending date order.
    pub fn entries(&self) -> &[CareerEntry] {
        &self.entries
    }

    /// Returns true if the history contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the rank in force on the given date, or `None` when the date
    /// precedes the first entry (not yet enlisted).
    pub fn rank_on(&self, date: NaiveDate) -> Option<Rank> {
        self.entries
            .iter()
            .rfind(|e| e.effective_date <= date)
            .map(|e| e.rank)
    }

    /// Returns the promotions with an effective date strictly after `start`
    /// and on or before `end`, in date order.
    pub fn promotions_within(&self, start: NaiveDate, end: NaiveDate) -> Vec<&CareerEntry> {
        self.entries
            .iter()
            .filter(|e| e.effective_date > start && e.effective_date <= end)
            .collect()
    }
}
