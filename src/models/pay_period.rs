//! Pay period model.
//!
//! This module contains the [`PayPeriod`] record that carries one payable
//! event through the whole pipeline: created by the timeline and entitlement
//! stages, updated by reconciliation with the paid amount, and finally by
//! the monetary correction stage with the correction factors and total.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of payable event a period represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// Regular monthly pay, attributed to the 1st of the month.
    Monthly,
    /// 13th salary, attributed to December 13th.
    ThirteenthSalary,
    /// Vacation bonus (one-third rule), attributed to the 15th of its month.
    VacationBonus,
}

/// One payable event in a claim computation.
///
/// Amounts are `Decimal` throughout; the correction fields stay at zero
/// until the monetary correction stage runs, and stay zero for periods
/// whose shortfall is not positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The competency date of the payment obligation.
    pub competency: NaiveDate,
    /// The kind of payable event.
    pub kind: PeriodKind,
    /// Human-readable rank descriptor, e.g. `"Private"` or
    /// `"Private (9d) -> Corporal (21d)"` for a pro-rata month.
    pub rank_descriptor: String,
    /// Legal-basis label of the base-salary period in force, for reporting.
    pub legal_basis: String,
    /// The legally owed amount for this period.
    pub owed: Decimal,
    /// The amount actually paid, from external observations (default 0).
    pub paid: Decimal,
    /// `max(0, owed - paid)`, rounded to 2 decimal places.
    pub shortfall: Decimal,
    /// Phase-1 inflation correction factor applied to the principal.
    pub inflation_factor: Decimal,
    /// Phase-1 simple-interest factor (sum of monthly savings rates).
    pub interest_factor: Decimal,
    /// Phase-2 policy-rate factor (sum of monthly policy rates).
    pub policy_rate_factor: Decimal,
    /// Final corrected amount for this period.
    pub corrected_total: Decimal,
}

impl PayPeriod {
    /// Creates a period with the given competency, kind, descriptor, legal
    /// basis and owed amount; paid, shortfall and correction fields start
    /// at zero.
    pub fn new(
        competency: NaiveDate,
        kind: PeriodKind,
        rank_descriptor: String,
        legal_basis: String,
        owed: Decimal,
    ) -> Self {
        Self {
            competency,
            kind,
            rank_descriptor,
            legal_basis,
            owed,
            paid: Decimal::ZERO,
            shortfall: Decimal::ZERO,
            inflation_factor: Decimal::ZERO,
            interest_factor: Decimal::ZERO,
            policy_rate_factor: Decimal::ZERO,
            corrected_total: Decimal::ZERO,
        }
    }
}
