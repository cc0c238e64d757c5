//! Claim input and result models.
//!
//! This module contains the [`ClaimInput`] consumed by the engine and the
//! [`ClaimResult`] it produces: the full per-period record set plus the
//! headline totals and any degraded-mode warnings, suitable for tabular
//! display, CSV export, or report generation by external collaborators.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CareerHistory, PayPeriod};

/// An externally observed payment for one competency date.
///
/// These come from document-extraction collaborators (pay-stub PDF/HTML
/// scraping or a manually filled spreadsheet) and are matched against
/// computed periods by exact competency date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidAmount {
    /// The competency date the payment pertains to.
    pub competency: NaiveDate,
    /// The observed paid amount.
    pub amount: Decimal,
}

/// The full input for one claim computation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInput {
    /// The date the member enlisted.
    pub enlistment_date: NaiveDate,
    /// The date the claim was (or will be) filed; the 5-year statute of
    /// limitations counts back from this date.
    pub filing_date: NaiveDate,
    /// The date the computation is run "as of"; the last evaluated month is
    /// the month before this date.
    pub as_of_date: NaiveDate,
    /// The member's promotion history.
    pub history: CareerHistory,
    /// Externally observed paid amounts, keyed by competency date.
    pub paid_amounts: Vec<PaidAmount>,
    /// Vacation start dates reported by the member or extracted from
    /// documents; each yields a day-15 vacation-bonus period.
    pub vacation_dates: Vec<NaiveDate>,
}

/// Headline totals over all periods of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimTotals {
    /// Sum of per-period shortfalls (the nominal principal).
    pub principal: Decimal,
    /// Monetary correction and interest accrued on top of the principal.
    pub correction: Decimal,
    /// Sum of per-period corrected totals.
    pub grand_total: Decimal,
}

/// A non-fatal condition surfaced alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimWarning {
    /// Stable code for programmatic handling.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl ClaimWarning {
    /// Creates a new warning.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The result of one claim computation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimResult {
    /// All evaluated periods in ascending competency order.
    pub periods: Vec<PayPeriod>,
    /// Headline totals over the periods.
    pub totals: ClaimTotals,
    /// Degraded-mode and data-quality warnings.
    pub warnings: Vec<ClaimWarning>,
}

impl ClaimResult {
    /// Builds a result from periods and warnings, computing the totals.
    pub fn from_periods(periods: Vec<PayPeriod>, warnings: Vec<ClaimWarning>) -> Self {
        let principal: Decimal = periods.iter().map(|p| p.shortfall).sum();
        let grand_total: Decimal = periods.iter().map(|p| p.corrected_total).sum();
        Self {
            periods,
            totals: ClaimTotals {
                principal,
                correction: grand_total - principal,
                grand_total,
            },
            warnings,
        }
    }
}
