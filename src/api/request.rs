//! Request types for the Revision Engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CareerEntry, CareerHistory, ClaimInput, PaidAmount, Rank};

/// Request body for the `/calculate` endpoint.
///
/// Rank labels must come from the engine's fixed vocabulary; free-text
/// labels from scanned documents are normalized by the extraction
/// collaborators before they reach this boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRequest {
    /// The date the member enlisted.
    pub enlistment_date: NaiveDate,
    /// The date the claim was (or will be) filed.
    pub filing_date: NaiveDate,
    /// The as-of date bounding the timeline; defaults to the filing date.
    #[serde(default)]
    pub as_of_date: Option<NaiveDate>,
    /// The promotion history.
    pub career_history: Vec<CareerEntryRequest>,
    /// Observed paid amounts from pay-stub extraction.
    #[serde(default)]
    pub paid_amounts: Vec<PaidAmountRequest>,
    /// Vacation start dates; each yields a day-15 vacation-bonus period.
    #[serde(default)]
    pub vacation_dates: Vec<NaiveDate>,
}

/// A promotion event in a claim request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerEntryRequest {
    /// The date the rank takes effect.
    pub effective_date: NaiveDate,
    /// The rank held from that date on.
    pub rank: Rank,
}

/// An observed payment in a claim request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaidAmountRequest {
    /// The competency date the payment pertains to.
    pub competency: NaiveDate,
    /// The observed paid amount.
    pub amount: Decimal,
}

impl From<CareerEntryRequest> for CareerEntry {
    fn from(req: CareerEntryRequest) -> Self {
        CareerEntry {
            effective_date: req.effective_date,
            rank: req.rank,
        }
    }
}

impl From<PaidAmountRequest> for PaidAmount {
    fn from(req: PaidAmountRequest) -> Self {
        PaidAmount {
            competency: req.competency,
            amount: req.amount,
        }
    }
}

impl From<ClaimRequest> for ClaimInput {
    fn from(req: ClaimRequest) -> Self {
        ClaimInput {
            enlistment_date: req.enlistment_date,
            filing_date: req.filing_date,
            as_of_date: req.as_of_date.unwrap_or(req.filing_date),
            history: CareerHistory::new(
                req.career_history.into_iter().map(Into::into).collect(),
            ),
            paid_amounts: req.paid_amounts.into_iter().map(Into::into).collect(),
            vacation_dates: req.vacation_dates,
        }
    }
}
