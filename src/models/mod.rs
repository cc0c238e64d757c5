//! Core data models for the Revision Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod career;
mod claim;
mod pay_period;
mod rank;

pub use career::{CareerEntry, CareerHistory};
pub use claim::{ClaimInput, ClaimResult, ClaimTotals, ClaimWarning, PaidAmount};
pub use pay_period::{PayPeriod, PeriodKind};
pub use rank::Rank;
