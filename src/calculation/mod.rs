//! Calculation logic for the Revision Engine.
//!
//! This module contains the calculation stages of a claim: calendar
//! helpers, timeline construction, the level (triennium) factor, per-period
//! entitlement with pro-rata promotion splitting, owed-versus-paid
//! reconciliation, the two-phase monetary correction, and the
//! [`ClaimEngine`] pipeline tying them together.

mod calendar;
mod correction;
mod engine;
mod entitlement;
mod level_factor;
mod reconcile;
mod timeline;

pub use calendar::{
    add_months, days_in_month, first_of_month, last_of_month, sub_months, whole_years_between,
};
pub use correction::{apply_correction, regime_cutoff};
pub use engine::ClaimEngine;
pub use entitlement::{Entitlement, calculate_entitlement};
pub use level_factor::level_factor;
pub use reconcile::reconcile;
pub use timeline::{Competency, LIMITATION_YEARS, build_timeline, timeline_bounds};
