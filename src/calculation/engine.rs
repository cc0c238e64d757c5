//! Claim computation pipeline.
//!
//! [`ClaimEngine`] ties the stages together for one claimant: timeline,
//! per-period entitlement, reconciliation against observed payments, and
//! monetary correction, producing the aggregated [`ClaimResult`]. Each run
//! owns its own period sequence; the reference snapshot is shared
//! read-only.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ReferenceData;
use crate::models::{ClaimInput, ClaimResult, ClaimWarning, PayPeriod, PeriodKind};

use super::calendar::last_of_month;
use super::correction::apply_correction;
use super::entitlement::calculate_entitlement;
use super::reconcile::reconcile;
use super::timeline::build_timeline;

/// Runs claim computations against one reference-data snapshot.
#[derive(Debug, Clone)]
pub struct ClaimEngine {
    reference: Arc<ReferenceData>,
}

impl ClaimEngine {
    /// Creates an engine over the given reference snapshot.
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Returns the reference snapshot the engine computes against.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Computes a full claim for one claimant.
    ///
    /// The computation never fails: missing reference rows and unmatched
    /// lookups degrade to zero-valued periods, and degraded conditions are
    /// reported through [`ClaimResult::warnings`].
    pub fn calculate(&self, input: &ClaimInput) -> ClaimResult {
        let mut warnings = Vec::new();

        if self.reference.is_degraded() {
            warnings.push(ClaimWarning::new(
                "DEGRADED_REFERENCE_DATA",
                "Reference tables are empty; all owed amounts degrade to zero",
            ));
        }

        let timeline = build_timeline(
            input.enlistment_date,
            input.filing_date,
            input.as_of_date,
            &input.vacation_dates,
        );

        let mut periods: Vec<PayPeriod> = timeline
            .iter()
            .map(|competency| {
                if competency.kind == PeriodKind::Monthly {
                    let extra = input
                        .history
                        .promotions_within(competency.date, last_of_month(competency.date))
                        .len()
                        .saturating_sub(1);
                    if extra > 0 {
                        warn!(
                            competency = %competency.date,
                            skipped = extra,
                            "Multiple promotions in one month; only the first is honored"
                        );
                        warnings.push(ClaimWarning::new(
                            "MULTIPLE_PROMOTIONS_IN_MONTH",
                            format!(
                                "{} extra promotion(s) in {} ignored by pro-rata split",
                                extra, competency.date
                            ),
                        ));
                    }
                }

                let entitlement = calculate_entitlement(
                    competency,
                    &input.history,
                    &self.reference,
                    input.enlistment_date,
                );
                PayPeriod::new(
                    competency.date,
                    competency.kind,
                    entitlement.rank_descriptor,
                    entitlement.legal_basis,
                    entitlement.owed,
                )
            })
            .collect();

        reconcile(&mut periods, &input.paid_amounts);

        for period in periods.iter_mut() {
            apply_correction(period, &self.reference);
        }

        debug!(
            periods = periods.len(),
            observations = input.paid_amounts.len(),
            "Claim computation finished"
        );

        ClaimResult::from_periods(periods, warnings)
    }
}
