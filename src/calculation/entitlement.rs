//! Entitlement calculation.
//!
//! For each competency date this module computes the legally owed amount:
//! base salary of the reference rank for the month, scaled by the claimant
//! rank's percentage and the level factor. Months containing a promotion
//! are split pro-rata die between the old and the new rank. 13th-salary
//! periods pay a full month; vacation-bonus periods pay one third.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::ReferenceData;
use crate::models::{CareerHistory, PeriodKind, Rank};

use super::calendar::{days_in_month, first_of_month, last_of_month};
use super::level_factor::level_factor;
use super::timeline::Competency;

/// The computed entitlement for one competency date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entitlement {
    /// Descriptor of the rank(s) the amount was computed for.
    pub rank_descriptor: String,
    /// Legal-basis label of the base-salary window in force.
    pub legal_basis: String,
    /// The owed amount, rounded to 2 decimal places.
    pub owed: Decimal,
}

fn rank_label(rank: Option<Rank>) -> String {
    match rank {
        Some(rank) => rank.to_string(),
        None => "Not Enlisted".to_string(),
    }
}

/// Full-month value for a rank at a reference date: base salary times the
/// rank percentage times the level factor. Unmatched ranks and base-salary
/// gaps contribute zero.
fn full_month_value(
    rank: Option<Rank>,
    base: Decimal,
    reference_date: NaiveDate,
    enlistment: NaiveDate,
    reference: &ReferenceData,
) -> Decimal {
    base * reference.percentages().fraction(rank) * level_factor(rank, reference_date, enlistment)
}

/// Computes the entitlement for one competency date.
///
/// Regular months look for a promotion effective strictly after day 1 and
/// on or before the month's last day; when one exists the month is split
/// into an old and a new sub-period sharing the month's day count as the
/// pro-rata denominator. Only the first promotion in the month is honored.
/// 13th-salary and vacation periods use the rank in force on day 1 of
/// their month.
pub fn calculate_entitlement(
    competency: &Competency,
    history: &CareerHistory,
    reference: &ReferenceData,
    enlistment: NaiveDate,
) -> Entitlement {
    let month_start = first_of_month(competency.date);
    let (base, legal_basis) = match reference.base_salary().lookup(month_start) {
        Some(window) => (window.amount, window.legal_basis.clone()),
        None => (Decimal::ZERO, String::new()),
    };

    match competency.kind {
        PeriodKind::VacationBonus => {
            let rank = history.rank_on(month_start);
            let owed = full_month_value(rank, base, month_start, enlistment, reference)
                / Decimal::from(3);
            Entitlement {
                rank_descriptor: format!("Vacation (1/3) - {}", rank_label(rank)),
                legal_basis,
                owed: owed.round_dp(2),
            }
        }
        PeriodKind::ThirteenthSalary => {
            let rank = history.rank_on(month_start);
            let owed = full_month_value(rank, base, month_start, enlistment, reference);
            Entitlement {
                rank_descriptor: format!("13th Salary - {}", rank_label(rank)),
                legal_basis,
                owed: owed.round_dp(2),
            }
        }
        PeriodKind::Monthly => {
            let month_end = last_of_month(month_start);
            let promotions = history.promotions_within(month_start, month_end);

            let Some(promotion) = promotions.first() else {
                let rank = history.rank_on(month_start);
                let owed = full_month_value(rank, base, month_start, enlistment, reference);
                return Entitlement {
                    rank_descriptor: rank_label(rank),
                    legal_basis,
                    owed: owed.round_dp(2),
                };
            };

            let total_days = days_in_month(month_start);
            let promotion_day = promotion.effective_date.day();

            let old_days = promotion_day - 1;
            let new_days = total_days - promotion_day + 1;
            let old_period_end = month_start
                .with_day(old_days)
                .expect("day before a mid-month promotion exists");

            let old_rank = history.rank_on(month_start);
            let new_rank = Some(promotion.rank);

            let denominator = Decimal::from(total_days);
            let old_total = full_month_value(old_rank, base, old_period_end, enlistment, reference)
                / denominator
                * Decimal::from(old_days);
            let new_total = full_month_value(new_rank, base, month_end, enlistment, reference)
                / denominator
                * Decimal::from(new_days);

            Entitlement {
                rank_descriptor: format!(
                    "{} ({}d) -> {} ({}d)",
                    rank_label(old_rank),
                    old_days,
                    rank_label(new_rank),
                    new_days
                ),
                legal_basis,
                owed: (old_total + new_total).round_dp(2),
            }
        }
    }
}
