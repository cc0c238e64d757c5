//! Reconciliation of owed versus paid amounts.
//!
//! Observed payments arrive from document-extraction collaborators keyed by
//! competency date. Reconciliation is a left join onto the computed period
//! sequence: periods keep a zero paid amount when no observation matches,
//! and the shortfall is recomputed from owed and paid so running the stage
//! twice with the same observations yields identical results.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{PaidAmount, PayPeriod};

/// Applies observed paid amounts to the period sequence and recomputes each
/// period's shortfall.
///
/// Observations sharing a competency date are summed before the join (a
/// single month's pay can be split across stub lines). The shortfall is
/// `max(0, owed - paid)` rounded to 2 decimal places; an overpaid period
/// never produces a negative claim.
pub fn reconcile(periods: &mut [PayPeriod], observed: &[PaidAmount]) {
    let mut by_competency: HashMap<NaiveDate, Decimal> = HashMap::new();
    for payment in observed {
        *by_competency.entry(payment.competency).or_default() += payment.amount;
    }

    for period in periods.iter_mut() {
        period.paid = by_competency
            .get(&period.competency)
            .copied()
            .unwrap_or(Decimal::ZERO);
        period.shortfall = (period.owed - period.paid).max(Decimal::ZERO).round_dp(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodKind;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(date: NaiveDate, owed: &str) -> PayPeriod {
        PayPeriod::new(
            date,
            PeriodKind::Monthly,
            "Private".to_string(),
            String::new(),
            dec(owed),
        )
    }

    #[test]
    fn test_matching_observation_sets_paid_and_shortfall() {
        let mut periods = vec![period(ymd(2020, 6, 1), "3750.00")];
        reconcile(
            &mut periods,
            &[PaidAmount {
                competency: ymd(2020, 6, 1),
                amount: dec("3500.00"),
            }],
        );
        assert_eq!(periods[0].paid, dec("3500.00"));
        assert_eq!(periods[0].shortfall, dec("250.00"));
    }

    #[test]
    fn test_unmatched_period_defaults_to_zero_paid() {
        let mut periods = vec![period(ymd(2020, 6, 1), "3750.00")];
        reconcile(&mut periods, &[]);
        assert_eq!(periods[0].paid, Decimal::ZERO);
        assert_eq!(periods[0].shortfall, dec("3750.00"));
    }

    #[test]
    fn test_overpayment_floors_shortfall_at_zero() {
        let mut periods = vec![period(ymd(2020, 6, 1), "3750.00")];
        reconcile(
            &mut periods,
            &[PaidAmount {
                competency: ymd(2020, 6, 1),
                amount: dec("4000.00"),
            }],
        );
        assert_eq!(periods[0].shortfall, Decimal::ZERO);
    }

    #[test]
    fn test_observations_for_unknown_dates_are_ignored() {
        let mut periods = vec![period(ymd(2020, 6, 1), "3750.00")];
        reconcile(
            &mut periods,
            &[PaidAmount {
                competency: ymd(2020, 7, 1),
                amount: dec("9999.00"),
            }],
        );
        assert_eq!(periods[0].paid, Decimal::ZERO);
    }

    #[test]
    fn test_same_date_observations_are_summed() {
        let mut periods = vec![period(ymd(2020, 6, 1), "3750.00")];
        reconcile(
            &mut periods,
            &[
                PaidAmount {
                    competency: ymd(2020, 6, 1),
                    amount: dec("2000.00"),
                },
                PaidAmount {
                    competency: ymd(2020, 6, 1),
                    amount: dec("1000.00"),
                },
            ],
        );
        assert_eq!(periods[0].paid, dec("3000.00"));
        assert_eq!(periods[0].shortfall, dec("750.00"));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let observed = vec![PaidAmount {
            competency: ymd(2020, 6, 1),
            amount: dec("3500.00"),
        }];
        let mut periods = vec![period(ymd(2020, 6, 1), "3750.00")];
        reconcile(&mut periods, &observed);
        let first_pass = periods.clone();
        reconcile(&mut periods, &observed);
        assert_eq!(periods, first_pass);
    }

    #[test]
    fn test_shortfall_is_rounded_to_two_decimals() {
        let mut periods = vec![period(ymd(2020, 6, 1), "3750.555")];
        reconcile(
            &mut periods,
            &[PaidAmount {
                competency: ymd(2020, 6, 1),
                amount: dec("0.001"),
            }],
        );
        assert_eq!(periods[0].shortfall, dec("3750.55"));
    }
}
