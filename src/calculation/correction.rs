//! Monetary correction and interest accrual.
//!
//! Shortfalls are brought to present value under a two-phase regime with a
//! regime change at December 2021: up to November 2021 the principal is
//! corrected by the inflation index and accrues simple savings-rate
//! interest; from December 2021 on, accrual switches to a simple sum of the
//! monthly policy rate. The three layers multiply in sequence: inflation
//! on the principal first, then interest, then policy-rate accrual.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{IndexStrategy, ReferenceData};
use crate::models::PayPeriod;

use super::calendar::{add_months, first_of_month, sub_months};

/// First month of the Phase-2 (policy rate) regime.
pub fn regime_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 12, 1).expect("valid date")
}

/// The Phase-1 inflation factor for a competency month.
///
/// Only months on or before November 2021 are inflation-corrected; later
/// months return 1.0. A missing index row, or a zero cumulative factor,
/// degrades to the neutral 1.0 under either strategy.
fn inflation_factor(month: NaiveDate, reference: &ReferenceData) -> Decimal {
    let phase1_last = sub_months(regime_cutoff(), 1);
    if month > phase1_last {
        return Decimal::ONE;
    }

    let indices = reference.indices();
    match reference.strategy() {
        IndexStrategy::DirectLookup => match indices.cumulative_factor(month) {
            Some(factor) if factor > Decimal::ZERO => factor,
            _ => Decimal::ONE,
        },
        IndexStrategy::RatioToReferenceMonth { reference_month } => {
            let numerator = match indices.cumulative_factor(reference_month) {
                Some(factor) if factor > Decimal::ZERO => factor,
                _ => Decimal::ONE,
            };
            match indices.cumulative_factor(month) {
                Some(denominator) if denominator > Decimal::ZERO => numerator / denominator,
                _ => Decimal::ONE,
            }
        }
    }
}

/// Applies the correction to one period in place.
///
/// Periods with a non-positive shortfall get all four derived values set to
/// zero and contribute nothing to the claim total.
pub fn apply_correction(period: &mut PayPeriod, reference: &ReferenceData) {
    if period.shortfall <= Decimal::ZERO {
        period.inflation_factor = Decimal::ZERO;
        period.interest_factor = Decimal::ZERO;
        period.policy_rate_factor = Decimal::ZERO;
        period.corrected_total = Decimal::ZERO;
        return;
    }

    let month = first_of_month(period.competency);
    let phase1_last = sub_months(regime_cutoff(), 1);
    let indices = reference.indices();

    let inflation = inflation_factor(month, reference);

    // Simple interest runs from the month after competency through the end
    // of Phase 1; empty or post-cutoff ranges sum to zero.
    let interest = indices.sum_savings_between(add_months(month, 1), phase1_last);

    // Policy-rate accrual starts at the later of the competency month and
    // the regime cutoff and runs to the end of the series.
    let policy = indices.sum_policy_from(month.max(regime_cutoff()));

    period.inflation_factor = inflation;
    period.interest_factor = interest;
    period.policy_rate_factor = policy;
    period.corrected_total = (period.shortfall
        * inflation
        * (Decimal::ONE + interest)
        * (Decimal::ONE + policy))
        .round_dp(2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        BaseSalaryTable, EconomicIndexRow, EconomicIndexSeries, RankPercentageTable,
        StatuteMetadata,
    };
    use crate::models::PeriodKind;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(month: NaiveDate, cumulative: &str, policy: &str, savings: &str) -> EconomicIndexRow {
        EconomicIndexRow {
            month,
            cumulative_factor: dec(cumulative),
            inflation: Decimal::ZERO,
            policy_rate: dec(policy),
            savings_rate: dec(savings),
        }
    }

    fn reference_with(strategy: IndexStrategy, rows: Vec<EconomicIndexRow>) -> ReferenceData {
        ReferenceData::new(
            StatuteMetadata {
                code: String::new(),
                name: String::new(),
                version: String::new(),
                source_url: String::new(),
            },
            strategy,
            RankPercentageTable::new(HashMap::new()),
            BaseSalaryTable::new(vec![]),
            EconomicIndexSeries::new(rows),
        )
    }

    fn phase_spanning_series() -> Vec<EconomicIndexRow> {
        vec![
            row(ymd(2021, 6, 1), "1.10", "0", "0.002"),
            row(ymd(2021, 7, 1), "1.11", "0", "0.003"),
            row(ymd(2021, 8, 1), "1.12", "0", "0.003"),
            row(ymd(2021, 9, 1), "1.13", "0", "0.004"),
            row(ymd(2021, 10, 1), "1.14", "0", "0.004"),
            row(ymd(2021, 11, 1), "1.155", "0", "0.005"),
            row(ymd(2021, 12, 1), "1.16", "0.0077", "0"),
            row(ymd(2022, 1, 1), "1.17", "0.0073", "0"),
            row(ymd(2022, 2, 1), "1.18", "0.0075", "0"),
        ]
    }

    fn period_with_shortfall(date: NaiveDate, shortfall: &str) -> PayPeriod {
        let mut period = PayPeriod::new(
            date,
            PeriodKind::Monthly,
            "Private".to_string(),
            String::new(),
            dec(shortfall),
        );
        period.shortfall = dec(shortfall);
        period
    }

    #[test]
    fn test_zero_shortfall_yields_all_zero_factors() {
        let reference = reference_with(IndexStrategy::DirectLookup, phase_spanning_series());
        let mut period = period_with_shortfall(ymd(2021, 6, 1), "0.00");
        apply_correction(&mut period, &reference);
        assert_eq!(period.inflation_factor, Decimal::ZERO);
        assert_eq!(period.interest_factor, Decimal::ZERO);
        assert_eq!(period.policy_rate_factor, Decimal::ZERO);
        assert_eq!(period.corrected_total, Decimal::ZERO);
    }

    #[test]
    fn test_direct_lookup_uses_table_value() {
        let reference = reference_with(IndexStrategy::DirectLookup, phase_spanning_series());
        let mut period = period_with_shortfall(ymd(2021, 6, 1), "1000.00");
        apply_correction(&mut period, &reference);
        assert_eq!(period.inflation_factor, dec("1.10"));
    }

    #[test]
    fn test_ratio_strategy_divides_reference_by_month() {
        let reference = reference_with(
            IndexStrategy::RatioToReferenceMonth {
                reference_month: ymd(2021, 11, 1),
            },
            phase_spanning_series(),
        );
        let mut period = period_with_shortfall(ymd(2021, 6, 1), "1000.00");
        apply_correction(&mut period, &reference);
        assert_eq!(period.inflation_factor, dec("1.155") / dec("1.10"));
    }

    #[test]
    fn test_missing_index_row_degrades_to_neutral_factor() {
        let reference = reference_with(IndexStrategy::DirectLookup, phase_spanning_series());
        let mut period = period_with_shortfall(ymd(2021, 1, 1), "1000.00");
        apply_correction(&mut period, &reference);
        assert_eq!(period.inflation_factor, Decimal::ONE);
    }

    #[test]
    fn test_post_cutoff_period_gets_no_inflation_or_interest() {
        let reference = reference_with(IndexStrategy::DirectLookup, phase_spanning_series());
        let mut period = period_with_shortfall(ymd(2022, 1, 1), "1000.00");
        apply_correction(&mut period, &reference);
        assert_eq!(period.inflation_factor, Decimal::ONE);
        assert_eq!(period.interest_factor, Decimal::ZERO);
        // Policy accrual starts at the competency month itself.
        assert_eq!(period.policy_rate_factor, dec("0.0148"));
    }

    #[test]
    fn test_interest_sums_savings_from_next_month_through_november_2021() {
        let reference = reference_with(IndexStrategy::DirectLookup, phase_spanning_series());
        let mut period = period_with_shortfall(ymd(2021, 9, 1), "1000.00");
        apply_correction(&mut period, &reference);
        // October and November 2021 rows only.
        assert_eq!(period.interest_factor, dec("0.009"));
    }

    #[test]
    fn test_policy_accrual_for_phase1_period_starts_at_cutoff() {
        let reference = reference_with(IndexStrategy::DirectLookup, phase_spanning_series());
        let mut period = period_with_shortfall(ymd(2021, 6, 1), "1000.00");
        apply_correction(&mut period, &reference);
        assert_eq!(period.policy_rate_factor, dec("0.0225"));
    }

    #[test]
    fn test_correction_layers_multiply_in_sequence() {
        let rows = vec![
            row(ymd(2021, 6, 1), "1.05", "0", "0"),
            row(ymd(2021, 7, 1), "1.06", "0", "0.02"),
            row(ymd(2021, 11, 1), "1.05", "0", "0"),
            row(ymd(2021, 12, 1), "1.05", "0.10", "0"),
        ];
        let reference = reference_with(IndexStrategy::DirectLookup, rows);
        let mut period = period_with_shortfall(ymd(2021, 6, 1), "1000.00");
        apply_correction(&mut period, &reference);
        assert_eq!(period.inflation_factor, dec("1.05"));
        assert_eq!(period.interest_factor, dec("0.02"));
        assert_eq!(period.policy_rate_factor, dec("0.10"));
        // 1000 x 1.05 x 1.02 x 1.10
        assert_eq!(period.corrected_total, dec("1178.10"));
    }

    #[test]
    fn test_increasing_shortfall_increases_total() {
        let reference = reference_with(IndexStrategy::DirectLookup, phase_spanning_series());
        let mut smaller = period_with_shortfall(ymd(2021, 6, 1), "1000.00");
        let mut larger = period_with_shortfall(ymd(2021, 6, 1), "1000.01");
        apply_correction(&mut smaller, &reference);
        apply_correction(&mut larger, &reference);
        assert!(larger.corrected_total > smaller.corrected_total);
    }

    #[test]
    fn test_thirteenth_salary_competency_normalizes_to_month_start() {
        let reference = reference_with(IndexStrategy::DirectLookup, phase_spanning_series());
        let mut day13 = period_with_shortfall(ymd(2021, 6, 13), "1000.00");
        let mut day1 = period_with_shortfall(ymd(2021, 6, 1), "1000.00");
        apply_correction(&mut day13, &reference);
        apply_correction(&mut day1, &reference);
        assert_eq!(day13.inflation_factor, day1.inflation_factor);
        assert_eq!(day13.interest_factor, day1.interest_factor);
    }

    #[test]
    fn test_empty_series_degrades_to_principal() {
        let reference = reference_with(IndexStrategy::DirectLookup, vec![]);
        let mut period = period_with_shortfall(ymd(2021, 6, 1), "1000.00");
        apply_correction(&mut period, &reference);
        assert_eq!(period.inflation_factor, Decimal::ONE);
        assert_eq!(period.interest_factor, Decimal::ZERO);
        assert_eq!(period.policy_rate_factor, Decimal::ZERO);
        assert_eq!(period.corrected_total, dec("1000.00"));
    }
}
