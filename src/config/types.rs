//! Configuration types for the statutory reference tables.
//!
//! Tables are built once per load and treated as immutable snapshots for
//! the lifetime of a run. Every lookup that can miss resolves to a neutral
//! numeric default instead of an error, so period-level computation stays
//! best-effort even over incomplete tables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::Rank;

/// Metadata about the statute underlying the pay-scale correction.
#[derive(Debug, Clone, Deserialize)]
pub struct StatuteMetadata {
    /// Identifier of the statute (e.g. "LC-443/2014").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version or consolidation date of the reference tables.
    pub version: String,
    /// URL to the official publication.
    pub source_url: String,
}

/// How the Phase-1 inflation factor is derived from the index series.
///
/// The two observed computation variants disagree on this point, so the
/// engine treats it as an injectable strategy selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexStrategy {
    /// Use the competency month's cumulative factor directly.
    DirectLookup,
    /// Divide a fixed reference month's cumulative factor by the competency
    /// month's, so the factor restates the principal at reference-month
    /// prices.
    RatioToReferenceMonth {
        /// First-of-month date of the reference row.
        reference_month: NaiveDate,
    },
}

impl Default for IndexStrategy {
    /// The ratio variant against November 2021 is the one whose output was
    /// reconciled against the authoritative spreadsheet.
    fn default() -> Self {
        IndexStrategy::RatioToReferenceMonth {
            reference_month: NaiveDate::from_ymd_opt(2021, 11, 1).expect("valid date"),
        }
    }
}

/// Rank-to-percentage map of the vertical pay scale.
///
/// Percentages are stored as decimal fractions of the reference rank's base
/// salary (1.0 = 100%). A rank missing from the table resolves to zero.
#[derive(Debug, Clone, Default)]
pub struct RankPercentageTable {
    map: HashMap<Rank, Decimal>,
}

impl RankPercentageTable {
    /// Creates a table from fractions keyed by rank.
    pub fn new(map: HashMap<Rank, Decimal>) -> Self {
        Self { map }
    }

    /// Returns the fraction for a rank; `None` (not enlisted) and unmatched
    /// ranks both resolve to zero.
    pub fn fraction(&self, rank: Option<Rank>) -> Decimal {
        rank.and_then(|r| self.map.get(&r).copied())
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// One validity window of the reference rank's base salary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BaseSalaryPeriod {
    /// First day the amount is in force.
    pub start_date: NaiveDate,
    /// Last day the amount is in force (inclusive).
    pub end_date: NaiveDate,
    /// Monthly base salary of the reference rank.
    pub amount: Decimal,
    /// Label of the statute or amendment establishing the amount.
    pub legal_basis: String,
}

/// The time-boxed base-salary table.
///
/// Windows are sorted by start date; a date matching no window resolves to
/// a zero base amount.
#[derive(Debug, Clone, Default)]
pub struct BaseSalaryTable {
    periods: Vec<BaseSalaryPeriod>,
}

impl BaseSalaryTable {
    /// Creates a table, sorting the windows by start date.
    pub fn new(mut periods: Vec<BaseSalaryPeriod>) -> Self {
        periods.sort_by_key(|p| p.start_date);
        Self { periods }
    }

    /// Returns the window in force on the given date, if any.
    pub fn lookup(&self, date: NaiveDate) -> Option<&BaseSalaryPeriod> {
        self.periods
            .iter()
            .find(|p| p.start_date <= date && p.end_date >= date)
    }

    /// Returns all windows in ascending order.
    pub fn periods(&self) -> &[BaseSalaryPeriod] {
        &self.periods
    }

    /// Returns true if the table has no windows.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

/// One month of the economic-index series.
///
/// All rate values are decimal fractions (not percentages) after load-time
/// normalization; missing values normalize to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EconomicIndexRow {
    /// First-of-month date keying the row.
    pub month: NaiveDate,
    /// Cumulative inflation factor up to this month.
    pub cumulative_factor: Decimal,
    /// Monthly inflation value.
    pub inflation: Decimal,
    /// Monthly policy-rate value.
    pub policy_rate: Decimal,
    /// Monthly savings-account interest value.
    pub savings_rate: Decimal,
}

/// The monthly economic-index series, sorted ascending and unique by month.
#[derive(Debug, Clone, Default)]
pub struct EconomicIndexSeries {
    rows: Vec<EconomicIndexRow>,
}

impl EconomicIndexSeries {
    /// Creates a series, sorting rows ascending by month and dropping
    /// duplicate months (first occurrence wins).
    pub fn new(mut rows: Vec<EconomicIndexRow>) -> Self {
        rows.sort_by_key(|r| r.month);
        rows.dedup_by_key(|r| r.month);
        Self { rows }
    }

    /// Returns the cumulative inflation factor for a month, if present.
    pub fn cumulative_factor(&self, month: NaiveDate) -> Option<Decimal> {
        self.rows
            .iter()
            .find(|r| r.month == month)
            .map(|r| r.cumulative_factor)
    }

    /// Simple (additive) sum of the monthly savings-rate values for months
    /// in `[from, to]` inclusive; zero when the range matches no rows.
    pub fn sum_savings_between(&self, from: NaiveDate, to: NaiveDate) -> Decimal {
        self.rows
            .iter()
            .filter(|r| r.month >= from && r.month <= to)
            .map(|r| r.savings_rate)
            .sum()
    }

    /// Simple sum of the monthly policy-rate values for months on or after
    /// `from`, through the end of the series; zero when empty.
    pub fn sum_policy_from(&self, from: NaiveDate) -> Decimal {
        self.rows
            .iter()
            .filter(|r| r.month >= from)
            .map(|r| r.policy_rate)
            .sum()
    }

    /// Returns all rows in ascending order.
    pub fn rows(&self) -> &[EconomicIndexRow] {
        &self.rows
    }

    /// Returns true if the series has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The complete immutable reference-data snapshot for one or more runs.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    metadata: StatuteMetadata,
    strategy: IndexStrategy,
    percentages: RankPercentageTable,
    base_salary: BaseSalaryTable,
    indices: EconomicIndexSeries,
}

impl ReferenceData {
    /// Creates a snapshot from its component tables.
    pub fn new(
        metadata: StatuteMetadata,
        strategy: IndexStrategy,
        percentages: RankPercentageTable,
        base_salary: BaseSalaryTable,
        indices: EconomicIndexSeries,
    ) -> Self {
        Self {
            metadata,
            strategy,
            percentages,
            base_salary,
            indices,
        }
    }

    /// An empty snapshot: every lookup resolves to its neutral default.
    /// Used when the configuration source is missing or malformed, so a run
    /// degrades to zero-valued results instead of failing.
    pub fn empty() -> Self {
        Self {
            metadata: StatuteMetadata {
                code: String::new(),
                name: String::new(),
                version: String::new(),
                source_url: String::new(),
            },
            strategy: IndexStrategy::default(),
            percentages: RankPercentageTable::default(),
            base_salary: BaseSalaryTable::default(),
            indices: EconomicIndexSeries::default(),
        }
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        &self.metadata
    }

    /// Returns the configured inflation-index strategy.
    pub fn strategy(&self) -> IndexStrategy {
        self.strategy
    }

    /// Returns the rank-percentage table.
    pub fn percentages(&self) -> &RankPercentageTable {
        &self.percentages
    }

    /// Returns the base-salary table.
    pub fn base_salary(&self) -> &BaseSalaryTable {
        &self.base_salary
    }

    /// Returns the economic-index series.
    pub fn indices(&self) -> &EconomicIndexSeries {
        &self.indices
    }

    /// Returns true when every table is empty, i.e. the snapshot was built
    /// by [`ReferenceData::empty`] or from an empty source.
    pub fn is_degraded(&self) -> bool {
        self.percentages.is_empty() && self.base_salary.is_empty() && self.indices.is_empty()
    }
}
