//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! reference tables from YAML files and normalizing percentage-valued
//! columns into decimal fractions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::Rank;

use super::types::{
    BaseSalaryPeriod, BaseSalaryTable, EconomicIndexRow, EconomicIndexSeries, IndexStrategy,
    RankPercentageTable, ReferenceData, StatuteMetadata,
};

const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Statute file shape: metadata plus the optional index strategy.
#[derive(Debug, Deserialize)]
struct StatuteFile {
    code: String,
    name: String,
    version: String,
    source_url: String,
    #[serde(default)]
    index_strategy: IndexStrategy,
}

/// Rank-percentages file shape; values are percentages of the reference
/// rank's salary (e.g. 30 for 30%).
#[derive(Debug, Deserialize)]
struct RankPercentagesFile {
    percentages: HashMap<Rank, Decimal>,
}

/// Base-salary file shape.
#[derive(Debug, Deserialize)]
struct BaseSalaryFile {
    periods: Vec<BaseSalaryPeriod>,
}

/// Index-series file shape; monthly rate columns are percentages, the
/// cumulative column is already a factor. Missing values default to zero.
#[derive(Debug, Deserialize)]
struct IndexRowFile {
    month: NaiveDate,
    #[serde(default)]
    cumulative_factor: Decimal,
    #[serde(default)]
    inflation: Decimal,
    #[serde(default)]
    policy_rate: Decimal,
    #[serde(default)]
    savings_rate: Decimal,
}

#[derive(Debug, Deserialize)]
struct IndicesFile {
    rows: Vec<IndexRowFile>,
}

/// Loads and provides access to the reference-data snapshot.
///
/// # Directory Structure
///
/// ```text
/// config/revision/
/// ├── statute.yaml           # Statute metadata and index strategy
/// ├── rank_percentages.yaml  # Vertical pay-scale percentages
/// ├── base_salary.yaml       # Reference-rank salary windows
/// └── indices.yaml           # Monthly economic-index series
/// ```
///
/// # Example
///
/// ```no_run
/// use revision_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/revision")?;
/// println!("Statute: {}", loader.statute().name);
/// # Ok::<(), revision_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    reference: ReferenceData,
}

impl ConfigLoader {
    /// Loads the reference tables from the specified directory.
    ///
    /// Returns an error if any required file is missing, contains invalid
    /// YAML, or lacks a required field.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statute = Self::load_yaml::<StatuteFile>(&path.join("statute.yaml"))?;
        let percentages =
            Self::load_yaml::<RankPercentagesFile>(&path.join("rank_percentages.yaml"))?;
        let base_salary = Self::load_yaml::<BaseSalaryFile>(&path.join("base_salary.yaml"))?;
        let indices = Self::load_yaml::<IndicesFile>(&path.join("indices.yaml"))?;

        let metadata = StatuteMetadata {
            code: statute.code,
            name: statute.name,
            version: statute.version,
            source_url: statute.source_url,
        };

        let percentages = RankPercentageTable::new(
            percentages
                .percentages
                .into_iter()
                .map(|(rank, percent)| (rank, percent / PERCENT))
                .collect(),
        );

        let rows = indices
            .rows
            .into_iter()
            .map(|r| EconomicIndexRow {
                month: r.month,
                cumulative_factor: r.cumulative_factor,
                inflation: r.inflation / PERCENT,
                policy_rate: r.policy_rate / PERCENT,
                savings_rate: r.savings_rate / PERCENT,
            })
            .collect();

        let reference = ReferenceData::new(
            metadata,
            statute.index_strategy,
            percentages,
            BaseSalaryTable::new(base_salary.periods),
            EconomicIndexSeries::new(rows),
        );

        Ok(Self { reference })
    }

    /// Loads the reference tables, falling back to an empty snapshot when
    /// the source is missing or malformed.
    ///
    /// The failure is surfaced as a `warn` event and through
    /// [`ReferenceData::is_degraded`]; period-level computation over the
    /// empty snapshot produces zero-valued results instead of failing.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(loader) => loader,
            Err(err) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %err,
                    "Reference data unavailable, continuing with empty tables"
                );
                Self {
                    reference: ReferenceData::empty(),
                }
            }
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded reference-data snapshot.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        self.reference.statute()
    }
}
