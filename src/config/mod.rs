//! Configuration loading and management for the Revision Engine.
//!
//! This module provides functionality to load the statutory reference
//! tables from YAML files: the rank-percentage map, the time-boxed
//! base-salary table, and the monthly economic-index series.
//!
//! # Example
//!
//! ```no_run
//! use revision_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/revision").unwrap();
//! println!("Loaded statute: {}", loader.statute().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BaseSalaryPeriod, BaseSalaryTable, EconomicIndexRow, EconomicIndexSeries, IndexStrategy,
    RankPercentageTable, ReferenceData, StatuteMetadata,
};
