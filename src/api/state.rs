//! Application state for the Revision Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::ClaimEngine;
use crate::config::{ConfigLoader, ReferenceData};

/// Shared application state.
///
/// Holds the reference-data snapshot behind an `Arc`; every request builds
/// its claim against the same immutable tables.
#[derive(Clone)]
pub struct AppState {
    reference: Arc<ReferenceData>,
}

impl AppState {
    /// Creates application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            reference: Arc::new(config.reference().clone()),
        }
    }

    /// Returns a claim engine over the shared reference snapshot.
    pub fn engine(&self) -> ClaimEngine {
        ClaimEngine::new(Arc::clone(&self.reference))
    }

    /// Returns the shared reference snapshot.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }
}
