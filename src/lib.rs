//! Revision Engine for statutory military pay-scale correction claims
//!
//! This crate reconstructs a service member's entitled monthly compensation
//! under a pay-scale correction, reconciles it against the amounts actually
//! paid, and applies the two-phase monetary correction and interest regime
//! to each month's shortfall to produce a final claim amount.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
