//! HTTP API module for the Revision Engine.
//!
//! This module provides the REST endpoint through which UI and reporting
//! collaborators run claim computations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ClaimRequest;
pub use response::ApiError;
pub use state::AppState;
