//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST API endpoint for recomputing the salary
//! result from an attendance snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
