//! HTTP interface
//!
//! Routing, response envelope and error mapping around the scorer.

pub mod cors;
pub mod envelope;
pub mod error;
pub mod routes;

pub use envelope::{ApiResponse, Meta, Status};
pub use error::{ApiError, ApiResult};
pub use routes::router;
