//! HTTP service wrapping the attendance engine.
//!
//! The engine itself is pure and synchronous; this crate supplies the
//! request/response boundary the browser client talks to.

pub mod config;
pub mod error;
pub mod routes;

pub use config::Config;
pub use error::ApiError;
pub use routes::{CalculateRequest, router};
