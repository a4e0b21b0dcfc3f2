//! Nudge AI web service.
//!
//! A small axum application serving the Nudge AI landing page, static
//! assets, and a JSON status API. The router is assembled once at startup:
//! inline page handlers, a /static file mount, and an externally built
//! endpoint collection merged in as a value.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`metrics`]: Prometheus counters and recorder setup
//! - [`web`]: Router wiring, page handlers, and API endpoints
//! - [`utils`]: Utility functions

pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;
pub mod web;

pub use config::Config;
pub use error::{AppError, Result};
