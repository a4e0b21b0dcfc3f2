//! HTTP surface: router wiring, page handlers, and API endpoints.

pub mod docs;
pub mod endpoints;
pub mod handlers;
pub mod routes;

pub use handlers::{AppState, IndexTemplate, ServiceInfo};
pub use routes::create_router;
