//! REST API implementation
//!
//! - types: Request/response type definitions
//! - extractors: Custom request extractors
//! - handlers: API endpoint handlers
//! - router: Router creation, CORS and tracing layers
//! - tests: Unit tests for the components above

mod extractors;
mod handlers;
mod router;
mod tests;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::{create_router, CORS_ALLOWED_HEADERS};
pub use types::{AppState, HealthResponse, SheltersResponse};
