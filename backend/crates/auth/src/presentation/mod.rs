//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, the request gate and the context extractor.

pub mod dto;
pub mod extractor;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::authenticate_request;
pub use router::auth_router;
