//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Profiles, the authenticated context, repository traits
//! - `application/` - Token codec and the sign-up/in/out and authenticate use cases
//! - `infra/` - PostgreSQL and in-memory repositories, the revocation registry
//! - `presentation/` - HTTP handlers, DTOs, router, request gate, extractor
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Stateless HS256 bearer tokens (`Authorization: Bearer <token>`)
//! - Sign-out revokes the token in an in-process registry until it expires
//! - Disabled profiles can neither log in nor be authenticated by old tokens

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token_codec::{TokenClaims, TokenCodec};
pub use domain::entity::auth_context::AuthContext;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryAuthRepository, PgAuthRepository, spawn_revocation_sweeper};
pub use presentation::handlers::AuthAppState;
pub use presentation::middleware::authenticate_request;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
