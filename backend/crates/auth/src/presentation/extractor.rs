//! Authenticated Context extractor
//!
//! Route guard for handlers that need a caller:
//!
//! ```rust,ignore
//! async fn handler(ctx: AuthContext) -> impl IntoResponse { /* ... */ }
//! ```
//!
//! Rejects with `Unauthenticated` (401) when the request gate did not
//! establish a context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::entity::auth_context::AuthContext;
use crate::error::AuthError;

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}
