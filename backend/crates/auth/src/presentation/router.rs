//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::domain::repository::{ProfileRepository, RevocationRepository};
use crate::presentation::handlers::{self, AuthAppState};

/// Routes for registration, login, sign-out and the caller's profile
///
/// The request gate is not applied here; the application layers
/// [`authenticate_request`](crate::presentation::middleware::authenticate_request)
/// over the whole router so every context sees it.
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: ProfileRepository + RevocationRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/signout", post(handlers::sign_out::<R>))
        .route("/profile", get(handlers::current_profile::<R>))
        .with_state(state)
}
