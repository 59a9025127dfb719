//! Request Gate
//!
//! Runs once per inbound request before any handler:
//!
//! 1. no `Authorization` header, or a non-bearer scheme: continue unauthenticated
//! 2. bearer token that was revoked: reject 401 "Token is blacklisted."
//! 3. bearer token that is malformed or expired: reject 401
//! 4. decoded token whose subject resolves to an active profile: insert an
//!    [`AuthContext`] unless one is already present
//! 5. otherwise continue
//!
//! Endpoints that require a caller enforce it themselves through the
//! `AuthContext` extractor.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::bearer::Credential;

use crate::application::AuthenticateUseCase;
use crate::domain::entity::auth_context::AuthContext;
use crate::domain::repository::{ProfileRepository, RevocationRepository};
use crate::presentation::handlers::AuthAppState;

pub async fn authenticate_request<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: ProfileRepository + RevocationRepository + Clone + Send + Sync + 'static,
{
    let token = match Credential::from_headers(req.headers()) {
        Credential::Bearer(token) => token,
        Credential::Absent | Credential::OtherScheme => return next.run(req).await,
    };

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.codec.clone());

    let claims = match use_case.verify(&token).await {
        Ok(claims) => claims,
        Err(e) => return e.into_response(),
    };

    if req.extensions().get::<AuthContext>().is_none() {
        match use_case.resolve(&claims).await {
            Ok(Some(ctx)) => {
                tracing::debug!(profile_id = %ctx.profile_id, "Request authenticated");
                req.extensions_mut().insert(ctx);
            }
            Ok(None) => {}
            Err(e) => return e.into_response(),
        }
    }

    next.run(req).await
}
