//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;

use platform::bearer::extract_bearer_token;

use crate::application::config::AuthConfig;
use crate::application::token_codec::TokenCodec;
use crate::application::{SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase};
use crate::domain::entity::auth_context::AuthContext;
use crate::domain::repository::{ProfileRepository, RevocationRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AuthResponse, LoginRequest, ProfileResponse, RegisterRequest};

/// Shared state for auth handlers and the request gate
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: ProfileRepository + RevocationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub codec: Arc<TokenCodec>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: ProfileRepository + RevocationRepository + Clone + Send + Sync + 'static,
{
    /// Fails if the configured token TTL is out of range
    pub fn new(repo: R, config: AuthConfig) -> AuthResult<Self> {
        Ok(Self {
            repo: Arc::new(repo),
            codec: Arc::new(TokenCodec::from_config(&config)?),
            config: Arc::new(config),
        })
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<ProfileResponse>)>
where
    R: ProfileRepository + RevocationRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        name: req.name,
        email: req.email,
        password: req.password,
        profile_image_url: req.profile_image_url,
    };

    let profile = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(profile.into())))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: ProfileRepository + RevocationRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.codec.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(AuthResponse {
        token: output.token,
        email: output.email,
    }))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /signout
///
/// 204 whether or not a token was presented.
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<StatusCode>
where
    R: ProfileRepository + RevocationRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer_token(&headers);

    let use_case = SignOutUseCase::new(state.repo.clone(), state.codec.clone());
    use_case.execute(token.as_deref()).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Current Profile
// ============================================================================

/// GET /profile
pub async fn current_profile<R>(
    State(state): State<AuthAppState<R>>,
    ctx: AuthContext,
) -> AuthResult<Json<ProfileResponse>>
where
    R: ProfileRepository + RevocationRepository + Clone + Send + Sync + 'static,
{
    let profile = state
        .repo
        .find_by_profile_id(&ctx.profile_id)
        .await?
        .ok_or(AuthError::Unauthenticated)?;

    Ok(Json(profile.into()))
}
