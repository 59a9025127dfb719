//! Authenticate Use Case
//!
//! The checks behind the request gate: revocation first, then decoding, then
//! resolving the subject to a profile.

use std::sync::Arc;

use crate::application::token_codec::{TokenClaims, TokenCodec};
use crate::domain::entity::auth_context::AuthContext;
use crate::domain::repository::{ProfileRepository, RevocationRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

pub struct AuthenticateUseCase<R>
where
    R: ProfileRepository + RevocationRepository,
{
    repo: Arc<R>,
    codec: Arc<TokenCodec>,
}

impl<R> AuthenticateUseCase<R>
where
    R: ProfileRepository + RevocationRepository,
{
    pub fn new(repo: Arc<R>, codec: Arc<TokenCodec>) -> Self {
        Self { repo, codec }
    }

    /// `TokenBlacklisted` for a revoked token (checked before decoding),
    /// otherwise whatever the codec reports
    pub async fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        if self.repo.is_revoked(token).await? {
            return Err(AuthError::TokenBlacklisted);
        }
        self.codec.decode(token)
    }

    /// `None` when the subject is unknown or the profile is disabled
    pub async fn resolve(&self, claims: &TokenClaims) -> AuthResult<Option<AuthContext>> {
        let Ok(email) = Email::new(&claims.sub) else {
            tracing::warn!(subject = %claims.sub, "Token subject is not an email");
            return Ok(None);
        };

        let Some(profile) = self.repo.find_by_email(&email).await? else {
            tracing::warn!(email = %email, "Token subject has no profile");
            return Ok(None);
        };

        if !profile.can_login() {
            tracing::warn!(profile_id = %profile.profile_id, "Token for disabled profile");
            return Ok(None);
        }

        let expires_at = claims
            .expires_at()
            .ok_or_else(|| AuthError::Internal("token expiry out of range".to_string()))?;

        Ok(Some(AuthContext {
            profile_id: profile.profile_id,
            email: profile.email,
            expires_at,
        }))
    }
}
