//! Sign Out Use Case
//!
//! Revokes the presented token until it would have expired anyway.

use std::sync::Arc;

use chrono::Utc;

use crate::application::token_codec::TokenCodec;
use crate::domain::repository::RevocationRepository;
use crate::error::AuthResult;

pub struct SignOutUseCase<R>
where
    R: RevocationRepository,
{
    revocations: Arc<R>,
    codec: Arc<TokenCodec>,
}

impl<R> SignOutUseCase<R>
where
    R: RevocationRepository,
{
    pub fn new(revocations: Arc<R>, codec: Arc<TokenCodec>) -> Self {
        Self { revocations, codec }
    }

    /// No token is a no-op. A token whose expiry cannot be read is retained
    /// for one full validity window.
    pub async fn execute(&self, token: Option<&str>) -> AuthResult<()> {
        let Some(token) = token else {
            tracing::debug!("Sign out without a token");
            return Ok(());
        };

        let retain_until = self
            .codec
            .expiry_of(token)
            .unwrap_or_else(|| Utc::now() + self.codec.ttl());

        self.revocations.revoke(token, retain_until).await?;

        tracing::info!(retain_until = %retain_until, "Token revoked");
        Ok(())
    }
}
