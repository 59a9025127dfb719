//! Sign In Use Case
//!
//! Verifies credentials and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token_codec::TokenCodec;
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

pub struct SignInInput {
    pub email: String,
    pub password: String,
}

pub struct SignInOutput {
    pub token: String,
    pub email: String,
}

pub struct SignInUseCase<P>
where
    P: ProfileRepository,
{
    profile_repo: Arc<P>,
    codec: Arc<TokenCodec>,
    config: Arc<AuthConfig>,
}

impl<P> SignInUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profile_repo: Arc<P>, codec: Arc<TokenCodec>, config: Arc<AuthConfig>) -> Self {
        Self {
            profile_repo,
            codec,
            config,
        }
    }

    /// Unknown email and wrong password both fail with `CredentialsInvalid`.
    /// `AccountDisabled` is only reported once the password has verified.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::CredentialsInvalid)?;

        let profile = self
            .profile_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::CredentialsInvalid)?;

        let raw_password = RawPassword::for_verification(input.password);
        if !profile
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::CredentialsInvalid);
        }

        if !profile.can_login() {
            return Err(AuthError::AccountDisabled);
        }

        let token = self.codec.issue(profile.email.as_str())?;

        tracing::info!(
            profile_id = %profile.profile_id,
            email = %profile.email,
            "Profile signed in"
        );

        Ok(SignInOutput {
            token,
            email: profile.email.into_inner(),
        })
    }
}
