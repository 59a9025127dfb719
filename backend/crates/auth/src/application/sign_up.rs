//! Sign Up Use Case
//!
//! Registers a new profile.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::profile::Profile;
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Maximum display name length (characters)
const NAME_MAX_LENGTH: usize = 100;

pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile_image_url: Option<String>,
}

pub struct SignUpUseCase<P>
where
    P: ProfileRepository,
{
    profile_repo: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<P> SignUpUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profile_repo: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self {
            profile_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<Profile> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AuthError::Validation("Name cannot be empty".to_string()));
        }
        if name.chars().count() > NAME_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "Name must be at most {} characters",
                NAME_MAX_LENGTH
            )));
        }

        let email = Email::new(&input.email)?;

        if self.profile_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password, &self.config.password_policy)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let profile_image_url = input
            .profile_image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let profile = Profile::new(name, email, password_hash, profile_image_url);

        // The store enforces uniqueness too; a concurrent duplicate fails here.
        self.profile_repo.create(&profile).await?;

        tracing::info!(
            profile_id = %profile.profile_id,
            email = %profile.email,
            "Profile registered"
        );

        Ok(profile)
    }
}
