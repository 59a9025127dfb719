//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::ProfileId;

use crate::domain::entity::profile::Profile;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Fails with `EmailTaken` if the email is already registered
    async fn create(&self, profile: &Profile) -> AuthResult<()>;

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Profile>>;

    async fn find_by_profile_id(&self, profile_id: &ProfileId) -> AuthResult<Option<Profile>>;

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    async fn update(&self, profile: &Profile) -> AuthResult<()>;
}

/// Revoked-token registry
///
/// A revoke must be visible to every `is_revoked` call that starts after it
/// returns.
#[trait_variant::make(RevocationRepository: Send)]
pub trait LocalRevocationRepository {
    /// Idempotent; `retain_until` is the instant after which the token would
    /// be rejected as expired anyway
    async fn revoke(&self, token: &str, retain_until: DateTime<Utc>) -> AuthResult<()>;

    async fn is_revoked(&self, token: &str) -> AuthResult<bool>;

    /// Drop entries whose token has expired by `now`; returns how many were dropped
    async fn prune_expired(&self, now: DateTime<Utc>) -> AuthResult<u64>;
}
