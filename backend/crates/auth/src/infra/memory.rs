//! In-memory Repository
//!
//! DashMap-backed credential store sharing the in-process revocation
//! registry. Used by the test suites and for running without a database.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use kernel::id::ProfileId;

use crate::domain::entity::profile::Profile;
use crate::domain::repository::{ProfileRepository, RevocationRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};
use crate::infra::revocation::RevocationRegistry;

#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    profiles: Arc<DashMap<ProfileId, Profile>>,
    /// Unique email index
    emails: Arc<DashMap<Email, ProfileId>>,
    revocations: Arc<RevocationRegistry>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revocations(&self) -> &Arc<RevocationRegistry> {
        &self.revocations
    }
}

impl ProfileRepository for InMemoryAuthRepository {
    async fn create(&self, profile: &Profile) -> AuthResult<()> {
        match self.emails.entry(profile.email.clone()) {
            Entry::Occupied(_) => Err(AuthError::EmailTaken),
            Entry::Vacant(slot) => {
                self.profiles.insert(profile.profile_id, profile.clone());
                slot.insert(profile.profile_id);
                Ok(())
            }
        }
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Profile>> {
        let Some(profile_id) = self.emails.get(email).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.profiles.get(&profile_id).map(|p| p.clone()))
    }

    async fn find_by_profile_id(&self, profile_id: &ProfileId) -> AuthResult<Option<Profile>> {
        Ok(self.profiles.get(profile_id).map(|p| p.clone()))
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.emails.contains_key(email))
    }

    async fn update(&self, profile: &Profile) -> AuthResult<()> {
        match self.profiles.get_mut(&profile.profile_id) {
            Some(mut stored) => {
                *stored = profile.clone();
                Ok(())
            }
            None => Err(AuthError::Internal(format!(
                "profile {} does not exist",
                profile.profile_id
            ))),
        }
    }
}

impl RevocationRepository for InMemoryAuthRepository {
    async fn revoke(&self, token: &str, retain_until: DateTime<Utc>) -> AuthResult<()> {
        self.revocations.revoke(token, retain_until);
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> AuthResult<bool> {
        Ok(self.revocations.is_revoked(token))
    }

    async fn prune_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        Ok(self.revocations.prune_expired(now))
    }
}
