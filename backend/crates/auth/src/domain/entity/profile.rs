//! Profile Entity
//!
//! A registered identity: the credential record plus the public profile fields.

use chrono::{DateTime, Utc};
use kernel::id::ProfileId;

use crate::domain::value_object::{
    email::Email, profile_status::ProfileStatus, user_password::UserPassword,
};

/// Profile entity
///
/// `email` is the unique login key and the token subject.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Public identifier (distinct from the numeric primary key)
    pub profile_id: ProfileId,
    pub name: String,
    pub email: Email,
    /// Argon2id hash; never leaves the auth crate in a response
    pub password_hash: UserPassword,
    pub profile_image_url: Option<String>,
    pub status: ProfileStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(
        name: String,
        email: Email,
        password_hash: UserPassword,
        profile_image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            profile_id: ProfileId::new(),
            name,
            email,
            password_hash,
            profile_image_url,
            status: ProfileStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn can_login(&self) -> bool {
        self.status.can_login()
    }

    pub fn disable(&mut self) {
        self.status = ProfileStatus::Disabled;
        self.updated_at = Utc::now();
    }
}
