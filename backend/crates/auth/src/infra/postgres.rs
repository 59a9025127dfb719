//! PostgreSQL Repository Implementations
//!
//! Profiles live in PostgreSQL. Revocations stay in-process and do not
//! survive a restart.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::ProfileId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::profile::Profile;
use crate::domain::repository::{ProfileRepository, RevocationRepository};
use crate::domain::value_object::{
    email::Email, profile_status::ProfileStatus, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};
use crate::infra::revocation::RevocationRegistry;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
    revocations: Arc<RevocationRegistry>,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            revocations: Arc::new(RevocationRegistry::new()),
        }
    }
}

const PROFILE_COLUMNS: &str = r#"
    profile_id,
    name,
    email,
    password_hash,
    profile_image_url,
    profile_status,
    created_at,
    updated_at
"#;

// ============================================================================
// Profile Repository Implementation
// ============================================================================

impl ProfileRepository for PgAuthRepository {
    async fn create(&self, profile: &Profile) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (
                profile_id,
                name,
                email,
                password_hash,
                profile_image_url,
                profile_status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(profile.profile_id.as_uuid())
        .bind(&profile.name)
        .bind(profile.email.as_str())
        .bind(profile.password_hash.as_phc_string())
        .bind(profile.profile_image_url.as_deref())
        .bind(profile.status.id())
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AuthError::EmailTaken,
            _ => AuthError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_profile()).transpose()
    }

    async fn find_by_profile_id(&self, profile_id: &ProfileId) -> AuthResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE profile_id = $1"
        ))
        .bind(profile_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_profile()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM profiles WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, profile: &Profile) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE profiles SET
                name = $2,
                password_hash = $3,
                profile_image_url = $4,
                profile_status = $5,
                updated_at = $6
            WHERE profile_id = $1
            "#,
        )
        .bind(profile.profile_id.as_uuid())
        .bind(&profile.name)
        .bind(profile.password_hash.as_phc_string())
        .bind(profile.profile_image_url.as_deref())
        .bind(profile.status.id())
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Revocation Repository Implementation
// ============================================================================

impl RevocationRepository for PgAuthRepository {
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

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    profile_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    profile_image_url: Option<String>,
    profile_status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> AuthResult<Profile> {
        let status = ProfileStatus::from_id(self.profile_status).ok_or_else(|| {
            AuthError::Internal(format!("Invalid profile_status: {}", self.profile_status))
        })?;

        Ok(Profile {
            profile_id: ProfileId::from_uuid(self.profile_id),
            name: self.name,
            email: Email::from_db(self.email),
            password_hash: UserPassword::from_phc_string(self.password_hash)?,
            profile_image_url: self.profile_image_url,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
