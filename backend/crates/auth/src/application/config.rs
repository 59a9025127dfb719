//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

pub use platform::password::PasswordPolicy;

/// Minimum signing key length for HS256 (bytes)
pub const MIN_TOKEN_SECRET_LEN: usize = 32;

/// Longest token validity window accepted (one year)
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(365 * 24 * 3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing key
    pub token_secret: Vec<u8>,
    /// Fixed validity window of issued tokens (5 hours)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Rules for passwords chosen at registration
    pub password_policy: PasswordPolicy,
    /// How often expired revocation entries are pruned
    pub revocation_sweep_interval: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; MIN_TOKEN_SECRET_LEN],
            token_ttl: Duration::from_secs(5 * 3600), // 5 hours
            password_pepper: None,
            password_policy: PasswordPolicy::relaxed(),
            revocation_sweep_interval: Duration::from_secs(300), // 5 minutes
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing key
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(MIN_TOKEN_SECRET_LEN),
            ..Default::default()
        }
    }

    /// Random key and a short sweep interval
    pub fn development() -> Self {
        Self {
            revocation_sweep_interval: Duration::from_secs(60),
            ..Self::with_random_secret()
        }
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .field("password_policy", &self.password_policy)
            .field("revocation_sweep_interval", &self.revocation_sweep_interval)
            .finish()
    }
}
