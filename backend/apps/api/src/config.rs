//! Environment Configuration
//!
//! Read once at startup, after `.env` has been loaded.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::{MAX_TOKEN_TTL, MIN_TOKEN_SECRET_LEN, PasswordPolicy};

pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let bind_addr = parse_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 8080)))?;
        let database_max_connections = parse_or("DATABASE_MAX_CONNECTIONS", 5u32)?;

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth: auth_config_from_env()?,
        })
    }
}

fn auth_config_from_env() -> anyhow::Result<AuthConfig> {
    let defaults = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        AuthConfig::default()
    };

    let token_secret = match env::var("JWT_SECRET") {
        Ok(secret_b64) => {
            let secret = decode_base64("JWT_SECRET", &secret_b64)?;
            if secret.len() < MIN_TOKEN_SECRET_LEN {
                bail!("JWT_SECRET must decode to at least {MIN_TOKEN_SECRET_LEN} bytes");
            }
            secret
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("JWT_SECRET not set, using a random signing key");
            defaults.token_secret.clone()
        }
        Err(_) => bail!("JWT_SECRET must be set in production"),
    };

    let password_pepper = match env::var("PASSWORD_PEPPER") {
        Ok(pepper_b64) => Some(decode_base64("PASSWORD_PEPPER", &pepper_b64)?),
        Err(_) => None,
    };

    let password_policy = match env::var("PASSWORD_POLICY") {
        Ok(raw) => PasswordPolicy::from_str(&raw).map_err(anyhow::Error::msg)?,
        Err(_) => defaults.password_policy,
    };

    let token_ttl = token_ttl(parse_or("JWT_TTL_SECS", defaults.token_ttl.as_secs())?)?;
    let revocation_sweep_interval = Duration::from_secs(parse_or(
        "REVOCATION_SWEEP_SECS",
        defaults.revocation_sweep_interval.as_secs(),
    )?);
    if revocation_sweep_interval.is_zero() {
        bail!("REVOCATION_SWEEP_SECS must be positive");
    }

    Ok(AuthConfig {
        token_secret,
        token_ttl,
        password_pepper,
        password_policy,
        revocation_sweep_interval,
    })
}

/// `JWT_TTL_SECS` must lie within 1 second and [`MAX_TOKEN_TTL`]
fn token_ttl(secs: u64) -> anyhow::Result<Duration> {
    let ttl = Duration::from_secs(secs);
    if ttl.is_zero() || ttl > MAX_TOKEN_TTL {
        bail!(
            "JWT_TTL_SECS must be between 1 and {}, got {secs}",
            MAX_TOKEN_TTL.as_secs()
        );
    }
    Ok(ttl)
}

fn decode_base64(var: &str, value: &str) -> anyhow::Result<Vec<u8>> {
    platform::crypto::from_base64(value).with_context(|| format!("{var} must be valid base64"))
}

fn parse_or<T>(var: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{var} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ttl_bounds() {
        assert_eq!(token_ttl(18_000).unwrap(), Duration::from_secs(18_000));
        assert_eq!(token_ttl(MAX_TOKEN_TTL.as_secs()).unwrap(), MAX_TOKEN_TTL);

        assert!(token_ttl(0).is_err());
        assert!(token_ttl(MAX_TOKEN_TTL.as_secs() + 1).is_err());
        assert!(token_ttl(u64::MAX).is_err());
    }

    #[test]
    fn test_decode_base64_names_the_variable() {
        assert_eq!(decode_base64("JWT_SECRET", " aGVsbG8= ").unwrap(), b"hello");

        let err = decode_base64("JWT_SECRET", "not base64!").unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }
}
