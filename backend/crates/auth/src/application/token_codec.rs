//! Token Codec
//!
//! Issues and decodes HS256 JWTs carrying `{sub, iat, exp}`.
//!
//! Expiry is judged against a caller-supplied clock (`*_at` variants) with
//! zero leeway; the library's own `exp` check is disabled. A token is expired
//! when `now > exp`.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::{AuthConfig, MAX_TOKEN_TTL};
use crate::error::{AuthError, AuthResult};

/// Claims embedded in every token (Unix seconds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the profile's email
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }
}

#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Fails unless `ttl` is between one second and [`MAX_TOKEN_TTL`]
    pub fn new(secret: &[u8], ttl: std::time::Duration) -> AuthResult<Self> {
        let ttl = window(ttl)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }

    pub fn from_config(config: &AuthConfig) -> AuthResult<Self> {
        Self::new(&config.token_secret, config.token_ttl)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, subject: &str) -> AuthResult<String> {
        self.issue_at(subject, Utc::now())
    }

    /// Deterministic for a fixed key and `now`
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> AuthResult<String> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AuthError::Internal(format!("token expiry overflows at {now}")))?;
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("jwt encode: {e}")))
    }

    pub fn decode(&self, token: &str) -> AuthResult<TokenClaims> {
        self.decode_at(token, Utc::now())
    }

    /// `TokenMalformed` if the token does not parse or verify,
    /// `TokenExpired` if `now` is past its expiry
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<TokenClaims> {
        let claims = self.verify_signature(token)?;
        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired);
        }
        Ok(claims)
    }

    /// True iff the token decodes, is unexpired, and names `subject`
    pub fn validate(&self, token: &str, subject: &str) -> bool {
        self.validate_at(token, subject, Utc::now())
    }

    pub fn validate_at(&self, token: &str, subject: &str, now: DateTime<Utc>) -> bool {
        self.decode_at(token, now)
            .map(|claims| claims.sub == subject)
            .unwrap_or(false)
    }

    /// Expiry of a correctly signed token, expired or not
    pub fn expiry_of(&self, token: &str) -> Option<DateTime<Utc>> {
        self.verify_signature(token)
            .ok()
            .and_then(|claims| claims.expires_at())
    }

    fn verify_signature(&self, token: &str) -> AuthResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token failed verification");
                AuthError::TokenMalformed
            })
    }
}

fn window(ttl: std::time::Duration) -> AuthResult<Duration> {
    let out_of_range = || {
        AuthError::Internal(format!(
            "token ttl must be between 1 and {} seconds, got {}",
            MAX_TOKEN_TTL.as_secs(),
            ttl.as_secs()
        ))
    };

    if ttl.as_secs() == 0 || ttl > MAX_TOKEN_TTL {
        return Err(out_of_range());
    }
    let secs = i64::try_from(ttl.as_secs()).map_err(|_| out_of_range())?;
    Duration::try_seconds(secs).ok_or_else(out_of_range)
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &"HS256")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const TTL: std::time::Duration = std::time::Duration::from_secs(5 * 3600);

    fn codec() -> TokenCodec {
        TokenCodec::new(&[7u8; 32], TTL).unwrap()
    }

    fn clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_decode_returns_subject() {
        let codec = codec();
        for subject in ["alice@example.com", "bob+tag@example.co.jp", "ユーザー@例え.jp", ""] {
            let token = codec.issue(subject).unwrap();
            assert_eq!(codec.decode(&token).unwrap().sub, subject);
        }
    }

    #[test]
    fn test_claims_carry_window() {
        let codec = codec();
        let token = codec.issue_at("alice@example.com", clock()).unwrap();
        let claims = codec.decode_at(&token, clock()).unwrap();
        assert_eq!(claims.iat, clock().timestamp());
        assert_eq!(claims.exp - claims.iat, 18_000);
        assert_eq!(codec.expiry_of(&token), Some(clock() + Duration::hours(5)));
    }

    #[test]
    fn test_deterministic_for_fixed_clock() {
        let codec = codec();
        let a = codec.issue_at("alice@example.com", clock()).unwrap();
        let b = codec.issue_at("alice@example.com", clock()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_expiry_boundary() {
        let codec = codec();
        let token = codec.issue_at("alice@example.com", clock()).unwrap();
        let exp = clock() + Duration::hours(5);

        assert!(codec.decode_at(&token, exp - Duration::seconds(1)).is_ok());
        assert!(codec.decode_at(&token, exp).is_ok());
        assert!(matches!(
            codec.decode_at(&token, exp + Duration::seconds(1)),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_malformed_tokens() {
        let codec = codec();
        for token in ["", "not-a-token", "a.b.c"] {
            assert!(matches!(codec.decode(token), Err(AuthError::TokenMalformed)));
        }
    }

    #[test]
    fn test_foreign_key_is_malformed() {
        let other = TokenCodec::new(&[9u8; 32], TTL).unwrap();
        let token = other.issue("alice@example.com").unwrap();
        assert!(matches!(codec().decode(&token), Err(AuthError::TokenMalformed)));
        assert!(codec().expiry_of(&token).is_none());
    }

    #[test]
    fn test_tampered_payload_is_malformed() {
        let codec = codec();
        let token = codec.issue("alice@example.com").unwrap();
        let forged_claims = TokenClaims {
            sub: "mallory@example.com".to_string(),
            iat: 0,
            exp: i64::MAX / 2,
        };
        let forged_payload = {
            use base64::Engine;
            base64::engine::general_purpose::URL_SAFE_NO_PAD
                .encode(serde_json::to_vec(&forged_claims).unwrap())
        };
        let mut parts: Vec<&str> = token.split('.').collect();
        parts[1] = &forged_payload;
        let forged = parts.join(".");
        assert!(matches!(codec.decode(&forged), Err(AuthError::TokenMalformed)));
    }

    #[test]
    fn test_validate() {
        let codec = codec();
        let token = codec.issue_at("alice@example.com", clock()).unwrap();

        assert!(codec.validate_at(&token, "alice@example.com", clock()));
        assert!(!codec.validate_at(&token, "bob@example.com", clock()));
        assert!(!codec.validate_at(
            &token,
            "alice@example.com",
            clock() + Duration::hours(6)
        ));
        assert!(!codec.validate("garbage", "alice@example.com"));
    }

    #[test]
    fn test_ttl_out_of_range_is_rejected() {
        use std::time::Duration as StdDuration;

        for ttl in [
            StdDuration::ZERO,
            MAX_TOKEN_TTL + StdDuration::from_secs(1),
            StdDuration::from_secs(100_000_000_000_000_000),
            StdDuration::from_secs(u64::MAX),
        ] {
            assert!(matches!(
                TokenCodec::new(&[7u8; 32], ttl),
                Err(AuthError::Internal(_))
            ));
        }
    }

    #[test]
    fn test_longest_ttl_still_issues_live_tokens() {
        let codec = TokenCodec::new(&[7u8; 32], MAX_TOKEN_TTL).unwrap();
        assert_eq!(codec.ttl(), Duration::days(365));

        let token = codec.issue("alice@example.com").unwrap();
        assert_eq!(codec.decode(&token).unwrap().sub, "alice@example.com");
    }

    #[test]
    fn test_expiry_overflow_is_an_error() {
        let codec = codec();
        assert!(matches!(
            codec.issue_at("alice@example.com", DateTime::<Utc>::MAX_UTC),
            Err(AuthError::Internal(_))
        ));
    }
}
