//! Bearer credential extraction
//!
//! `Authorization: Bearer <token>`; the scheme prefix is matched case-sensitively.

use axum::http::{HeaderMap, header::AUTHORIZATION};

pub const BEARER_PREFIX: &str = "Bearer ";

/// How the `Authorization` header of a request presents itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// No `Authorization` header at all
    Absent,
    /// A header with some other scheme, or not valid visible ASCII
    OtherScheme,
    /// A bearer token (may be empty if the client sent `"Bearer "`)
    Bearer(String),
}

impl Credential {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(value) = headers.get(AUTHORIZATION) else {
            return Credential::Absent;
        };
        match value.to_str() {
            Ok(raw) => match raw.strip_prefix(BEARER_PREFIX) {
                Some(token) => Credential::Bearer(token.trim().to_string()),
                None => Credential::OtherScheme,
            },
            Err(_) => Credential::OtherScheme,
        }
    }

    pub fn into_bearer(self) -> Option<String> {
        match self {
            Credential::Bearer(token) => Some(token),
            _ => None,
        }
    }
}

/// Bearer token of the request, if any
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    Credential::from_headers(headers).into_bearer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_absent_header() {
        assert_eq!(Credential::from_headers(&HeaderMap::new()), Credential::Absent);
    }

    #[test]
    fn test_bearer_header() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let headers = headers_with("bearer abc.def.ghi");
        assert_eq!(Credential::from_headers(&headers), Credential::OtherScheme);
    }

    #[test]
    fn test_other_scheme() {
        let headers = headers_with("Basic YWxpY2U6cHc=");
        assert_eq!(Credential::from_headers(&headers), Credential::OtherScheme);
        assert!(extract_bearer_token(&headers).is_none());
    }
}
