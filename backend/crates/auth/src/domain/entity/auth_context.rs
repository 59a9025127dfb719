//! Authenticated Context
//!
//! Per-request identity established by the request gate and stored in the
//! request extensions. Handlers receive it through the `AuthContext`
//! extractor rather than any ambient state.

use chrono::{DateTime, Utc};
use kernel::id::ProfileId;

use crate::domain::value_object::email::Email;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub profile_id: ProfileId,
    pub email: Email,
    /// Expiry of the token that established this context
    pub expires_at: DateTime<Utc>,
}
