//! In-process Revocation Registry
//!
//! Entries are keyed by the SHA-256 digest of the token and hold the instant
//! the token would expire. A revoke is a single map write, so any check that
//! starts after it returns observes it.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::task::JoinHandle;

use crate::domain::repository::RevocationRepository;

type TokenDigest = [u8; 32];

#[derive(Debug, Default)]
pub struct RevocationRegistry {
    entries: DashMap<TokenDigest, DateTime<Utc>>,
}

impl RevocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent; revoking again only ever extends retention
    pub fn revoke(&self, token: &str, retain_until: DateTime<Utc>) {
        self.entries
            .entry(digest(token))
            .and_modify(|until| {
                if retain_until > *until {
                    *until = retain_until;
                }
            })
            .or_insert(retain_until);
    }

    pub fn is_revoked(&self, token: &str) -> bool {
        self.entries.contains_key(&digest(token))
    }

    /// Keeps entries until `now` passes their retention instant
    pub fn prune_expired(&self, now: DateTime<Utc>) -> u64 {
        let mut removed = 0u64;
        self.entries.retain(|_, until| {
            let keep = *until >= now;
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn digest(token: &str) -> TokenDigest {
    platform::crypto::sha256(token.as_bytes())
}

/// Periodically prune expired revocation entries
///
/// Runs until the runtime shuts down. The first tick fires immediately.
pub fn spawn_revocation_sweeper<R>(repo: Arc<R>, every: Duration) -> JoinHandle<()>
where
    R: RevocationRepository + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            match repo.prune_expired(Utc::now()).await {
                Ok(0) => {}
                Ok(pruned) => {
                    tracing::info!(entries_pruned = pruned, "Pruned expired token revocations");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Revocation sweep failed");
                }
            }
        }
    })
}
