//! Login session: the stored token plus its in-memory cache.

use chrono::Utc;

use authprobe_store::{StoreError, TokenStore};

use crate::envelope::ApiOutcome;
use crate::heuristics::TokenErrorMatcher;

/// Explicit session value owned by the calling layer.
///
/// There is deliberately no module-level "current token": whoever drives the
/// client constructs one `Session` and passes it around.
#[derive(Debug)]
pub struct Session {
    store: TokenStore,
    token: Option<String>,
}

impl Session {
    /// Load the session from the store, applying validation-on-load: a
    /// malformed or expired stored token is purged and the session starts
    /// logged out.
    pub fn load(store: TokenStore) -> Self {
        let token = match store.load_valid(Utc::now()) {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!("failed to load stored token: {err}");
                None
            }
        };
        Self { store, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Persist a freshly issued token and cache it.
    pub fn login(&mut self, token: &str) -> Result<(), StoreError> {
        self.store.store(token)?;
        self.token = Some(token.to_string());
        Ok(())
    }

    /// Drop the token from both the store and the cache.
    pub fn clear(&mut self) {
        if let Err(err) = self.store.clear() {
            tracing::warn!("failed to clear stored token: {err}");
        }
        self.token = None;
    }

    /// Purge the session if an authenticated call was rejected for token
    /// reasons: any 401, or a 401/422 whose message matches the heuristic.
    /// Returns whether a purge happened so the caller can refresh its status
    /// display.
    pub fn purge_if_rejected(&mut self, outcome: &ApiOutcome, matcher: &TokenErrorMatcher) -> bool {
        if !self.is_logged_in() {
            return false;
        }

        let purge = outcome.status == Some(401) || matcher.is_token_error(outcome);
        if purge {
            tracing::warn!(
                "server rejected the token ({}); clearing local session",
                outcome.message().unwrap_or("<none>")
            );
            self.clear();
        }
        purge
    }
}
