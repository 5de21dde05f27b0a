//! Best-effort detection of token-related server rejections.

use crate::envelope::ApiOutcome;

/// Default keyword list, inherited from the original harness. These are
/// language-dependent substrings; treat matches as a client hint only.
const DEFAULT_KEYWORDS: &[&str] = &[
    "token",
    "jwt",
    "authorization",
    "expired",
    "invalid",
    "unauthorized",
    "header string",
];

/// Matches 401/422 responses whose message text looks token-related, to tell
/// "your token is bad" apart from other 401/422 causes (wrong password,
/// validation of the request body, ...).
#[derive(Debug, Clone)]
pub struct TokenErrorMatcher {
    keywords: Vec<String>,
}

impl Default for TokenErrorMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().map(|k| k.to_string()))
    }
}

impl TokenErrorMatcher {
    /// Build a matcher with a custom keyword list (stored lowercased).
    pub fn new(keywords: impl IntoIterator<Item = String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Whether a status/message pair looks like a token error.
    pub fn matches(&self, status: u16, message: &str) -> bool {
        if status != 401 && status != 422 {
            return false;
        }
        let message = message.to_lowercase();
        self.keywords.iter().any(|k| message.contains(k))
    }

    /// Whether a call outcome looks like a token error.
    pub fn is_token_error(&self, outcome: &ApiOutcome) -> bool {
        match outcome.status {
            Some(status) => self.matches(status, outcome.message().unwrap_or("")),
            None => false,
        }
    }
}
