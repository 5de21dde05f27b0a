//! Pure token inspection operations.
//!
//! Every function here is total: malformed input never raises, it degrades to
//! `false` / `None` / zero. Decoding reads the payload segment only; the
//! signature is never checked.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decoded JWT payload (the middle segment).
///
/// Only `exp` is interpreted; everything else the server put in the payload is
/// carried as-is so the console can render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Expiration timestamp, seconds since epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Remaining claims, passed through untouched.
    #[serde(flatten)]
    pub claims: serde_json::Map<String, serde_json::Value>,
}

/// Check whether a string has the JWT shape: exactly three dot-separated,
/// non-empty segments. Nothing else is validated.
pub fn is_valid_format(token: &str) -> bool {
    let parts: Vec<&str> = token.split('.').collect();
    parts.len() == 3 && parts.iter().all(|part| !part.is_empty())
}

/// Decode the payload segment of a token without verifying the signature.
///
/// Returns `None` if the format check fails, the segment is not valid
/// base64url, or the decoded bytes are not a JSON object.
pub fn decode_payload(token: &str) -> Option<TokenPayload> {
    if !is_valid_format(token) {
        return None;
    }

    let payload = token.split('.').nth(1)?;

    // base64url payloads come unpadded; pad up to a multiple of 4.
    let mut padded = payload.to_string();
    padded.push_str(&"=".repeat((4 - payload.len() % 4) % 4));

    let bytes = URL_SAFE.decode(padded).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Expiration instant of a token, if one can be read at all.
///
/// This is the single place the fail-closed policy lives: `None` means "no
/// usable expiry" — undecodable payload or missing `exp` — and every caller
/// treats that as already expired. An unreadable token is never assumed valid.
fn expiry(token: &str) -> Option<i64> {
    decode_payload(token)?.exp
}

/// Whether the token is expired at `now`, fail-closed.
///
/// A token whose payload cannot be decoded, or which carries no `exp`, is
/// reported as expired. Otherwise expired iff `exp <= now`.
pub fn is_expired_at(token: &str, now: DateTime<Utc>) -> bool {
    match expiry(token) {
        Some(exp) => exp <= now.timestamp(),
        None => true,
    }
}

/// Whether the token is expired against the wall clock.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, Utc::now())
}

/// Seconds of validity left at `now`; 0 for expired or unreadable tokens.
pub fn remaining_seconds_at(token: &str, now: DateTime<Utc>) -> u64 {
    match expiry(token) {
        Some(exp) => exp.saturating_sub(now.timestamp()).max(0) as u64,
        None => 0,
    }
}

/// Seconds of validity left against the wall clock.
pub fn remaining_seconds(token: &str) -> u64 {
    remaining_seconds_at(token, Utc::now())
}
