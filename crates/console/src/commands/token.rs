//! Debug surface for the stored token (diagnose / check / clear).
//!
//! Reads the raw slot on purpose: diagnosing an expired stored token must
//! show it expired, not silently purge it first.

use authprobe_store::TokenStore;
use authprobe_token::{diagnose as diagnose_token, TokenDiagnosis};

fn print_report(report: &TokenDiagnosis) {
    match serde_json::to_string_pretty(report) {
        Ok(body) => println!("{body}"),
        Err(err) => tracing::error!("failed to render diagnosis: {err}"),
    }
    for issue in &report.issues {
        tracing::info!("{issue}");
    }
}

fn stored_token(store: &TokenStore) -> Option<String> {
    match store.load_raw() {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!("could not read the token store: {err}");
            None
        }
    }
}

/// Diagnose an explicit token, or the stored one when none is given.
pub fn diagnose(store: &TokenStore, token: Option<String>) -> bool {
    let token = token.or_else(|| stored_token(store));
    let report = diagnose_token(token.as_deref());
    print_report(&report);
    true
}

/// Diagnose the stored token; usable means present, well-formed, not expired.
pub fn check(store: &TokenStore) -> bool {
    let token = stored_token(store);
    let report = diagnose_token(token.as_deref());
    print_report(&report);
    report.has_token && report.valid_format && !report.expired
}

/// Clear the stored token.
pub fn clear(store: &TokenStore) -> bool {
    match store.clear() {
        Ok(()) => {
            tracing::info!("stored token cleared");
            true
        }
        Err(err) => {
            tracing::error!("failed to clear stored token: {err}");
            false
        }
    }
}
