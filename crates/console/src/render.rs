//! Console rendering of outcomes and session state.

use authprobe_client::{ApiOutcome, Session};

/// Pretty-print a call outcome, the way the test page filled its result area.
pub fn outcome(label: &str, outcome: &ApiOutcome) {
    let verdict = if outcome.success { "ok" } else { "failed" };
    println!("== {label}: {verdict}");

    if let Some(data) = &outcome.data {
        match serde_json::to_string_pretty(data) {
            Ok(body) => println!("{body}"),
            Err(_) => println!("{data}"),
        }
    }
    if let Some(error) = &outcome.error {
        println!("network error: {error}");
    }
}

/// Re-print the login status line after anything that may change it.
pub fn login_status(session: &Session) {
    if session.is_logged_in() {
        println!("-- logged in");
    } else {
        println!("-- logged out");
    }
}
