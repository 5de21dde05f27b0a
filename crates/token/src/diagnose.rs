//! Token diagnosis report for the console debug surface.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::inspect::{
    decode_payload, is_expired_at, is_valid_format, remaining_seconds_at, TokenPayload,
};

/// Result of running every inspection check against one token.
///
/// `issues` is ordered: it describes the first failing check (absent token,
/// invalid format, undecodable payload, expired) or, when everything passes,
/// the remaining validity.
#[derive(Debug, Clone, Serialize)]
pub struct TokenDiagnosis {
    pub has_token: bool,
    pub valid_format: bool,
    pub expired: bool,
    pub remaining_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<TokenPayload>,
    pub issues: Vec<String>,
}

impl TokenDiagnosis {
    fn absent() -> Self {
        Self {
            has_token: false,
            valid_format: false,
            expired: true,
            remaining_seconds: 0,
            payload: None,
            issues: vec!["no token found".to_string()],
        }
    }
}

/// Diagnose a token at an explicit instant. `None` means "no token held".
pub fn diagnose_at(token: Option<&str>, now: DateTime<Utc>) -> TokenDiagnosis {
    let Some(token) = token else {
        return TokenDiagnosis::absent();
    };

    let mut report = TokenDiagnosis {
        has_token: true,
        valid_format: is_valid_format(token),
        expired: true,
        remaining_seconds: 0,
        payload: None,
        issues: Vec::new(),
    };

    if !report.valid_format {
        report
            .issues
            .push("invalid JWT format (expected 3 dot-separated segments)".to_string());
        return report;
    }

    report.payload = decode_payload(token);
    if report.payload.is_none() {
        report
            .issues
            .push("failed to decode token payload".to_string());
        return report;
    }

    report.expired = is_expired_at(token, now);
    report.remaining_seconds = remaining_seconds_at(token, now);

    if report.expired {
        report.issues.push("token has expired".to_string());
    } else {
        report.issues.push(format!(
            "token is valid for {} seconds",
            report.remaining_seconds
        ));
    }

    report
}

/// Diagnose a token against the wall clock.
pub fn diagnose(token: Option<&str>) -> TokenDiagnosis {
    diagnose_at(token, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn token_with_payload(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        format!("{}.{}.sig", header, URL_SAFE_NO_PAD.encode(payload.to_string()))
    }

    #[test]
    fn absent_token_reports_no_token_found() {
        let report = diagnose_at(None, Utc::now());
        assert!(!report.has_token);
        assert!(report.expired);
        assert_eq!(report.issues, vec!["no token found".to_string()]);
    }

    #[test]
    fn two_part_string_reports_invalid_format() {
        let report = diagnose_at(Some("header.payload"), Utc::now());
        assert!(report.has_token);
        assert!(!report.valid_format);
        assert!(report.issues[0].contains("invalid JWT format"));
    }

    #[test]
    fn undecodable_payload_is_reported_after_format() {
        let report = diagnose_at(Some("aaa.!!!.ccc"), Utc::now());
        assert!(report.valid_format);
        assert!(report.payload.is_none());
        assert_eq!(report.issues, vec!["failed to decode token payload".to_string()]);
    }

    #[test]
    fn expired_token_is_flagged() {
        let now = Utc::now();
        let token = token_with_payload(serde_json::json!({"exp": now.timestamp() - 10}));
        let report = diagnose_at(Some(&token), now);
        assert!(report.valid_format);
        assert!(report.expired);
        assert_eq!(report.remaining_seconds, 0);
        assert_eq!(report.issues, vec!["token has expired".to_string()]);
    }

    #[test]
    fn valid_token_reports_remaining_seconds() {
        let now = Utc::now();
        let token = token_with_payload(serde_json::json!({"exp": now.timestamp() + 100}));
        let report = diagnose_at(Some(&token), now);
        assert!(!report.expired);
        assert_eq!(report.remaining_seconds, 100);
        assert_eq!(report.issues, vec!["token is valid for 100 seconds".to_string()]);
    }

    #[test]
    fn report_serializes_for_console_rendering() {
        let now = Utc::now();
        let token = token_with_payload(serde_json::json!({"exp": now.timestamp() + 5}));
        let json = serde_json::to_value(diagnose_at(Some(&token), now)).unwrap();
        assert_eq!(json["has_token"], true);
        assert_eq!(json["payload"]["exp"], now.timestamp() + 5);
    }
}
