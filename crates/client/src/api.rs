//! Typed wrappers over the remote authentication endpoints.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::envelope::ApiOutcome;

/// Default base URL of the API under test.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// Optional; the server derives one from the email when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    pub password: String,
}

/// Login accepts either a username or an email as the credential.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub credential: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub reset_token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// HTTP client for the authentication API.
///
/// Deliberately bare: no timeout, no retry, no cancellation. A failed call
/// reports failure once, through the outcome envelope.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One request, one envelope. A bearer header is attached iff a token is
    /// given; bodies are JSON.
    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> ApiOutcome {
        let url = format!("{}{}", self.base_url, path);
        tracing::info!(%method, path, "sending request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("network error: {err}");
                return ApiOutcome::network_failure(err.to_string());
            }
        };

        let status = response.status();
        match response.json::<Value>().await {
            Ok(data) if status.is_success() => {
                tracing::info!(status = status.as_u16(), "request succeeded");
                ApiOutcome::ok(status.as_u16(), data)
            }
            Ok(data) => {
                let rejected = ApiOutcome::rejected(status.as_u16(), data);
                tracing::warn!(
                    status = status.as_u16(),
                    "request rejected: {}",
                    rejected.message().unwrap_or("<none>")
                );
                rejected
            }
            Err(err) => {
                tracing::error!("response body was not JSON: {err}");
                ApiOutcome::network_failure(err.to_string())
            }
        }
    }

    /// `GET /health` — connectivity probe.
    pub async fn health(&self) -> ApiOutcome {
        self.call(Method::GET, "/health", None, None).await
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> ApiOutcome {
        let body = serde_json::to_value(request).unwrap_or(Value::Null);
        self.call(Method::POST, "/auth/register", Some(body), None)
            .await
    }

    /// `POST /auth/login` — on success the token sits at
    /// `data.access_token` inside the response body.
    pub async fn login(&self, request: &LoginRequest) -> ApiOutcome {
        let body = serde_json::to_value(request).unwrap_or(Value::Null);
        self.call(Method::POST, "/auth/login", Some(body), None).await
    }

    /// `GET /auth/profile` — authenticated.
    pub async fn profile(&self, token: &str) -> ApiOutcome {
        self.call(Method::GET, "/auth/profile", None, Some(token))
            .await
    }

    /// `POST /auth/verify-token` — authenticated, empty body.
    pub async fn verify_token(&self, token: &str) -> ApiOutcome {
        self.call(Method::POST, "/auth/verify-token", None, Some(token))
            .await
    }

    /// `POST /auth/logout` — authenticated.
    pub async fn logout(&self, token: &str) -> ApiOutcome {
        self.call(Method::POST, "/auth/logout", None, Some(token))
            .await
    }

    /// `POST /auth/forgot-password` — dev servers return the reset token in
    /// the body at `data.reset_token`.
    pub async fn forgot_password(&self, email: &str) -> ApiOutcome {
        let body = serde_json::json!({ "email": email });
        self.call(Method::POST, "/auth/forgot-password", Some(body), None)
            .await
    }

    /// `POST /auth/reset-password`
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiOutcome {
        let body = serde_json::to_value(request).unwrap_or(Value::Null);
        self.call(Method::POST, "/auth/reset-password", Some(body), None)
            .await
    }

    /// `POST /auth/change-password` — authenticated.
    pub async fn change_password(&self, token: &str, request: &ChangePasswordRequest) -> ApiOutcome {
        let body = serde_json::to_value(request).unwrap_or(Value::Null);
        self.call(Method::POST, "/auth/change-password", Some(body), Some(token))
            .await
    }
}

/// Access token from a successful login outcome (`data.data.access_token`).
pub fn extract_access_token(outcome: &ApiOutcome) -> Option<&str> {
    outcome
        .data_pointer("/data/access_token")
        .and_then(Value::as_str)
}

/// Reset token from a forgot-password outcome (`data.data.reset_token`).
pub fn extract_reset_token(outcome: &ApiOutcome) -> Option<&str> {
    outcome
        .data_pointer("/data/reset_token")
        .and_then(Value::as_str)
}
