//! Core auth flows: health, register, login, profile, verify, logout.

use anyhow::Result;

use authprobe_client::{
    extract_access_token, ApiClient, LoginRequest, RegisterRequest, Session, TokenErrorMatcher,
};

use crate::render;

pub async fn health(client: &ApiClient) -> bool {
    tracing::info!("testing server connectivity");
    let outcome = client.health().await;
    render::outcome("health", &outcome);

    if outcome.success {
        tracing::info!("server is reachable");
    } else {
        tracing::warn!("server connectivity check failed");
    }
    outcome.success
}

pub async fn register(
    client: &ApiClient,
    username: Option<String>,
    email: String,
    password: String,
) -> bool {
    let request = RegisterRequest {
        username,
        email: email.clone(),
        password,
    };
    let outcome = client.register(&request).await;
    render::outcome("register", &outcome);

    if outcome.success {
        tracing::info!("user registered: {email}");
    } else {
        tracing::error!("registration failed: {}", outcome.message().unwrap_or("<none>"));
    }
    outcome.success
}

pub async fn login(
    client: &ApiClient,
    session: &mut Session,
    credential: String,
    password: String,
) -> Result<bool> {
    let outcome = client
        .login(&LoginRequest {
            credential: credential.clone(),
            password,
        })
        .await;
    render::outcome("login", &outcome);

    if !outcome.success {
        tracing::error!("login failed: {}", outcome.message().unwrap_or("<none>"));
        return Ok(false);
    }

    match extract_access_token(&outcome) {
        Some(token) => {
            session.login(token)?;
            tracing::info!("logged in as {credential}; token stored");
        }
        None => {
            tracing::warn!("login succeeded but no access token was returned");
        }
    }
    render::login_status(session);
    Ok(outcome.success)
}

pub async fn profile(
    client: &ApiClient,
    session: &mut Session,
    matcher: &TokenErrorMatcher,
) -> bool {
    let Some(token) = session.token().map(String::from) else {
        tracing::error!("not logged in; run `authprobe login` first");
        return false;
    };

    let outcome = client.profile(&token).await;
    render::outcome("profile", &outcome);

    if session.purge_if_rejected(&outcome, matcher) {
        render::login_status(session);
    }
    outcome.success
}

pub async fn verify(
    client: &ApiClient,
    session: &mut Session,
    matcher: &TokenErrorMatcher,
) -> bool {
    let Some(token) = session.token().map(String::from) else {
        tracing::error!("no token to verify");
        return false;
    };

    let outcome = client.verify_token(&token).await;
    render::outcome("verify-token", &outcome);

    if session.purge_if_rejected(&outcome, matcher) {
        render::login_status(session);
    }
    outcome.success
}

pub async fn logout(client: &ApiClient, session: &mut Session) -> bool {
    let Some(token) = session.token().map(String::from) else {
        tracing::error!("not logged in");
        return false;
    };

    let outcome = client.logout(&token).await;
    render::outcome("logout", &outcome);

    // The local token goes away whatever the server said.
    session.clear();
    render::login_status(session);
    outcome.success
}
