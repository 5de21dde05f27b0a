//! Password flows: forgot, reset, change.

use authprobe_client::{
    extract_reset_token, ApiClient, ChangePasswordRequest, ResetPasswordRequest, Session,
    TokenErrorMatcher,
};

use crate::render;

pub async fn forgot(client: &ApiClient, email: String) -> bool {
    let outcome = client.forgot_password(&email).await;
    render::outcome("forgot-password", &outcome);

    if outcome.success {
        tracing::info!("reset token requested for {email}");
        // Dev servers hand the reset token straight back.
        if let Some(reset_token) = extract_reset_token(&outcome) {
            println!("reset token: {reset_token}");
        }
    } else {
        tracing::error!("reset token request failed: {}", outcome.message().unwrap_or("<none>"));
    }
    outcome.success
}

pub async fn reset(client: &ApiClient, reset_token: String, new_password: String) -> bool {
    let outcome = client
        .reset_password(&ResetPasswordRequest {
            reset_token,
            new_password,
        })
        .await;
    render::outcome("reset-password", &outcome);

    if outcome.success {
        tracing::info!("password reset; log in again with the new password");
    }
    outcome.success
}

pub async fn change(
    client: &ApiClient,
    session: &mut Session,
    matcher: &TokenErrorMatcher,
    current_password: String,
    new_password: String,
) -> bool {
    let Some(token) = session.token().map(String::from) else {
        tracing::error!("not logged in; run `authprobe login` first");
        return false;
    };

    let outcome = client
        .change_password(
            &token,
            &ChangePasswordRequest {
                current_password,
                new_password,
            },
        )
        .await;
    render::outcome("change-password", &outcome);

    if outcome.success {
        tracing::info!("password changed; consider logging in again");
    }
    if session.purge_if_rejected(&outcome, matcher) {
        render::login_status(session);
    }
    outcome.success
}
