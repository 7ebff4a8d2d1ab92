//! Identity-provider client: password sign-in, sign-out, session restore.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::ServiceConfig;
use crate::error::ApiError;

/// Storage key under which the web target persists the session JSON.
pub const SESSION_STORAGE_KEY: &str = "coursehub.session";

/// The current authenticated identity. Absent entirely when signed out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    /// Bearer token the data requests are made with.
    pub access_token: String,
}

impl Session {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a persisted session. Anything unreadable is treated as signed
    /// out, never as an error.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: String,
    email: Option<String>,
}

/// Client for the service's session-based identity provider.
pub struct AuthClient {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl AuthClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Exchange email + password for a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::Validation(
                "Please enter a valid email".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(ApiError::Validation("Password is required".to_string()));
        }

        let url = format!(
            "{}/auth/v1/token?grant_type=password",
            self.config.service_url
        );
        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.service_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = sign_in_message(status, &body);
            tracing::warn!("sign-in failed: {status} {body}");
            return Err(ApiError::Service(message));
        }

        let token: TokenResponse = response.json().await?;
        Ok(Session {
            user_id: token.user.id,
            email: token.user.email.unwrap_or(email),
            access_token: token.access_token,
        })
    }

    /// Revoke the session's token. Best-effort: the caller clears its local
    /// session regardless of the outcome.
    pub async fn sign_out(&self, session: &Session) -> Result<(), ApiError> {
        let url = format!("{}/auth/v1/logout", self.config.service_url);
        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.service_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Service(format!("sign-out failed: {status}")));
        }
        Ok(())
    }
}

/// The provider reports sign-in failures under `error_description` or `msg`;
/// bad credentials come back as a plain client error.
fn sign_in_message(status: reqwest::StatusCode, body: &str) -> String {
    let described = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error_description", "msg", "message"]
                .iter()
                .find_map(|key| value.get(key)?.as_str().map(str::to_string))
        });

    match described {
        Some(message) => message,
        None if status.is_client_error() => "Invalid email or password".to_string(),
        None => format!("sign-in failed: {status}"),
    }
}
