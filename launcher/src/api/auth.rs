use ember_types::{Account, DisplayableError};
use serde::Serialize;

use super::*;

/// Login request payload
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl ApiClient {
    /// Authenticate with username (or email) and password.
    ///
    /// A rejected authentication may carry a structured `{title, desc}`
    /// body; when it does, it is surfaced as [`ApiError::Displayable`] so
    /// the UI can show it verbatim. Everything else stays opaque.
    pub async fn login(&self, username: String, password: String) -> ApiResult<Account> {
        use tracing::info;

        let url = format!("{}/authenticate", self.base_url);
        info!("Attempting login for user: {}", username);

        let request = LoginRequest { username, password };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network request failed: {}", e);
                ApiError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            if let Ok(displayable) = serde_json::from_str::<DisplayableError>(&text) {
                return Err(ApiError::Displayable(displayable));
            }
            tracing::error!("HTTP error {}: {}", status, text);
            return Err(ApiError::Http(status, text));
        }

        let account: Account = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse login response: {}", e);
            ApiError::Decode(e.to_string())
        })?;

        info!("Login succeeded for account {}", account.id);
        Ok(account)
    }
}
