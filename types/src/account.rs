//! Launcher account model.

use serde::{Deserialize, Serialize};

/// How an account authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Verified against the remote account service.
    Online,
    /// Synthesized locally, no remote verification.
    Offline,
}

/// A launcher account.
///
/// Online accounts come back from the account service; offline accounts are
/// derived from the entered username and carry synthesized tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable account identifier (UUID-shaped string).
    pub id: String,
    /// The name the user signed in with (email or short username).
    pub username: String,
    /// Name shown in the launcher UI.
    pub display_name: String,
    /// Session token presented to game services.
    pub access_token: String,
    /// Token used to renew the session.
    pub refresh_token: String,
    /// How this account authenticates.
    pub kind: AccountKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_kind_serializes_lowercase() {
        let account = Account {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            username: "steve".to_string(),
            display_name: "Steve".to_string(),
            access_token: "token".to_string(),
            refresh_token: "refresh".to_string(),
            kind: AccountKind::Offline,
        };

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["kind"], "offline");

        let back: Account = serde_json::from_value(json).unwrap();
        assert_eq!(back, account);
    }
}
