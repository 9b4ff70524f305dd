//! Localized text lookup.
//!
//! A single embedded table for now. `text` is a pure lookup with no side
//! effects; missing keys fall back to the key itself so they stay visible
//! in the UI instead of panicking.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static TABLE: Lazy<HashMap<String, String>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../assets/lang/en_US.json"))
        .expect("embedded language table is valid JSON")
});

/// Look up the localized string for `key`.
pub fn text(key: &str) -> String {
    TABLE
        .get(key)
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(text("login.login"), "Login");
        assert_eq!(text("login.error.requiredValue"), "Required");
    }

    #[test]
    fn missing_keys_fall_back_to_the_key() {
        assert_eq!(text("no.such.key"), "no.such.key");
    }
}
