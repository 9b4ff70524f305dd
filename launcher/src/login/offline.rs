//! Offline pseudo-identity synthesis.

use ember_types::{Account, AccountKind};

/// Derive the stable offline identifier for a username.
///
/// Hashes the username's UTF-16 code units with the base-31 string hash
/// (`hash * 31 + code`, executed through the shift/subtract identity) and
/// embeds the unsigned 32-bit value, as zero-padded lowercase hex, in a
/// fixed UUID-shaped template. The recurrence and padding must not change:
/// the same username has to keep mapping to the same identifier so that
/// offline accounts created by earlier launcher versions stay reachable.
pub fn derive_offline_id(username: &str) -> String {
    let mut hash: i32 = 0;
    for code in username.encode_utf16() {
        hash = i32::from(code).wrapping_add((hash << 5).wrapping_sub(hash));
    }
    let hex = format!("{:08x}", hash as u32);
    format!("00000000-0000-0000-0000-{hex:0>12}")
}

/// Build the locally synthesized account for offline play.
///
/// The tokens are placeholders tagged with the derived identifier; nothing
/// ever verifies them remotely.
pub fn offline_account(username: &str) -> Account {
    let id = derive_offline_id(username);
    Account {
        access_token: format!("access-token-offline-{id}"),
        refresh_token: format!("refresh-token-offline-{id}"),
        username: username.to_string(),
        display_name: username.to_string(),
        id,
        kind: AccountKind::Offline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steve_maps_to_known_id() {
        assert_eq!(
            derive_offline_id("Steve"),
            "00000000-0000-0000-0000-000004c7e3b3"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(derive_offline_id("Alex"), derive_offline_id("Alex"));
    }

    #[test]
    fn one_character_change_changes_the_id() {
        assert_ne!(derive_offline_id("Steve"), derive_offline_id("Steva"));
    }

    #[test]
    fn id_has_fixed_shape() {
        let id = derive_offline_id("someone_longer_x");
        assert_eq!(id.len(), 36);
        assert!(id.starts_with("00000000-0000-0000-0000-"));
    }

    #[test]
    fn long_usernames_wrap_instead_of_panicking() {
        let id = derive_offline_id(&"x".repeat(64));
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn offline_account_is_tagged_with_the_id() {
        let account = offline_account("Steve");
        assert_eq!(account.id, derive_offline_id("Steve"));
        assert_eq!(
            account.access_token,
            format!("access-token-offline-{}", account.id)
        );
        assert_eq!(
            account.refresh_token,
            format!("refresh-token-offline-{}", account.id)
        );
        assert_eq!(account.display_name, "Steve");
        assert_eq!(account.kind, AccountKind::Offline);
    }
}
