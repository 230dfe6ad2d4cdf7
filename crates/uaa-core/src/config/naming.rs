//! Key derivation for persisted targets and contexts.
//!
//! Every lookup and insert goes through these two functions so the map keys
//! written to disk always match the keys computed at runtime.

const TARGET_PREFIX: &str = "url:";

/// Name of the target for `base_url`. Targets sharing a base URL share a name.
pub fn target_name(base_url: &str) -> String {
    format!("{TARGET_PREFIX}{base_url}")
}

/// Name of a context.
///
/// Components are percent-encoded so neither `' '` nor `':'` can appear
/// inside one, which keeps distinct triples from colliding. An empty
/// username is valid (client credentials grants have none).
pub fn context_name(client_id: &str, grant_type: &str, username: &str) -> String {
    format!(
        "client:{} grant_type:{} user:{}",
        urlencoding::encode(client_id),
        urlencoding::encode(grant_type),
        urlencoding::encode(username)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_name_prefixes_base_url() {
        assert_eq!(
            target_name("https://uaa.example.com"),
            "url:https://uaa.example.com"
        );
        assert_eq!(target_name(""), "url:");
    }

    #[test]
    fn context_name_allows_empty_username() {
        assert_eq!(
            context_name("admin", "client_credentials", ""),
            "client:admin grant_type:client_credentials user:"
        );
    }

    #[test]
    fn context_name_escapes_separators() {
        let spaced = context_name("a user:b", "password", "");
        let split = context_name("a", "password", "b");
        assert_ne!(spaced, split);
        assert_eq!(spaced, "client:a%20user%3Ab grant_type:password user:");
    }
}
