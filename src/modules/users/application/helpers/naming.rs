// Slug and username derivation, applied explicitly at the write boundary
// (signup, profile update) rather than as persistence hooks.
use rand::RngCore;
use regex::Regex;
use std::sync::OnceLock;

fn non_slug_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static regex"))
}

/// Lowercased, hyphen-separated form of a display name: "Ada  Lovelace" -> "ada-lovelace".
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let slug = non_slug_chars().replace_all(&lowered, "-");
    slug.trim_matches('-').to_string()
}

/// Derived username for accounts created without one: lowercased name with
/// whitespace collapsed to underscores plus a random hex suffix.
pub fn derive_username(name: &str) -> String {
    let mut suffix = [0u8; 6];
    rand::thread_rng().fill_bytes(&mut suffix);
    let hex: String = suffix.iter().map(|b| format!("{:02x}", b)).collect();

    let base: String = name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}{}", base, hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Ada Lovelace"), "ada-lovelace");
        assert_eq!(slugify("  Jane   Doe "), "jane-doe");
        assert_eq!(slugify("O'Brien, Jr."), "o-brien-jr");
    }

    #[test]
    fn derive_username_keeps_name_prefix() {
        let username = derive_username("Jane Doe");
        assert!(username.starts_with("jane_doe"));
        // 12 hex chars appended
        assert_eq!(username.len(), "jane_doe".len() + 12);
    }

    #[test]
    fn derive_username_is_randomized() {
        assert_ne!(derive_username("Jane Doe"), derive_username("Jane Doe"));
    }
}
