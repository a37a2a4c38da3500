//! Key names accepted in config files
//!
//! Plain strings so bindings can be validated without a window. The viewer
//! maps the canonical names to its own key codes.

/// Canonical spelling of every bindable key
pub const KEY_NAMES: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
    "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    "Esc", "Enter", "Space", "Tab", "Backspace", "Del",
    "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
];

/// Canonical name for a user-written key name (case-insensitive, trimmed,
/// "Escape" and "Delete" accepted as aliases)
pub fn canonical_key_name(name: &str) -> Option<&'static str> {
    let upper = name.trim().to_ascii_uppercase();
    let upper = match upper.as_str() {
        "ESCAPE" => "ESC",
        "DELETE" => "DEL",
        other => other,
    };
    KEY_NAMES.iter().copied().find(|k| k.eq_ignore_ascii_case(upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_case_insensitive() {
        assert_eq!(canonical_key_name("d"), Some("D"));
        assert_eq!(canonical_key_name(" f5 "), Some("F5"));
        assert_eq!(canonical_key_name("escape"), Some("Esc"));
        assert_eq!(canonical_key_name("SPACE"), Some("Space"));
        assert_eq!(canonical_key_name("hyper"), None);
        assert_eq!(canonical_key_name(""), None);
    }

    #[test]
    fn test_canonical_names_are_fixed_points() {
        for name in KEY_NAMES {
            assert_eq!(canonical_key_name(name), Some(*name));
        }
    }
}
