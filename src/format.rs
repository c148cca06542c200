use crate::constants::{REDACT_ELLIPSIS, REDACT_PREFIX_LEN, REDACT_SUFFIX_LEN};

/// Masks an API key for display.
///
/// Keys of 12 characters or more keep the first 8 and last 4 characters around
/// `...`. Shorter keys keep only their first quarter and no suffix. Works on
/// chars, never on byte offsets.
pub fn redact_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();

    if len >= REDACT_PREFIX_LEN + REDACT_SUFFIX_LEN {
        let prefix: String = chars[..REDACT_PREFIX_LEN].iter().collect();
        let suffix: String = chars[len - REDACT_SUFFIX_LEN..].iter().collect();
        format!("{prefix}{REDACT_ELLIPSIS}{suffix}")
    } else {
        let prefix: String = chars[..len / 4].iter().collect();
        format!("{prefix}{REDACT_ELLIPSIS}")
    }
}
