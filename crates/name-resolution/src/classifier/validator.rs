//! Identifier syntax validation.

use super::suffixes::is_recognized_suffix;

/// Check whether `text` matches one of the recognized identifier syntaxes.
///
/// Total over arbitrary Unicode input: never panics, and the empty string
/// is simply `false`. Callers use this to gate input before trusting
/// [`classify`](super::classify).
///
/// Accepted forms, tried in order:
/// 1. `<label>.eth:<suffix>` - explicit chain/record request on an eth name
/// 2. `<label>.eth` - broad Unicode label, interior dots allowed
/// 3. `<label>.<suffix>` - suffix in the recognized chain or record set
pub fn is_valid(text: &str) -> bool {
    if let Some((name, suffix)) = text.rsplit_once(':') {
        return is_eth_name(name) && is_recognized_suffix(suffix);
    }

    if is_eth_name(text) {
        return true;
    }

    match text.rsplit_once('.') {
        Some((label, suffix)) => is_label(label) && is_recognized_suffix(suffix),
        None => false,
    }
}

fn is_eth_name(text: &str) -> bool {
    matches!(text.strip_suffix(".eth"), Some(label) if is_label(label))
}

/// Non-empty label of printable Unicode: letters, numbers, marks, symbols,
/// punctuation, and separators all pass; control scalars are the reject.
fn is_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| !c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_eth_names() {
        assert!(is_valid("vitalik.eth"));
        assert!(is_valid("alice.base.eth"));
        assert!(is_valid("sub.domain.eth"));
        assert!(is_valid("with-hyphen.eth"));
    }

    #[test]
    fn test_unicode_labels() {
        assert!(is_valid("日本語.eth"));
        assert!(is_valid("héllo.eth"));
        assert!(is_valid("🔥🔥🔥.eth"));
        // Control characters never form a label
        assert!(!is_valid("bad\u{0000}label.eth"));
        assert!(!is_valid("tab\there.eth"));
    }

    #[test]
    fn test_chain_and_record_suffixes() {
        assert!(is_valid("onshow.btc"));
        assert!(is_valid("someone.sol"));
        assert!(is_valid("bob.x"));
        assert!(is_valid("bob.github"));
        assert!(is_valid("bob.bio"));
    }

    #[test]
    fn test_colon_form() {
        assert!(is_valid("onshow.eth:btc"));
        assert!(is_valid("onshow.eth:x"));
        assert!(!is_valid("onshow.btc:eth")); // left side must be an .eth name
        assert!(!is_valid("onshow.eth:"));
        assert!(!is_valid(":btc"));
    }

    #[test]
    fn test_rejects() {
        assert!(!is_valid(""));
        assert!(!is_valid("eth"));
        assert!(!is_valid("no-dot-here"));
        assert!(!is_valid(".eth"));
        assert!(!is_valid("name.et")); // ends mid-suffix
        assert!(!is_valid("name.qqq"));
        assert!(!is_valid("."));
    }
}
