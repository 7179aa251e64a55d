//! Destination URLs for resolved text-record values.

use urlencoding::encode;

use crate::models::TextRecordKind;

const SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Destination URL for a resolved text-record value.
///
/// Profile records link to the platform profile with any leading `@`
/// stripped; `url` records pass through, gaining an `https://` scheme when
/// missing; free-text records fall back to a search query. Image records
/// (`avatar`, `header`) have no destination and map to `None`.
pub fn text_record_url(kind: TextRecordKind, value: &str) -> Option<String> {
    match kind {
        TextRecordKind::X => Some(format!("https://x.com/{}", strip_handle(value))),
        TextRecordKind::Github => Some(format!("https://github.com/{}", strip_handle(value))),
        TextRecordKind::Url => Some(with_scheme(value)),
        TextRecordKind::Name | TextRecordKind::Bio | TextRecordKind::Description => {
            Some(format!("{}{}", SEARCH_URL, encode(value)))
        }
        TextRecordKind::Avatar | TextRecordKind::Header => None,
    }
}

fn strip_handle(value: &str) -> &str {
    value.strip_prefix('@').unwrap_or(value)
}

fn with_scheme(value: &str) -> String {
    if value.contains("://") {
        value.to_string()
    } else {
        format!("https://{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_profile_strips_handle() {
        assert_eq!(
            text_record_url(TextRecordKind::X, "@bob"),
            Some("https://x.com/bob".to_string())
        );
        assert_eq!(
            text_record_url(TextRecordKind::X, "bob"),
            Some("https://x.com/bob".to_string())
        );
    }

    #[test]
    fn test_github_profile() {
        assert_eq!(
            text_record_url(TextRecordKind::Github, "@octocat"),
            Some("https://github.com/octocat".to_string())
        );
    }

    #[test]
    fn test_url_passthrough_and_scheme() {
        assert_eq!(
            text_record_url(TextRecordKind::Url, "https://example.org/a"),
            Some("https://example.org/a".to_string())
        );
        assert_eq!(
            text_record_url(TextRecordKind::Url, "example.org"),
            Some("https://example.org".to_string())
        );
    }

    #[test]
    fn test_free_text_becomes_search_query() {
        assert_eq!(
            text_record_url(TextRecordKind::Bio, "rust & coffee"),
            Some("https://www.google.com/search?q=rust%20%26%20coffee".to_string())
        );
    }

    #[test]
    fn test_image_records_have_no_destination() {
        assert_eq!(text_record_url(TextRecordKind::Avatar, "ipfs://x"), None);
        assert_eq!(text_record_url(TextRecordKind::Header, "ipfs://x"), None);
    }
}
