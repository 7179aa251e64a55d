//! Identifier classification into a canonical query.

use std::borrow::Cow;

use crate::errors::ResolveError;
use crate::models::{ClassifiedQuery, RequestKind};

use super::suffixes::{chain_symbol, l2_network_for, text_record_kind};

/// Parse an identifier into its canonical query shape.
///
/// Total over arbitrary input; any identifier accepted by
/// [`is_valid`](super::is_valid) classifies successfully. The request kind
/// derives from the `:`-tail or the final suffix, defaulting to an `eth`
/// address lookup when the name just ends in `.eth`.
pub fn classify(text: &str) -> Result<ClassifiedQuery, ResolveError> {
    let (base_label, kind) = if let Some((name, suffix)) = text.rsplit_once(':') {
        // Colon form: the left side must itself be an .eth name.
        let base = name
            .strip_suffix(".eth")
            .filter(|label| !label.is_empty())
            .ok_or_else(|| ResolveError::InvalidFormat(text.to_string()))?;
        (base, request_kind(suffix)?)
    } else if let Some(base) = text.strip_suffix(".eth") {
        if base.is_empty() {
            return Err(ResolveError::InvalidFormat(text.to_string()));
        }
        (base, RequestKind::Address(Cow::Borrowed("eth")))
    } else {
        let (base, suffix) = text
            .rsplit_once('.')
            .filter(|(label, _)| !label.is_empty())
            .ok_or_else(|| ResolveError::InvalidFormat(text.to_string()))?;
        (base, request_kind(suffix)?)
    };

    let ens_name = format!("{base_label}.eth");

    Ok(ClassifiedQuery {
        base_label: base_label.to_string(),
        kind,
        // L2 detection is independent of the request kind: a plain address
        // lookup on `alice.base.eth` still routes through the L2-aware
        // provider.
        l2_network: l2_network_for(&ens_name),
    })
}

fn request_kind(suffix: &str) -> Result<RequestKind, ResolveError> {
    if let Some(symbol) = chain_symbol(suffix) {
        return Ok(RequestKind::Address(Cow::Borrowed(symbol)));
    }
    if let Some(kind) = text_record_kind(suffix) {
        return Ok(RequestKind::Text(kind));
    }
    Err(ResolveError::UnrecognizedSuffix(suffix.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{L2Network, TextRecordKind};

    #[test]
    fn test_plain_eth_name() {
        let query = classify("vitalik.eth").unwrap();
        assert_eq!(query.base_label, "vitalik");
        assert_eq!(query.kind, RequestKind::Address("eth".into()));
        assert!(!query.is_l2_subdomain());
    }

    #[test]
    fn test_colon_form_chain_request() {
        let query = classify("onshow.eth:btc").unwrap();
        assert_eq!(query.base_label, "onshow");
        assert_eq!(query.kind, RequestKind::Address("btc".into()));
        assert!(!query.is_l2_subdomain());
    }

    #[test]
    fn test_l2_subdomain_detected_on_plain_lookup() {
        let query = classify("alice.base.eth").unwrap();
        assert_eq!(query.base_label, "alice.base");
        assert_eq!(query.kind, RequestKind::Address("eth".into()));
        assert_eq!(query.l2_network, Some(L2Network::Base));
    }

    #[test]
    fn test_l2_detection_is_independent_of_kind() {
        let query = classify("alice.polygon.eth:btc").unwrap();
        assert_eq!(query.kind, RequestKind::Address("btc".into()));
        assert_eq!(query.l2_network, Some(L2Network::Polygon));
    }

    #[test]
    fn test_chain_suffix_shorthand() {
        let query = classify("onshow.btc").unwrap();
        assert_eq!(query.base_label, "onshow");
        assert_eq!(query.kind, RequestKind::Address("btc".into()));
        assert_eq!(query.ens_name(), "onshow.eth");
    }

    #[test]
    fn test_text_record_suffix() {
        let query = classify("bob.x").unwrap();
        assert_eq!(query.base_label, "bob");
        assert_eq!(query.kind, RequestKind::Text(TextRecordKind::X));
    }

    #[test]
    fn test_twitter_alias_maps_to_x() {
        let query = classify("bob.twitter").unwrap();
        assert_eq!(query.kind, RequestKind::Text(TextRecordKind::X));
    }

    #[test]
    fn test_unrecognized_suffix() {
        assert_eq!(
            classify("bob.qqq"),
            Err(ResolveError::UnrecognizedSuffix("qqq".to_string()))
        );
        assert_eq!(
            classify("bob.eth:qqq"),
            Err(ResolveError::UnrecognizedSuffix("qqq".to_string()))
        );
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(matches!(
            classify("no-dots"),
            Err(ResolveError::InvalidFormat(_))
        ));
        assert!(matches!(classify(""), Err(ResolveError::InvalidFormat(_))));
        assert!(matches!(
            classify(".eth"),
            Err(ResolveError::InvalidFormat(_))
        ));
        // Colon form requires an .eth name on the left
        assert!(matches!(
            classify("bob.btc:sol"),
            Err(ResolveError::InvalidFormat(_))
        ));
    }
}
