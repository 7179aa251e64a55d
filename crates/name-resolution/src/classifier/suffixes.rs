//! Recognized-suffix tables.
//!
//! Single source of truth for the chain symbols, text-record kinds, and L2
//! subdomain suffixes the engine accepts. The validator, the classifier, and
//! the explorer mapper all read these tables; no other module carries its
//! own copy.
//!
//! Suffix lookups are ASCII case-insensitive; the structural `.eth`
//! terminator is matched exactly.

use crate::models::{L2Network, TextRecordKind};

/// Chain symbols accepted as an address-lookup suffix or `:`-tail.
pub const CHAIN_SYMBOLS: &[&str] = &[
    "eth", "btc", "sol", "doge", "xrp", "ltc", "ada", "bnb", "dot", "avax", "trx", "bch", "xlm",
    "atom", "near",
    // L2 / sidechain symbols
    "base", "polygon", "matic", "arbitrum", "arb", "optimism", "op",
];

/// Text-record suffixes, aliases included.
const TEXT_RECORD_SUFFIXES: &[(&str, TextRecordKind)] = &[
    ("x", TextRecordKind::X),
    ("twitter", TextRecordKind::X),
    ("url", TextRecordKind::Url),
    ("github", TextRecordKind::Github),
    ("name", TextRecordKind::Name),
    ("bio", TextRecordKind::Bio),
    ("description", TextRecordKind::Description),
    ("avatar", TextRecordKind::Avatar),
    ("header", TextRecordKind::Header),
];

/// Subdomain suffixes marking a name as an L2 naming deployment.
const L2_SUFFIXES: &[(&str, L2Network)] = &[
    (".base.eth", L2Network::Base),
    (".polygon.eth", L2Network::Polygon),
    (".arbitrum.eth", L2Network::Arbitrum),
    (".optimism.eth", L2Network::Optimism),
];

/// Look up a chain symbol, returning its canonical static form.
pub fn chain_symbol(suffix: &str) -> Option<&'static str> {
    CHAIN_SYMBOLS
        .iter()
        .find(|s| s.eq_ignore_ascii_case(suffix))
        .copied()
}

/// Look up a text-record suffix (aliases included).
pub fn text_record_kind(suffix: &str) -> Option<TextRecordKind> {
    TEXT_RECORD_SUFFIXES
        .iter()
        .find(|(s, _)| s.eq_ignore_ascii_case(suffix))
        .map(|(_, kind)| *kind)
}

/// Whether a suffix names either a chain or a text record.
pub fn is_recognized_suffix(suffix: &str) -> bool {
    chain_symbol(suffix).is_some() || text_record_kind(suffix).is_some()
}

/// L2 network for an ENS name, keyed on its trailing two labels.
///
/// The suffix alone is not a name: `base.eth` itself is not an L2
/// subdomain, `alice.base.eth` is.
pub fn l2_network_for(ens_name: &str) -> Option<L2Network> {
    L2_SUFFIXES.iter().find_map(|(suffix, network)| {
        (ens_name.len() > suffix.len() && ens_name.ends_with(suffix)).then_some(*network)
    })
}
