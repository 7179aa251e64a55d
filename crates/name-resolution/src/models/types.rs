use std::borrow::Cow;

/// Provider identifier - mostly static constants
pub type ProviderId = Cow<'static, str>;

/// Chain symbol for an address lookup (e.g. "eth", "btc") - mostly static
pub type ChainSymbol = Cow<'static, str>;
