//! Canonical query shape produced by classification.

use super::types::ChainSymbol;

/// Layer-2 network recognized from a subdomain suffix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum L2Network {
    Base,
    Polygon,
    Arbitrum,
    Optimism,
}

/// Text-record kind recognized from an identifier suffix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextRecordKind {
    X,
    Url,
    Github,
    Name,
    Bio,
    Description,
    Avatar,
    Header,
}

impl TextRecordKind {
    /// Record key as sent to providers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Url => "url",
            Self::Github => "github",
            Self::Name => "name",
            Self::Bio => "bio",
            Self::Description => "description",
            Self::Avatar => "avatar",
            Self::Header => "header",
        }
    }
}

/// What a classified identifier is asking for.
///
/// Exactly one of the two is ever set for a query; classification always
/// derives a kind or fails with an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RequestKind {
    /// An address record on the given chain.
    Address(ChainSymbol),
    /// A text record of the given kind.
    Text(TextRecordKind),
}

/// An identifier parsed into its canonical query shape.
///
/// Immutable, created once per request by
/// [`classify`](crate::classifier::classify) and discarded with the outcome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassifiedQuery {
    /// Name portion with any chain/record suffix and the terminal `.eth`
    /// stripped (`vitalik.eth` -> `vitalik`, `alice.base.eth` -> `alice.base`,
    /// `bob.x` -> `bob`, `onshow.eth:btc` -> `onshow`).
    pub base_label: String,
    /// The record being requested.
    pub kind: RequestKind,
    /// Layer-2 network when the name carries a recognized L2 suffix.
    pub l2_network: Option<L2Network>,
}

impl ClassifiedQuery {
    /// Whether the name lives under a recognized L2 subdomain.
    pub fn is_l2_subdomain(&self) -> bool {
        self.l2_network.is_some()
    }

    /// The canonical ENS name the query is about.
    pub fn ens_name(&self) -> String {
        format!("{}.eth", self.base_label)
    }

    /// Identifier string sent to providers: the plain name for `eth`
    /// address lookups, the colon form for everything else.
    pub fn provider_query(&self) -> String {
        match &self.kind {
            RequestKind::Address(symbol) if symbol.as_ref() == "eth" => self.ens_name(),
            RequestKind::Address(symbol) => format!("{}:{}", self.ens_name(), symbol),
            RequestKind::Text(kind) => format!("{}:{}", self.ens_name(), kind.as_str()),
        }
    }
}
