//! Block-explorer URL construction for resolved addresses.

use crate::models::L2Network;

const DEFAULT_EXPLORER: &str = "https://etherscan.io";

fn explorer_base(network: L2Network) -> &'static str {
    match network {
        L2Network::Base => "https://basescan.org",
        L2Network::Polygon => "https://polygonscan.com",
        L2Network::Arbitrum => "https://arbiscan.io",
        L2Network::Optimism => "https://optimistic.etherscan.io",
    }
}

/// Explorer address page for a resolved address.
///
/// Uses the network-specific explorer when the query carried a recognized
/// L2 suffix and Etherscan otherwise. Always yields a URL; the address is
/// assumed already resolved and non-empty.
pub fn explorer_url(network: Option<L2Network>, address: &str) -> String {
    let base = network.map(explorer_base).unwrap_or(DEFAULT_EXPLORER);
    format!("{}/address/{}", base, address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_explorer() {
        assert_eq!(
            explorer_url(None, "0x1"),
            "https://etherscan.io/address/0x1"
        );
    }

    #[test]
    fn test_l2_explorers() {
        assert_eq!(
            explorer_url(Some(L2Network::Polygon), "0x1"),
            "https://polygonscan.com/address/0x1"
        );
        assert_eq!(
            explorer_url(Some(L2Network::Base), "0x2"),
            "https://basescan.org/address/0x2"
        );
        assert_eq!(
            explorer_url(Some(L2Network::Arbitrum), "0x3"),
            "https://arbiscan.io/address/0x3"
        );
        assert_eq!(
            explorer_url(Some(L2Network::Optimism), "0x4"),
            "https://optimistic.etherscan.io/address/0x4"
        );
    }
}
