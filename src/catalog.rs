use serde::Serialize;
use sui_transport::Network;

/// A known transaction worth trying the tool on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleDigest {
    pub digest: &'static str,
    pub description: &'static str,
    pub network: Network,
    pub features: &'static [&'static str],
}

pub const EXAMPLE_DIGESTS: &[ExampleDigest] = &[
    ExampleDigest {
        digest: "DmVJ3GC8qRpGEkfvTT2T642V95kgFHDeCk2agbpx98w8",
        description: "Multi-Network Transaction",
        network: Network::Mainnet,
        features: &["Cross-network search", "Gas optimization"],
    },
    ExampleDigest {
        digest: "4epaeL3kiHkT7sukmBDguao5bKqptHnMtKy8vgpCFteo",
        description: "Increment",
        network: Network::Devnet,
        features: &["Move calls", "Modified state"],
    },
    ExampleDigest {
        digest: "Gag9pRDipKySckhMpeMdM5FSg4wGhpBy4AzdEDigZ1y2",
        description: "DeFi Token Send",
        network: Network::Testnet,
        features: &["Move calls", "Object transfers"],
    },
    ExampleDigest {
        digest: "4eUy2vzkCUxhtp7JCxAZVnDuzPvVqkjC42A4eevKCCdV",
        description: "Mint gUSD",
        network: Network::Testnet,
        features: &["Minting"],
    },
    ExampleDigest {
        digest: "FN9ece3HzkSSuBFAbn96wuuw55fKrAMqEsyrLZbwZV5G",
        description: "Failed Smart Contract",
        network: Network::Mainnet,
        features: &["Multiple modules", "Failed"],
    },
];
