use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const MAINNET_FULLNODE: &str = "https://fullnode.mainnet.sui.io:443";
const DEVNET_FULLNODE: &str = "https://fullnode.devnet.sui.io:443";
const TESTNET_FULLNODE: &str = "https://fullnode.testnet.sui.io:443";

/// A Sui network a transaction can live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Devnet,
    Testnet,
}

impl Network {
    /// Default probe order: most transactions people paste are on mainnet.
    pub const SEARCH_ORDER: [Network; 3] = [Network::Mainnet, Network::Devnet, Network::Testnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Devnet => "devnet",
            Network::Testnet => "testnet",
        }
    }

    /// Capitalized name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Devnet => "Devnet",
            Network::Testnet => "Testnet",
        }
    }

    /// Color hint used by renderers to tell networks apart.
    pub fn color(&self) -> &'static str {
        match self {
            Network::Mainnet => "green",
            Network::Devnet => "orange",
            Network::Testnet => "blue",
        }
    }

    pub fn default_fullnode_url(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_FULLNODE,
            Network::Devnet => DEVNET_FULLNODE,
            Network::Testnet => TESTNET_FULLNODE,
        }
    }

    /// Fullnode URL, honoring `SUI_RPC_URL_<NETWORK>` overrides.
    pub fn fullnode_url(&self) -> String {
        let key = format!("SUI_RPC_URL_{}", self.as_str().to_uppercase());
        if let Ok(value) = std::env::var(key) {
            if !value.trim().is_empty() {
                return value;
            }
        }
        self.default_fullnode_url().to_string()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "devnet" => Ok(Network::Devnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(format!(
                "unknown network '{}' (expected mainnet, devnet or testnet)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!(" Testnet ".parse::<Network>().unwrap(), Network::Testnet);
        assert!("localnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_search_order() {
        let names: Vec<&str> = Network::SEARCH_ORDER.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["mainnet", "devnet", "testnet"]);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Network::Testnet).unwrap(),
            "\"testnet\""
        );
    }
}
