use clap::Parser;
use sui_transport::Network;

#[derive(Debug, Parser)]
#[command(
    name = "sui-tx-explain",
    author,
    version,
    about = "Find a Sui transaction on any network and explain what it did"
)]
pub struct Args {
    /// Transaction digest or explorer URL (suivision.xyz / suiscan.xyz).
    #[arg(value_name = "DIGEST_OR_URL")]
    pub input: Option<String>,

    /// Networks to search, in order. Repeat or comma-separate.
    /// Defaults to mainnet, devnet, testnet.
    #[arg(long = "network", value_name = "NETWORK", value_delimiter = ',')]
    pub networks: Vec<Network>,

    /// Output as JSON instead of human-readable format
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Read one digest or URL per line from stdin. A newer line supersedes
    /// a search still in flight.
    #[arg(long, default_value_t = false)]
    pub stdin: bool,

    /// List example transactions and exit.
    #[arg(long, default_value_t = false)]
    pub examples: bool,

    /// Verbose output (debug logs, raw execution error)
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Validate CLI arguments for conflicts and requirements.
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.examples {
            return Ok(());
        }
        if self.stdin && self.input.is_some() {
            return Err("--stdin reads inputs from stdin; do not also pass DIGEST_OR_URL".to_string());
        }
        if !self.stdin && self.input.is_none() {
            return Err("a transaction digest or explorer URL is required".to_string());
        }
        Ok(())
    }

    /// Networks to probe, in order.
    pub fn search_order(&self) -> Vec<Network> {
        if self.networks.is_empty() {
            Network::SEARCH_ORDER.to_vec()
        } else {
            self.networks.clone()
        }
    }
}
