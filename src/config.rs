use std::env;
use std::path::PathBuf;

const SUBGRAPH_ID: &str = "DWkA5Rpw4z11TXr6DawquZJeXasF4CfyeQy1S2jxCXLH";
const DEFAULT_OUTPUT_PATH: &str = "output/poap_minters_data.csv";

/// Run configuration, built once at startup and passed into the runner.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub event_ids: Vec<i64>,
    pub output_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            api_key: env::var("THEGRAPH_API_KEY").unwrap_or_default(),
            event_ids: env::var("EVENT_IDS")
                .map(|raw| parse_event_ids(&raw))
                .unwrap_or_default(),
            output_path: env::var("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        }
    }

    /// TheGraph gateway URL for the POAP subgraph, with the API key templated in.
    pub fn endpoint_url(&self) -> String {
        format!(
            "https://gateway-arbitrum.network.thegraph.com/api/{}/subgraphs/id/{}",
            self.api_key, SUBGRAPH_ID
        )
    }
}

/// Parse a comma-separated list of event ids. Entries that are empty or not
/// valid integers are skipped; an empty or fully-malformed list yields no
/// units of work.
pub fn parse_event_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| entry.parse().ok())
        .collect()
}
