pub mod lookup_config;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "order-lookup")]
#[command(about = "Look up an order by its OrderUID and print the raw record")]
pub struct CliConfig {
    /// Base URL of the order service (overrides ORDER_SERVICE_URL and the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout applied by the HTTP client
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Look up a single order and exit instead of prompting
    #[arg(long)]
    pub order_uid: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
