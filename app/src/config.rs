use clap::Parser;
use serde::{Deserialize, Serialize};

use presale_common::config::VERSION;

// bind address by default when none specified
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

// Functions Helpers
fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_owned()
}

pub fn detect_available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(1)
}

#[derive(Debug, Clone, clap::Args, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP bind address for the page and manifest endpoints
    #[clap(long, default_value_t = String::from(DEFAULT_BIND_ADDRESS))]
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Number of HTTP worker threads
    #[clap(long, default_value_t = detect_available_parallelism())]
    #[serde(default = "detect_available_parallelism")]
    pub threads: usize,
}

#[derive(Parser, Serialize, Deserialize, Clone)]
#[clap(
    version = VERSION,
    about = "Presale mini app - serves the landing page and the frame metadata required by the embedding platform"
)]
pub struct Config {
    /// HTTP server configuration
    #[clap(flatten)]
    pub server: ServerConfig,
    /// JSON file to load the configuration from
    #[clap(long)]
    #[serde(skip)]
    #[serde(default)]
    pub config_file: Option<String>,
    /// Generate the template at the `config_file` path
    #[clap(long)]
    #[serde(skip)]
    #[serde(default)]
    pub generate_config_template: bool,
}
