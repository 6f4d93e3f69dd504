use std::path::PathBuf;

use clap::Parser;
use hanzi_config::Config;

/// Look up simplified Chinese characters in the hanzi dataset
#[derive(Debug, Parser)]
#[command(name = "hanzi", version, about)]
pub struct Cli {
    /// Application origin: an http(s) base URL or a local directory holding the dataset
    #[arg(long)]
    pub origin: Option<String>,

    /// JSON config file
    #[arg(long, env = "HANZI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Look up a single character and exit
    #[arg(long, short)]
    pub query: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Flags win over file and environment
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(origin) = &self.origin {
            config.dataset.origin = origin.clone();
        }

        if self.json_logs {
            config.log_json = true;
        }

        config
    }
}
