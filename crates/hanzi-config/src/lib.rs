use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::dataset::DatasetConfig;
use self::ui::UiConfig;

pub mod dataset;
pub mod ui;

pub use dataset::DATASET_FILE_NAME;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub ui: UiConfig,

    /// Default tracing filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            ui: UiConfig::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment
    pub fn new() -> Self {
        Self::default().with_env()
    }

    /// Load from an optional JSON file, then overlay the process environment
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Ok(base.with_env())
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn with_env(self) -> Self {
        self.with_vars(|key| env::var(key).ok())
    }

    /// Overlay values from a variable lookup (`APP_ORIGIN`, `ERROR_DISPLAY_MS`, `LOG_LEVEL`, `LOG_JSON`)
    pub fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(origin) = var("APP_ORIGIN").filter(|v| !v.trim().is_empty()) {
            self.dataset.origin = origin;
        }

        if let Some(ms) = var("ERROR_DISPLAY_MS").and_then(|v| v.parse().ok()) {
            self.ui.error_display_ms = ms;
        }

        if let Some(level) = var("LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
            self.log_level = level;
        }

        if let Some(json) = var("LOG_JSON") {
            self.log_json = matches!(json.trim(), "1" | "true" | "yes");
        }

        self
    }
}
