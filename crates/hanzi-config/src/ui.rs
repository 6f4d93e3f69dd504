use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_error_display_ms() -> u64 {
    5000
}

fn default_prompt() -> String {
    "汉字> ".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// How long an error stays on screen before the previous content comes back
    #[serde(default = "default_error_display_ms")]
    pub error_display_ms: u64,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            error_display_ms: default_error_display_ms(),
            prompt: default_prompt(),
        }
    }
}

impl UiConfig {
    pub fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }
}
