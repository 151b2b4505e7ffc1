use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Seed for the counter store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Count the store starts from (default: 0).
    #[serde(default)]
    pub initial_count: i64,
}

/// Terminal and render settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between redraws of the interactive UI (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Width of the off-screen buffer used for headless renders (default: 40).
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u16,
    /// Height of the off-screen buffer used for headless renders (default: 6).
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u16,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_viewport_width() -> u16 {
    40
}

fn default_viewport_height() -> u16 {
    6
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}
