mod loader;
mod types;

pub use loader::{ConfigError, MIN_VIEWPORT_HEIGHT, MIN_VIEWPORT_WIDTH};
pub use types::{Config, CounterConfig, UiConfig};
