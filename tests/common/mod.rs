//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use connect_harness::counter::{CounterAction, CounterState, CounterStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// A store whose reducer ignores every action and always yields `count`.
pub fn fixed_store(count: i64) -> CounterStore {
    CounterStore::new(
        move |_state: CounterState, _action: &CounterAction| CounterState::new(count),
        None,
    )
}

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A config path inside a temp dir that does not exist.
pub fn missing_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("absent.toml");
    (temp_dir, config_path)
}
