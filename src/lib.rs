pub mod cli;
pub mod config;
pub mod counter;
pub mod headless;
pub mod logging;
pub mod store;
pub mod testing;
pub mod ui;
