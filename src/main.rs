use anyhow::Context;
use clap::Parser;
use connect_harness::cli::Cli;
use connect_harness::config::Config;
use connect_harness::counter::{CounterReducer, CounterState, CounterStore};
use connect_harness::headless::{run_headless, OutputFormat};
use connect_harness::logging::init_tracing;
use connect_harness::ui::runtime;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let initial_count = cli.initial_count(&config);

    if cli.headless {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Screen
        };
        let output = run_headless(&config, initial_count, cli.actions(), format)?;
        println!("{output}");
        return Ok(());
    }

    let store = CounterStore::new(CounterReducer, Some(CounterState::new(initial_count)));
    runtime::run(store, &config.ui).context("terminal session failed")?;
    Ok(())
}
