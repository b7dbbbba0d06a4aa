use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use abtest_demo::cli::{Cli, OutputFormat};
use abtest_demo::compute::run_demo;
use abtest_demo::config::overrides::SettingsOverrides;
use abtest_demo::report::text::format_text;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    //----------------------------------------
    // Defaults < settings file < command line
    let file_overrides = match &cli.config {
        Some(path) => SettingsOverrides::load(path)?,
        None => SettingsOverrides::default(),
    };
    let settings = file_overrides.merge(cli.overrides()).resolve();
    tracing::debug!(?settings, "resolved settings");

    let report = run_demo(&settings, cli.plot_path())?;
    match cli.format {
        OutputFormat::Text => println!("{}", format_text(&report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        ),
    }
    Ok(())
}
