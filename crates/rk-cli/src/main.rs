use std::io::{BufWriter, stdout};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rk_cli::commands::{about, activities, classify, search, util};
use rk_cli::{Cli, Commands, Config};

/// Load config, applying the `--archive` override.
fn load_config(config_path: Option<&Path>, archive: Option<&Path>) -> Result<Config> {
    let mut config = Config::load_from(config_path).context("failed to load configuration")?;
    if let Some(archive) = archive {
        config.archive_path = archive.to_path_buf();
    }
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = load_config(cli.config.as_deref(), cli.archive.as_deref())?;
    let posts = util::load_archive(&config.archive_path)?;

    let stdout = stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match command {
        Commands::About { json } => about::run(&mut writer, &posts, config.timezone, *json)?,
        Commands::Activities { json } => {
            let report = util::activity_report(&posts, config.timezone);
            activities::run(&mut writer, &report, *json)?;
        }
        Commands::Search { query, html } => search::run(&mut writer, &posts, query, *html)?,
        Commands::Classify => classify::run(&mut writer, &posts)?,
    }

    Ok(())
}
