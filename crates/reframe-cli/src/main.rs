//! Reframe CLI - turn what you'd tell a friend into what you tell yourself.

use clap::Parser;
use reframe_cli::commands;
use reframe_cli::repl;
use reframe_cli::{Cli, Command, Config, Formatter};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> reframe_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config, falling back to defaults when the file is absent
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;
    debug!("Loaded configuration from {}", config_path.display());

    if let Some(database) = cli.database {
        config.storage.database = Some(database);
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            let mut store = commands::open_store(&config)?;
            repl::run_repl(&config, &mut store, &formatter)?;
        }
        Some(Command::Rewrite(args)) => {
            commands::execute_rewrite(args, &formatter)?;
        }
        Some(Command::Compose(args)) => {
            commands::execute_compose(args, &config, &formatter)?;
        }
        Some(Command::List(args)) => {
            let store = commands::open_store(&config)?;
            commands::execute_list(args, &store, &formatter)?;
        }
        Some(Command::Delete(args)) => {
            let mut store = commands::open_store(&config)?;
            commands::execute_delete(args, &mut store, &formatter)?;
        }
        Some(Command::Catalog(args)) => {
            commands::execute_catalog(args, &formatter)?;
        }
        Some(Command::Rules) => {
            commands::execute_rules(&formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for JSON and quiet output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
