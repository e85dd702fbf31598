use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use devtools_panel::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "devtools-panel")]
#[command(about = "Developer tool connections - see which API keys are configured")]
#[command(version)]
struct Cli {
    /// Server hosting /api/developer-tools (overrides the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Path to the config file (defaults to <config dir>/devtools-panel/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the developer tools panel
    Gui,

    /// Fetch the tool list once and print it
    List {
        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load_or_default(cli.config.as_deref()).with_base_url_override(cli.base_url);

    match cli.command {
        Some(Commands::List { json }) => {
            cli::list::list_command(&config, json)?;
        }
        Some(Commands::Gui) | None => {
            // Default: run the GUI
            devtools_panel::gui::run_gui(config)?;
        }
    }

    Ok(())
}
