use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use menuprice::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "menuprice")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Per-size menu pricing editor", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: ./menuprice.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the menu with the selected item expanded
    Show {
        /// Print the current state as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Expand an item, or collapse it if already expanded
    Select {
        /// Item ID
        item_id: u32,
    },

    /// Enable or disable a size of an item
    Toggle {
        /// Item ID
        item_id: u32,

        /// Size ID
        size_id: u32,
    },

    /// Set the price of a size (non-numeric input becomes 0)
    Price {
        /// Item ID
        item_id: u32,

        /// Size ID
        size_id: u32,

        /// New price
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Revert an item to its catalog values
    Undo {
        /// Item ID
        item_id: u32,
    },

    /// Revert every item and collapse the selection
    Reset,

    /// Report whether an item differs from the catalog
    Status {
        /// Item ID
        item_id: u32,
    },

    /// Show the effective configuration
    Config {
        /// Write a default menuprice.toml to the working directory
        #[arg(long)]
        init: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "menuprice=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MENUPRICE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Show { json } => menuprice::cli::menu::show(config, json)?,

        Commands::Select { item_id } => menuprice::cli::menu::select(config, item_id)?,

        Commands::Toggle { item_id, size_id } => {
            menuprice::cli::menu::toggle(config, item_id, size_id)?
        }

        Commands::Price {
            item_id,
            size_id,
            value,
        } => menuprice::cli::menu::price(config, item_id, size_id, &value)?,

        Commands::Undo { item_id } => menuprice::cli::menu::undo(config, item_id)?,

        Commands::Reset => menuprice::cli::menu::reset(config)?,

        Commands::Status { item_id } => menuprice::cli::menu::status(config, item_id)?,

        Commands::Config { init } => menuprice::cli::config::run(config, init)?,

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "menuprice", &mut io::stdout());
        }
    }

    Ok(())
}
