//! coursetrack CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod summary;

#[derive(Parser)]
#[command(name = "coursetrack", version, about = "Course progress tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter assignments at the prompt and print results
    Interactive {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade every assignment in a sheet file
    Run {
        /// Path to a .toml assignment sheet
        #[arg(long)]
        sheet: PathBuf,

        /// Transcript order: asc or desc
        #[arg(long)]
        order: Option<String>,

        /// Output format: text, json
        #[arg(long)]
        format: Option<String>,

        /// Also save the JSON report to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a sheet for entries that would be rejected
    Validate {
        /// Path to a .toml assignment sheet
        #[arg(long)]
        sheet: PathBuf,
    },

    /// Create starter config and example sheet
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coursetrack=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Interactive { config } => commands::interactive::execute(config),
        Commands::Run {
            sheet,
            order,
            format,
            output,
            config,
        } => commands::run::execute(sheet, order, format, output, config),
        Commands::Validate { sheet } => commands::validate::execute(sheet),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
