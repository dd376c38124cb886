//! logwrapper CLI
//!
//! Emit records through the facade from the command line

use clap::{Parser, Subcommand};
use logwrapper_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "logwrapper")]
#[command(about = "logwrapper - structured logging facade", long_about = None)]
struct Cli {
    /// Print the facade's own diagnostics to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Configure a logger and emit one record
    Emit(commands::emit::EmitArgs),
    /// Show the level translation table
    Levels(commands::levels::LevelsArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Emit(args) => commands::emit::execute(args),
        Commands::Levels(args) => commands::levels::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
