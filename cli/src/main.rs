use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod output;
mod utils;
mod validate;

#[derive(Parser)]
#[command(name = "keyguard")]
#[command(about = "Structural validator for PEM private keys", long_about = None)]
struct Cli {
    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a private key is well formed
    Validate {
        #[command(flatten)]
        config: validate::Config,
    },
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins over --verbose
    let default = if verbose { "debug" } else { "warn" };
    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .try_init();
    if let Err(e) = installed {
        eprintln!("warning: logging disabled: {e}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Validate { config } => validate::execute(config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
