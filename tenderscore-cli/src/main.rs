use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::{net::IpAddr, path::PathBuf};

mod commands;

use commands::parse_timestamp;

#[derive(Parser, Debug)]
#[command(name = "tenderscore", version)]
#[command(about = "Tenderscore CLI - Vendor quote evaluation engine and HTTP service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Bind address (overrides TENDERSCORE_HOST)
        #[arg(long)]
        host: Option<IpAddr>,
        /// Bind port (overrides TENDERSCORE_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Score and rank the quotes in a `{quotes, rfp}` JSON file
    Evaluate {
        /// Input file, or `-` for stdin
        #[arg(long)]
        input: PathBuf,
        /// Evaluation time used for deadline arithmetic (default: now)
        #[arg(long, value_parser = parse_timestamp)]
        now: Option<DateTime<Utc>>,
    },
    /// Compare raw price and delivery of the quotes in a `{quotes}` JSON file
    Compare {
        /// Input file, or `-` for stdin
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() {
    // Initialize JSON logging once.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .json()
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { host, port } => commands::serve(host, port),
        Commands::Evaluate { input, now } => {
            commands::evaluate(&input, now).map(|output| println!("{output}"))
        }
        Commands::Compare { input } => commands::compare(&input).map(|output| println!("{output}")),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}
