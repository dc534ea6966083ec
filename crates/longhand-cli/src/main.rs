//! longhand CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "longhand", version, about = "Terminal long-multiplication drills")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a drill session interactively
    Play {
        /// Digits per factor (overrides config)
        #[arg(long)]
        digits: Option<u32>,

        /// Number of problems in the session (overrides config)
        #[arg(long)]
        trials: Option<u32>,

        /// Required accuracy percentage to pass (overrides config)
        #[arg(long)]
        required_percent: Option<f64>,

        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Learner identity attached to the report
        #[arg(long)]
        student: Option<String>,

        /// Named sink to deliver the report to (overrides config)
        #[arg(long)]
        sink: Option<String>,

        /// Output directory for the report JSON
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the worked decomposition for two factors
    Solve {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        multiplicand: u64,

        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        multiplier: u64,
    },

    /// Validate the configuration a session would start from
    Validate {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("longhand=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            digits,
            trials,
            required_percent,
            seed,
            student,
            sink,
            output,
            config,
        } => {
            commands::play::execute(
                digits,
                trials,
                required_percent,
                seed,
                student,
                sink,
                output,
                config,
            )
            .await
        }
        Commands::Solve {
            multiplicand,
            multiplier,
        } => commands::solve::execute(multiplicand, multiplier),
        Commands::Validate { config } => commands::validate::execute(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
