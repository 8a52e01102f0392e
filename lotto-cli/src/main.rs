mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::ConfigOverrides;
use lotto_core::{GameConfig, LottoError, RoundEngine};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Lotto - pick 6 numbers and a strong number, beat the draw")]
#[command(version)]
struct Cli {
    /// Game config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible draws
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Override the ticket cost
    #[arg(long, global = true)]
    ticket_cost: Option<i64>,

    /// Override the starting money
    #[arg(long, global = true)]
    start_money: Option<i64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,
    /// Auto-play quick-pick tickets and print a summary
    Simulate {
        /// Maximum number of tickets to submit
        #[arg(short, long, default_value_t = 100)]
        rounds: u32,
    },
    /// Show the prize table and game rules
    Rules,
    /// Print the effective configuration as JSON
    Config,
}

fn build_engine(config: GameConfig, seed: Option<u64>) -> lotto_core::Result<RoundEngine> {
    match seed {
        Some(seed) => RoundEngine::seeded(config, seed),
        None => RoundEngine::new(config),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = ConfigOverrides {
        ticket_cost: cli.ticket_cost,
        start_money: cli.start_money,
    };
    let game_config = config::load_game_config(cli.config.as_deref(), &overrides)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let engine = build_engine(game_config, cli.seed)?;
            commands::play(engine)
        }
        Commands::Simulate { rounds } => {
            let engine = build_engine(game_config, cli.seed)?;
            commands::simulate(engine, rounds)
        }
        Commands::Rules => {
            commands::show_rules(&game_config);
            Ok(())
        }
        Commands::Config => {
            println!("{}", game_config.to_json_pretty()?);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lotto={},lotto_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<LottoError>() {
            Some(LottoError::Config(msg)) => {
                eprintln!("Error: Invalid configuration: {}", msg);
                eprintln!("Use 'lotto config' to see the effective configuration");
            }
            Some(LottoError::DrawRange { count, min, max }) => {
                eprintln!(
                    "Error: Cannot pick {} numbers from {}..={}",
                    count, min, max
                );
            }
            _ => {
                eprintln!("Error: {:#}", e);
            }
        }
        std::process::exit(1);
    }
}
