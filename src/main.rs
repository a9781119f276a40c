//! Command line entry point for the Swiss pairing tournament manager
//!
//! Each invocation opens the configured store, runs one command against it
//! and exits. Results go to stdout, logs go to stderr.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use swiss_pairing::config::{validate_cli_config, validate_config, AppConfig, StorageBackend};
use swiss_pairing::storage::open_store;
use swiss_pairing::{PlayerId, SwissTournament, TournamentError};
use tracing::{debug, info};

/// Swiss Pairing - Swiss-system tournament manager
#[derive(Parser)]
#[command(
    name = "swiss-pairing",
    version,
    about = "Register players, record results and generate Swiss pairings",
    long_about = "Swiss Pairing keeps a Swiss-system tournament: players are registered, match \
                 results are recorded, and each round pairs players adjacent in the standings."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Data file override
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Override the tournament data file (implies the file backend)"
    )]
    data_file: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        global = true,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Emit JSON instead of tables
    #[arg(long, global = true, help = "Print results as JSON")]
    json: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without running a command")]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new player
    Register {
        /// Display name (need not be unique)
        name: String,
    },
    /// Record the result of a match
    Report {
        /// Id of the player who won
        winner: PlayerId,
        /// Id of the player who lost
        loser: PlayerId,
    },
    /// Show the standings, ranked by wins
    Standings,
    /// Show the pairings for the next round
    Pairings,
    /// Show player and match counts
    Count,
    /// Delete all match results
    ClearMatches,
    /// Delete all players. Fails while any match results exist; run clear-matches first
    ClearPlayers,
    /// Delete all matches and players
    Reset,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file, environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(data_file) = &args.data_file {
        config.storage.backend = StorageBackend::File;
        config.storage.data_file = data_file.clone();
    }

    validate_config(&config)?;
    validate_cli_config(&config)?;
    Ok(config)
}

fn display_config(config: &AppConfig) {
    debug!("Swiss Pairing {}", swiss_pairing::VERSION);
    debug!("   Service: {}", config.service.name);
    debug!("   Log level: {}", config.service.log_level);
    debug!("   Storage: {}", config.storage.backend);
    if config.storage.backend == StorageBackend::File {
        debug!("   Data file: {}", config.storage.data_file.display());
    }
    debug!("   Sanitize names: {}", config.tournament.sanitize_names);
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_command(tournament: &SwissTournament, command: Command, json: bool) -> Result<()> {
    match command {
        Command::Register { name } => {
            let player = tournament.register_player(&name)?;
            if json {
                print_json(&player)?;
            } else {
                println!("Registered player {}: {}", player.id, player.name);
            }
        }
        Command::Report { winner, loser } => {
            let record = tournament.report_match(winner, loser)?;
            if json {
                print_json(&record)?;
            } else {
                println!("Recorded: {} beat {}", record.winner_id, record.loser_id);
            }
        }
        Command::Standings => {
            let standings = tournament.standings()?;
            if json {
                print_json(&standings)?;
            } else {
                println!(
                    "{:>4}  {:<32} {:>4} {:>6} {:>7}",
                    "ID", "NAME", "WINS", "LOSSES", "MATCHES"
                );
                for entry in &standings {
                    println!(
                        "{:>4}  {:<32} {:>4} {:>6} {:>7}",
                        entry.player_id,
                        entry.name,
                        entry.wins,
                        entry.losses(),
                        entry.matches_played
                    );
                }
            }
        }
        Command::Pairings => {
            let pairings = tournament.pairings()?;
            if json {
                print_json(&pairings)?;
            } else if pairings.is_empty() {
                println!("No players registered");
            } else {
                for (table, pairing) in pairings.iter().enumerate() {
                    println!("Table {}: {}", table + 1, pairing);
                }
            }
        }
        Command::Count => {
            let summary = tournament.summary()?;
            if json {
                print_json(&summary)?;
            } else {
                println!("Players: {}", summary.players);
                println!("Matches: {}", summary.matches);
                println!(
                    "Next round: {}",
                    if summary.next_round_pairable {
                        "ready to pair"
                    } else {
                        "odd player count, cannot pair"
                    }
                );
            }
        }
        Command::ClearMatches => {
            tournament.delete_matches()?;
            println!("All matches deleted");
        }
        Command::ClearPlayers => {
            tournament.delete_players()?;
            println!("All players deleted");
        }
        Command::Reset => {
            tournament.reset()?;
            println!("Tournament reset");
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_config(&config);

    if args.dry_run {
        info!("Configuration validation successful");
        return Ok(());
    }

    let Some(command) = args.command else {
        Args::command().print_help()?;
        std::process::exit(2);
    };

    let store = open_store(&config.storage);
    let tournament = SwissTournament::with_settings(store, config.tournament.clone());

    if let Err(e) = run_command(&tournament, command, args.json) {
        debug!("Command failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        let code = match e.downcast_ref::<TournamentError>() {
            Some(TournamentError::InvalidState { .. }) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }

    Ok(())
}
