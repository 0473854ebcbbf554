//! Headless driver for the creature-battling rules.
//!
//! Loads content and the session save, then runs one subcommand:
//! `tilemon <command> [args]`.

mod commands;
mod config;
mod dirs;
mod game;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{Battle, Encounters, Heal, Navigate, Reset, ShopCommand, Status, Train};
use config::CliConfig;
use game::GameContext;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tilemon")]
#[command(about = "Headless battles, routes and encounters", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fight a wild creature or a trainer with a scripted command list
    Battle(Battle),

    /// Find a path between two cells of a map
    Navigate(Navigate),

    /// Roll wild encounters
    Encounters(Encounters),

    /// Buy or sell items
    #[command(subcommand)]
    Shop(ShopCommand),

    /// Restore the whole party to full HP
    Heal(Heal),

    /// Give experience to a party member
    Train(Train),

    /// Show party and bag
    Status(Status),

    /// Delete the session save
    Reset(Reset),
}

fn main() -> Result<()> {
    // Load .env file if it exists (TILEMON_* and GAME_SESSION_ID)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    setup_logging(&config)?;

    let mut game = GameContext::load(&config)?;

    match cli.command {
        Command::Battle(cmd) => cmd.execute(&mut game),
        Command::Navigate(cmd) => cmd.execute(&game),
        Command::Encounters(cmd) => cmd.execute(&game),
        Command::Shop(cmd) => cmd.execute(&mut game),
        Command::Heal(cmd) => cmd.execute(&mut game),
        Command::Train(cmd) => cmd.execute(&mut game),
        Command::Status(cmd) => cmd.execute(&game),
        Command::Reset(cmd) => cmd.execute(&game),
    }
}

/// Stderr output plus a per-session log file under the log root.
fn setup_logging(config: &CliConfig) -> Result<()> {
    let session_log_dir = dirs::log_dir(config).join(config.session_id());
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "tilemon.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", config.session_id());
    tracing::debug!("Log file: {}/tilemon.log", session_log_dir.display());

    Ok(())
}
