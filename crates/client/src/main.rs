//! Donjon game client binary.
//!
//! This binary is the composition root:
//! 1. `.env` and environment variables (`ClientConfig::from_env`)
//! 2. Command-line flags, which override the environment
//! 3. File logging for the session
//! 4. Content, repositories and session via `SessionBuilder`
//! 5. The terminal menus
//!
//! # Examples
//!
//! ```bash
//! # Reproducible session with saves in a scratch directory
//! cargo run -p donjon-client -- --seed 42 --save-dir /tmp/donjon-saves
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use client_bootstrap::{ClientConfig, SessionBuilder};
use client_frontend_cli::{CliApp, logging};

/// Text role-playing game: create a hero, gear up, take on missions.
#[derive(Parser, Debug)]
#[command(name = "donjon")]
#[command(version, long_about = None)]
struct Args {
    /// Directory holding config.toml and the RON catalogs
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory for character saves and mission progress
    #[arg(long, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Directory for session log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Seed for every dice roll of the session
    #[arg(long)]
    seed: Option<u64>,

    /// Missions listed per page
    #[arg(long, value_name = "N")]
    missions_per_page: Option<usize>,
}

impl Args {
    fn apply(self, config: &mut ClientConfig) {
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if let Some(dir) = self.save_dir {
            config.save_dir = dir;
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = dir;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(per_page) = self.missions_per_page {
            config.missions_per_page = per_page.max(1);
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let mut config = ClientConfig::from_env();
    args.apply(&mut config);

    let (_log_guard, log_file) = logging::setup_logging(&config.log_dir)?;

    tracing::info!("Starting Donjon client");
    tracing::info!("Data directory: {}", config.data_dir.display());
    tracing::debug!("Client config: {:?}", config);

    let setup = SessionBuilder::new(config).build()?;
    println!("Session log: {}", log_file.display());

    CliApp::stdio(setup).run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
