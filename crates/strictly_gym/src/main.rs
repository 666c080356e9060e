//! Strictly Gym - scripted episode driver
//!
//! Plays action sequences against the environment and reports every step.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use strictly_gym::{EnvConfig, Player, RenderMode, ResetOptions, XsAndOsEnv};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            moves,
            starting_player,
            render_mode,
            frame_out,
        } => run_play(config, moves, starting_player, render_mode, frame_out),
        Command::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Loads the config file if one was given, defaults otherwise.
#[instrument]
fn load_config(path: Option<&Path>) -> Result<EnvConfig> {
    match path {
        Some(path) => EnvConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(EnvConfig::default()),
    }
}

/// Plays one scripted episode.
#[instrument(skip(config))]
fn run_play(
    config: EnvConfig,
    moves: Vec<usize>,
    starting_player: Option<Player>,
    render_mode: Option<RenderMode>,
    frame_out: Option<PathBuf>,
) -> Result<()> {
    let config = match render_mode {
        Some(mode) => config.with_render_mode(mode),
        None => config,
    };
    let options = starting_player.map(ResetOptions::new);

    let mut env = XsAndOsEnv::new(config)?;
    env.reset(options)?;

    // Human mode owns the terminal, so step output is printed after close.
    let mut lines = Vec::with_capacity(moves.len());
    let mut outcome = Ok(());
    for action in moves {
        match env.step(action) {
            Ok(result) => {
                if result.terminated() {
                    let phase = env.engine().phase();
                    info!(%phase, winner = ?phase.winner(), "Episode terminated");
                }
                lines.push(serde_json::to_string(&result)?);
            }
            Err(e) => {
                warn!(error = %e, action, "Driver stopped");
                outcome = Err(e);
                break;
            }
        }
    }

    let frame = env.render()?;
    env.close();

    for line in &lines {
        println!("{}", line);
    }
    outcome?;

    if let Some(path) = frame_out {
        let Some(frame) = frame else {
            bail!("--frame-out needs --render-mode rgb-array");
        };
        std::fs::write(&path, frame.to_ppm())
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "Frame written");
    }

    Ok(())
}
