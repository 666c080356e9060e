//! Command-line interface for strictly_gym.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_gym::{Player, RenderMode};

/// Strictly Gym - Xs and Os reinforcement-learning environment
#[derive(Parser, Debug)]
#[command(name = "strictly_gym")]
#[command(about = "Drive the Xs and Os environment from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an environment config (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a scripted episode and print every step as a JSON line
    Play {
        /// Actions to play in order (0-8, row-major)
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Player who moves first (x or o)
        #[arg(long)]
        starting_player: Option<Player>,

        /// Render mode, overriding the config
        #[arg(long, value_enum)]
        render_mode: Option<RenderMode>,

        /// Write the final frame as a PPM image (rgb-array mode only)
        #[arg(long)]
        frame_out: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}
