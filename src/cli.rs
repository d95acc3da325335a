//! Command-line interface definitions.
//!
//! Kept in the library so `xtask` can generate the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::timeline::window::{
    choice_list, is_speed_choice, is_window_choice, SPEED_CHOICES, WINDOW_CHOICES_MINUTES,
};

/// Replay how a discussion thread grew over time.
#[derive(Debug, Parser)]
#[command(name = "threadreplay", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the replay timeline of a thread and print its frames
    Frames(FramesArgs),

    /// Print a single static snapshot of a thread as a tree
    Tree(TreeArgs),

    /// Step through the replay frames at the autoplay interval
    Play(PlayArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by every command that reads a thread file.
#[derive(Debug, clap::Args)]
pub struct InputArgs {
    /// Thread JSON file (array of {id, by, text, time, depth} in preorder)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Activity window in minutes: 5, 10, 15, 30, 45, 60, 90 or 120
    /// (default: picked from thread size)
    #[arg(short, long, value_name = "MINUTES", value_parser = parse_window)]
    pub window: Option<u32>,

    /// Build even if the thread breaks the preorder contract
    #[arg(long)]
    pub lenient: bool,

    /// Hide the author column
    #[arg(long)]
    pub no_author: bool,
}

#[derive(Debug, clap::Args)]
pub struct FramesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print only this frame (1-based)
    #[arg(short, long, value_name = "N")]
    pub frame: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, clap::Args)]
pub struct TreeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Snapshot time in unix seconds (default: latest arrival)
    #[arg(long, value_name = "UNIX_SECS")]
    pub at: Option<i64>,
}

#[derive(Debug, clap::Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Playback speed multiplier (0.5, 1, 2, 4)
    #[arg(short, long, value_parser = parse_speed)]
    pub speed: Option<f64>,

    /// Start again from the first frame after the last one
    #[arg(long = "loop")]
    pub repeat: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}

/// How `frames` prints the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One text block per frame
    Text,
    /// The whole timeline as JSON
    Json,
}

fn parse_window(value: &str) -> Result<u32, String> {
    let minutes: u32 = value.parse().map_err(|_| format!("invalid number: {}", value))?;
    if is_window_choice(minutes) {
        Ok(minutes)
    } else {
        Err(format!("must be one of {}", choice_list(WINDOW_CHOICES_MINUTES)))
    }
}

fn parse_speed(value: &str) -> Result<f64, String> {
    let speed: f64 = value.parse().map_err(|_| format!("invalid number: {}", value))?;
    if is_speed_choice(speed) {
        Ok(speed)
    } else {
        Err(format!("must be one of {}", choice_list(SPEED_CHOICES)))
    }
}
