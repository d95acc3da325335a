//! Development tasks for threadreplay.
//!
//! Usage: `cargo run -p xtask -- man [--out-dir DIR]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use threadreplay::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for threadreplay and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(&out_dir),
    }
}

fn generate_man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let command = Cli::command();
    let mut pages = vec![(command.get_name().to_string(), command.clone())];
    for sub in command.get_subcommands() {
        pages.push((format!("threadreplay-{}", sub.get_name()), sub.clone()));
    }

    for (name, page) in pages {
        let mut buffer = Vec::new();
        Man::new(page).render(&mut buffer)?;
        let path = out_dir.join(format!("{}.1", name));
        fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
