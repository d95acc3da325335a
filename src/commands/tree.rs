//! `tree` subcommand: one static snapshot, nothing pruned.

use anyhow::{Context, Result};

use threadreplay::cli::TreeArgs;
use threadreplay::view::{format_timestamp, render_entries, static_entries};
use threadreplay::Config;

use super::{load_thread, replay_options, view_options};

pub fn handle(args: &TreeArgs, config: &Config) -> Result<()> {
    let thread = load_thread(&args.input)?;
    let options = replay_options(&args.input, config, &thread)?;

    let at = match args.at {
        Some(at) => at,
        None => thread.latest_time().context("Thread has no items")?,
    };
    let entries = static_entries(&thread, at, options.window_seconds());

    println!(
        "--- {} of {} items @ {} ---",
        entries.len(),
        thread.len(),
        format_timestamp(at)
    );
    print!(
        "{}",
        render_entries(&entries, &view_options(&args.input, config, &thread))
    );
    Ok(())
}
