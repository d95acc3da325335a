//! Subcommand handlers.

pub mod config;
pub mod frames;
pub mod play;
pub mod tree;

use anyhow::{bail, Context, Result};

use threadreplay::cli::InputArgs;
use threadreplay::thread::Thread;
use threadreplay::timeline::ReplayOptions;
use threadreplay::view::ViewOptions;
use threadreplay::Config;

/// Load and check the thread named on the command line.
///
/// A thread breaking the preorder contract is refused unless `--lenient`
/// was given, in which case it is only logged.
pub fn load_thread(input: &InputArgs) -> Result<Thread> {
    let thread = Thread::parse(&input.file)?;
    if thread.is_empty() {
        bail!("Thread file contains no items: {:?}", input.file);
    }

    if let Err(err) = thread.validate() {
        if !input.lenient {
            return Err(err).with_context(|| {
                format!(
                    "Invalid thread {:?} (use --lenient to build anyway)",
                    input.file
                )
            });
        }
        tracing::warn!(error = %err, "thread breaks the preorder contract, building anyway");
    }

    tracing::debug!(items = thread.len(), file = ?input.file, "loaded thread");
    Ok(thread)
}

/// Replay options from flags and config.
pub fn replay_options(
    input: &InputArgs,
    config: &Config,
    thread: &Thread,
) -> Result<ReplayOptions> {
    config.replay_options(thread.len(), input.window)
}

/// Text listing options from flags and config.
pub fn view_options(input: &InputArgs, config: &Config, thread: &Thread) -> ViewOptions {
    ViewOptions {
        show_author: config.display.show_author && !input.no_author,
        author_width: thread.longest_author_width(),
    }
}
