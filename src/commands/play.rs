//! `play` subcommand: autoplay the replay in the terminal.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;

use threadreplay::cli::PlayArgs;
use threadreplay::player::FrameCursor;
use threadreplay::timeline::{build_timeline, frame_interval};
use threadreplay::view::render_frame;
use threadreplay::Config;

use super::{load_thread, replay_options, view_options};

/// Clear screen and move the cursor home.
const CLEAR: &str = "\x1b[2J\x1b[H";

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs, config: &Config) -> Result<()> {
    let thread = load_thread(&args.input)?;
    let options = replay_options(&args.input, config, &thread)?;
    let timeline = build_timeline(&thread.nodes, &options);
    let view = view_options(&args.input, config, &thread);

    let speed = args.speed.unwrap_or(config.replay.speed);
    let interval = frame_interval(speed);
    tracing::debug!(frames = timeline.len(), ?interval, speed, "starting playback");

    let mut stdout = io::stdout();
    let clear = stdout.is_terminal();
    let mut cursor = FrameCursor::new(timeline.len());

    while let Some(frame) = timeline.get(cursor.index()) {
        if clear {
            write!(stdout, "{}", CLEAR)?;
        }
        write!(stdout, "{}", render_frame(frame, &cursor.position(), &view))?;
        stdout.flush()?;

        if cursor.is_at_end() && !args.repeat {
            break;
        }
        std::thread::sleep(interval);
        cursor.tick();
    }

    Ok(())
}
