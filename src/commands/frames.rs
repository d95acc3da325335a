//! `frames` subcommand: print the replay timeline.

use anyhow::{bail, Result};

use threadreplay::cli::{FramesArgs, OutputFormat};
use threadreplay::player::FrameCursor;
use threadreplay::timeline::build_timeline;
use threadreplay::view::render_frame;
use threadreplay::Config;

use super::{load_thread, replay_options, view_options};

pub fn handle(args: &FramesArgs, config: &Config) -> Result<()> {
    let thread = load_thread(&args.input)?;
    let options = replay_options(&args.input, config, &thread)?;
    let timeline = build_timeline(&thread.nodes, &options);

    let mut cursor = FrameCursor::new(timeline.len());
    if let Some(number) = args.frame {
        if number == 0 || number > timeline.len() {
            bail!(
                "Frame {} out of range (timeline has {} frames)",
                number,
                timeline.len()
            );
        }
        cursor.seek(number - 1);
    }

    match args.format {
        OutputFormat::Json => {
            let json = match args.frame {
                Some(_) => serde_json::to_string_pretty(&timeline.frames[cursor.index()])?,
                None => serde_json::to_string_pretty(&timeline)?,
            };
            println!("{}", json);
        }
        OutputFormat::Text => {
            let view = view_options(&args.input, config, &thread);
            loop {
                let frame = &timeline.frames[cursor.index()];
                print!("{}", render_frame(frame, &cursor.position(), &view));
                if args.frame.is_some() || cursor.is_at_end() {
                    break;
                }
                cursor.next();
            }
        }
    }

    Ok(())
}
