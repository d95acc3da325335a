//! Plain-text listing of frames.
//!
//! One line per entry:
//!
//! ```text
//! [   16m]  alice Show: a thing
//! [    2m]* bob   |\-nice
//! [    0m]* carol  \-welcome
//! ```
//!
//! The bracket holds the age, `*` flags entries inside the activity window,
//! then come the optional author column, the tree-art prefix and the text.

use chrono::DateTime;
use unicode_width::UnicodeWidthStr;

use crate::thread::Thread;
use crate::timeline::{calculate_indents, Frame, FrameEntry};

/// Width of an age label under ten hours, e.g. `"9h 59m"`.
const AGE_WIDTH: usize = 6;

/// Options for the text listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Show the author column.
    pub show_author: bool,
    /// Width of the author column (display columns).
    pub author_width: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_author: true,
            author_width: 0,
        }
    }
}

/// Render a frame: a header line, then its entries.
///
/// `position` is the cursor label, e.g. `"3 / 40"`.
pub fn render_frame(frame: &Frame, position: &str, options: &ViewOptions) -> String {
    let mut out = format!(
        "--- frame {} @ {} ---\n",
        position,
        format_timestamp(frame.time)
    );
    out.push_str(&render_entries(&frame.entries, options));
    out
}

/// Unix seconds as `YYYY-MM-DD HH:MM UTC`; out-of-range values are printed
/// as plain seconds.
pub fn format_timestamp(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => secs.to_string(),
    }
}

/// Render entries as text, one line each, newline-terminated.
pub fn render_entries(entries: &[FrameEntry], options: &ViewOptions) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&render_line(entry, options));
        out.push('\n');
    }
    out
}

fn render_line(entry: &FrameEntry, options: &ViewOptions) -> String {
    let marker = if entry.active { '*' } else { ' ' };
    let mut line = format!("[{:>width$}]{} ", entry.age, marker, width = AGE_WIDTH);

    if options.show_author {
        line.push_str(&entry.author);
        let pad = options.author_width.saturating_sub(entry.author.width());
        line.push_str(&" ".repeat(pad + 1));
    }

    line.push_str(&entry.indent);
    if let Some(text) = &entry.text {
        line.push_str(&single_line(text));
    }

    line.trim_end().to_string()
}

/// Collapse all whitespace runs, newlines included, into single spaces.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Unpruned view of the whole thread as of `at`.
///
/// Every item that has arrived by `at` is listed with its age relative to
/// `at`; activity is judged against `window_secs`. Used for the static tree
/// view, where nothing is hidden.
pub fn static_entries(thread: &Thread, at: i64, window_secs: i64) -> Vec<FrameEntry> {
    let mut entries: Vec<FrameEntry> = thread
        .nodes
        .iter()
        .filter(|node| node.time <= at)
        .map(|node| FrameEntry::at(node, at, window_secs))
        .collect();

    let indents = calculate_indents(&entries);
    for (entry, indent) in entries.iter_mut().zip(indents) {
        entry.indent = indent;
    }
    entries
}
