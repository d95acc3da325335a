//! Replay timeline engine.
//!
//! Turns a thread in preorder into the ordered frames of a replay. Each
//! frame shows the part of the thread that was active within a sliding
//! window at that instant, plus the ancestors needed to reach it.
//!
//! # Module Structure
//!
//! - [`builder`] - Pipeline from nodes to frames
//! - [`prune`] - Backward-scan keep/placeholder/drop decision
//! - [`despread`] - Separation of duplicate frame times
//! - [`indent`] - Tree-art prefixes from a depth sequence
//! - [`age`] - Compact age labels
//! - [`frame`] - Output types
//! - [`window`] - Replay options and playback constants
//!
//! # Usage
//!
//! ```
//! use threadreplay::thread::Node;
//! use threadreplay::timeline::{build_timeline, ReplayOptions};
//!
//! let nodes = vec![
//!     Node::new(1, "pg", "Ask: what are you working on?", 0, 0),
//!     Node::new(2, "dang", "A replay tool", 1, 30),
//! ];
//! let timeline = build_timeline(&nodes, &ReplayOptions::with_window(30));
//! assert!(timeline.iter().all(|frame| frame.entries[0].id == 1));
//! ```

pub mod age;
pub mod builder;
pub mod despread;
pub mod frame;
pub mod indent;
pub mod prune;
pub mod window;

pub use age::format_age;
pub use builder::build_timeline;
pub use despread::despread;
pub use frame::{Frame, FrameEntry, Timeline};
pub use indent::{calculate_indents, Indentable};
pub use window::{default_window_minutes, frame_interval, ReplayOptions};
