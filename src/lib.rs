//! threadreplay - replay how a discussion thread grew over time.
//!
//! A thread is a flat list of items in preorder, each with a depth and an
//! arrival time. [`timeline::build_timeline`] turns it into an ordered list
//! of frames: at each frame only the recently active part of the tree is
//! shown, every reply stays on screen for a minimum number of frames, and
//! each visible item carries an age label and an ASCII tree prefix.
//!
//! # Modules
//!
//! - [`thread`] - Thread items, JSON loading, preorder validation
//! - [`timeline`] - The replay engine
//! - [`player`] - Cursor for stepping through frames
//! - [`view`] - Plain-text listing of frames
//! - [`config`] - User configuration file
//! - [`cli`] - Command-line definitions

pub mod cli;
pub mod config;
pub mod player;
pub mod thread;
pub mod timeline;
pub mod view;

pub use config::Config;
pub use thread::{Node, Thread, ThreadError};
pub use timeline::{build_timeline, Frame, FrameEntry, ReplayOptions, Timeline};
