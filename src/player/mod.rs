//! Replay navigation.
//!
//! The timeline itself is a plain list of frames. This module holds the
//! stepping logic a viewer applies on top of it:
//!
//! - `cursor`: first/prev/next/last, jogging, wrapping autoplay tick
//!
//! The autoplay interval for a speed multiplier comes from
//! [`crate::timeline::frame_interval`].
//!
//! # Usage
//!
//! ```
//! use threadreplay::player::FrameCursor;
//!
//! let mut cursor = FrameCursor::new(3);
//! cursor.last();
//! cursor.tick();
//! assert_eq!(cursor.index(), 0);
//! ```

mod cursor;

pub use cursor::FrameCursor;
