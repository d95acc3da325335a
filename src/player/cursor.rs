//! Frame cursor for stepping through a timeline.
//!
//! Covers the navigation a replay front end offers: first/last, single
//! steps, jogging to an arbitrary frame and the autoplay tick, which wraps
//! around to the first frame after the last one.

/// Position within a timeline of `len` frames.
///
/// The index is always valid for a non-empty timeline and stays 0 for an
/// empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameCursor {
    index: usize,
    len: usize,
}

impl FrameCursor {
    /// Cursor on the first frame.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn is_at_end(&self) -> bool {
        self.index == self.last_index()
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        self.index = self.last_index();
    }

    /// Step back one frame, stopping at the first.
    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Step forward one frame, stopping at the last.
    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.last_index());
    }

    /// Jump to `index`, clamped to the last frame.
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.last_index());
    }

    /// Autoplay step: forward one frame, wrapping to the first.
    pub fn tick(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Adopt a new timeline length, e.g. after rebuilding with another
    /// window. The index is clamped if the timeline got shorter.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(self.last_index());
    }

    /// One-based `"current / total"` label.
    pub fn position(&self) -> String {
        if self.len == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.len)
    }
}
