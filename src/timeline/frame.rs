//! Frames and timelines produced by the builder.

use serde::Serialize;

use crate::thread::Node;
use crate::timeline::age::format_age;
use crate::timeline::indent::Indentable;

/// One visible item in a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameEntry {
    pub id: u64,
    #[serde(rename = "by")]
    pub author: String,
    /// `None` for deleted items and for placeholders kept only to connect
    /// recent activity to the root.
    pub text: Option<String>,
    pub depth: u32,
    /// Arrival time, rounded up to the minute.
    pub time: i64,
    /// Age label relative to the frame time.
    pub age: String,
    /// Whether the item arrived within the activity window.
    pub active: bool,
    /// Whether the item sits at root level.
    pub root: bool,
    /// Tree-art prefix.
    pub indent: String,
}

impl FrameEntry {
    /// Entry for `node` seen at `at`, before pruning and indentation.
    pub fn at(node: &Node, at: i64, window_secs: i64) -> Self {
        let elapsed = at.saturating_sub(node.time);
        Self {
            id: node.id,
            author: node.author.clone(),
            text: node.text.clone(),
            depth: node.depth,
            time: node.time,
            age: format_age(elapsed.max(0)),
            active: elapsed <= window_secs,
            root: node.depth == 0,
            indent: String::new(),
        }
    }
}

impl Indentable for FrameEntry {
    fn depth(&self) -> u32 {
        self.depth
    }

    fn has_text(&self) -> bool {
        self.text.is_some()
    }
}

/// Visible state of the thread at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Frame time in unix seconds (after despreading).
    pub time: i64,
    pub entries: Vec<FrameEntry>,
}

impl Frame {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids of the visible items, in display order.
    pub fn ids(&self) -> Vec<u64> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn entry(&self, id: u64) -> Option<&FrameEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

/// Ordered frames of a replay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    /// Window the timeline was built with, in minutes.
    pub window_minutes: u32,
    pub frames: Vec<Frame>,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Frame times in order.
    pub fn times(&self) -> Vec<i64> {
        self.frames.iter().map(|frame| frame.time).collect()
    }

    /// Number of frames showing the item with `id`.
    pub fn exposure(&self, id: u64) -> usize {
        self.frames
            .iter()
            .filter(|frame| frame.entry(id).is_some())
            .count()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
