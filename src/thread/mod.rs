//! Discussion threads as preorder depth sequences.
//!
//! A thread arrives as a flat JSON array in preorder: every item is followed
//! by its whole subtree before its next sibling, and `depth` says how far
//! below the story it sits. That is the shape served by the upstream tree
//! API:
//!
//! ```json
//! [
//!   {"id": 8863, "by": "dhouston", "text": "My YC app", "time": 1175714200, "depth": 0},
//!   {"id": 8952, "by": "pg", "text": "...", "time": 1175727286, "depth": 1}
//! ]
//! ```
//!
//! No parent pointers are stored. Parents and subtrees are positional: an
//! item's subtree is the run of following items deeper than it.

mod error;

use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::timeline::Indentable;

pub use error::ThreadError;

/// Largest accepted distance of an arrival time from the epoch, in seconds
/// (about 34 000 years).
pub const TIME_LIMIT: i64 = 1 << 40;

/// One item of a discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Stable item id, unique within the thread.
    pub id: u64,
    /// Author name. Empty for deleted items.
    #[serde(rename = "by", default)]
    pub author: String,
    /// Body text (title for the story). Absent for deleted items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Distance from the root; the story is at depth 0.
    pub depth: u32,
    /// Arrival time in unix seconds.
    pub time: i64,
}

impl Node {
    pub fn new(
        id: u64,
        author: impl Into<String>,
        text: impl Into<String>,
        depth: u32,
        time: i64,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            text: Some(text.into()),
            depth,
            time,
        }
    }
}

impl Indentable for Node {
    fn depth(&self) -> u32 {
        self.depth
    }

    fn has_text(&self) -> bool {
        self.text.is_some()
    }
}

/// A whole thread in preorder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thread {
    pub nodes: Vec<Node>,
}

impl Thread {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Parse a thread from a JSON file.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, ThreadError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| ThreadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Parse a thread from a reader.
    ///
    /// A JSON `null` document is an empty thread.
    pub fn parse_reader<R: Read>(reader: R) -> Result<Self, ThreadError> {
        let nodes: Option<Vec<Node>> = serde_json::from_reader(reader)?;
        Ok(Self::new(nodes.unwrap_or_default()))
    }

    /// Parse a thread from a string.
    pub fn parse_str(content: &str) -> Result<Self, ThreadError> {
        Self::parse_reader(content.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check the preorder contract the timeline builder relies on.
    ///
    /// Reports the first violation found.
    pub fn validate(&self) -> Result<(), ThreadError> {
        let Some(first) = self.nodes.first() else {
            return Ok(());
        };
        if first.depth != 0 {
            return Err(ThreadError::RootNotAtDepthZero { depth: first.depth });
        }

        let mut seen = HashSet::with_capacity(self.nodes.len());
        // Arrival time of the nearest open ancestor at each depth.
        let mut ancestors: Vec<i64> = Vec::new();

        for (index, node) in self.nodes.iter().enumerate() {
            if !seen.insert(node.id) {
                return Err(ThreadError::DuplicateId { index, id: node.id });
            }
            if !(-TIME_LIMIT..=TIME_LIMIT).contains(&node.time) {
                return Err(ThreadError::TimeOutOfRange {
                    index,
                    time: node.time,
                });
            }

            let depth = node.depth as usize;
            if depth > ancestors.len() {
                let from = ancestors.len().saturating_sub(1) as u32;
                return Err(ThreadError::DepthJump {
                    index,
                    from,
                    to: node.depth,
                });
            }
            ancestors.truncate(depth);

            if let Some(&parent_time) = ancestors.last() {
                if node.time < parent_time {
                    return Err(ThreadError::ArrivesBeforeParent {
                        index,
                        id: node.id,
                        time: node.time,
                        parent_time,
                    });
                }
            }
            ancestors.push(node.time);
        }

        Ok(())
    }

    /// Display width of the longest author name, for column alignment.
    pub fn longest_author_width(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| node.author.width())
            .max()
            .unwrap_or(0)
    }

    /// Arrival time of the most recent item.
    pub fn latest_time(&self) -> Option<i64> {
        self.nodes.iter().map(|node| node.time).max()
    }
}
