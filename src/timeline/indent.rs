//! ASCII tree-art prefixes derived from a preorder depth sequence.
//!
//! The renderer never builds a tree. It walks the sequence backwards with a
//! stack of one-character levels: `" "` for a level that only passes
//! through, `"|"` for a level whose branch continues further down. Every
//! non-root line ends in `\` and, when the entry has text, `-`:
//!
//! ```text
//! story
//! \-first
//! | \-reply to first
//! \-second
//! ```

/// Something that can be placed in an indented listing.
pub trait Indentable {
    /// Depth in the tree (0 = root level).
    fn depth(&self) -> u32;
    /// Whether the entry carries text (placeholders do not).
    fn has_text(&self) -> bool;
}

impl Indentable for (u32, bool) {
    fn depth(&self) -> u32 {
        self.0
    }

    fn has_text(&self) -> bool {
        self.1
    }
}

/// Compute one prefix per item, in input order.
///
/// Index 0 always gets `""`. The result depends only on the depth and
/// text-presence of each item.
pub fn calculate_indents<T: Indentable>(items: &[T]) -> Vec<String> {
    let mut indents = vec![String::new(); items.len()];
    let mut stack: Vec<char> = Vec::new();
    let mut last_depth = 0u32;
    let last_index = items.len().saturating_sub(1);

    for i in (1..items.len()).rev() {
        let depth = items[i].depth();
        if depth < last_depth {
            stack.pop();
        } else {
            if i < last_index {
                if let Some(top) = stack.last_mut() {
                    *top = '|';
                }
            }
            for _ in last_depth..depth {
                stack.push(' ');
            }
        }

        let mut indent: String = stack.iter().collect();
        if !indent.is_empty() {
            indent.push('\\');
            if items[i].has_text() {
                indent.push('-');
            }
        }
        indents[i] = indent;

        last_depth = depth;
    }

    indents
}
