//! Backward-scan pruning of a preorder snapshot.
//!
//! Both the candidate snapshots and the final frames are pruned the same
//! way: walk the entries from the last to the first and decide, from the
//! entry itself and from what was kept just below it, whether it stays.
//! Because a node's descendants directly follow it in preorder, the
//! previously kept entry having a greater depth means that entry hangs
//! somewhere under this node, so keeping the node keeps the path to it.

/// Which rule set a scan applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneRule {
    /// Candidate snapshots: an entry is either kept or dropped.
    Snapshot,
    /// Final frames: stale ancestors of recent activity become placeholders,
    /// root-level entries are never dropped.
    Frame,
}

/// Outcome for a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Shown as-is.
    Keep,
    /// Shown without its text.
    Placeholder,
    /// Removed from this snapshot.
    Drop,
}

impl Verdict {
    /// Whether the entry stays in the snapshot.
    pub fn is_kept(self) -> bool {
        !matches!(self, Verdict::Drop)
    }
}

/// Running state of one backward scan.
///
/// Create one per snapshot and feed it entries from the highest index down
/// to index 0.
#[derive(Debug, Clone)]
pub struct PruneScan {
    rule: PruneRule,
    prev_depth: u32,
    prev_active: bool,
    active_tree: bool,
}

impl PruneScan {
    /// Start a scan with the given rules.
    pub fn new(rule: PruneRule) -> Self {
        Self {
            rule,
            prev_depth: 0,
            prev_active: false,
            active_tree: false,
        }
    }

    /// Decide the next entry (scanning backwards) and update the state.
    pub fn step(&mut self, depth: u32, active: bool) -> Verdict {
        let below = self.prev_depth > depth;

        let verdict = match self.rule {
            PruneRule::Snapshot => {
                if active || (below && self.active_tree) {
                    Verdict::Keep
                } else {
                    Verdict::Drop
                }
            }
            PruneRule::Frame => {
                if active || depth == 0 || (below && self.prev_active) {
                    Verdict::Keep
                } else if below && self.active_tree {
                    Verdict::Placeholder
                } else {
                    Verdict::Drop
                }
            }
        };

        if verdict.is_kept() {
            self.active_tree |= active;
            self.prev_active = active;
            self.prev_depth = depth;
        }

        verdict
    }
}
