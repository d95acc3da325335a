//! Timeline construction.
//!
//! # Pipeline
//!
//! ```text
//! nodes ──► minute-rounded copy ──► candidate times ──► pruned snapshots
//!                                                            │
//!            frames ◄── despread ◄── repeated times ◄────────┘
//! ```
//!
//! Candidate times are every arrival and every window expiry. At each one
//! the thread is pruned down to what is still active (plus the ancestors
//! that connect it to the root). A node leaving the view too early gets its
//! last snapshot repeated until it has been on screen for the minimum
//! number of frames. The repeated times are then spread apart and every
//! frame is materialized from scratch at its final time.

use tracing::{debug, warn};

use crate::thread::{Node, TIME_LIMIT};
use crate::timeline::despread::despread;
use crate::timeline::frame::{Frame, FrameEntry, Timeline};
use crate::timeline::indent::calculate_indents;
use crate::timeline::prune::{PruneRule, PruneScan, Verdict};
use crate::timeline::window::ReplayOptions;

/// Extra frame after the last candidate so the final expiry is visible.
const TRAILING_FRAME_SECS: i64 = 60;

/// Nodes of the thread still shown at one candidate time.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    time: i64,
    /// Node positions in preorder.
    members: Vec<usize>,
}

/// Build the replay timeline of a thread.
///
/// `nodes` must be in preorder with the story at index 0. The input is not
/// modified. Malformed input yields a degraded timeline, never a panic or
/// an endless loop. Arrival times beyond [`TIME_LIMIT`] from the epoch are
/// clamped, and the exposure count is capped at the window length.
pub fn build_timeline(nodes: &[Node], options: &ReplayOptions) -> Timeline {
    let window_secs = options.window_seconds();
    let mut timeline = Timeline {
        window_minutes: options.window_minutes,
        frames: Vec::new(),
    };

    let nodes: Vec<Node> = nodes
        .iter()
        .map(|node| Node {
            time: ceil_to_minute(node.time.clamp(-TIME_LIMIT, TIME_LIMIT)),
            ..node.clone()
        })
        .collect();

    match nodes.as_slice() {
        [] => return timeline,
        [root] => {
            timeline.frames.push(Frame {
                time: root.time,
                entries: vec![FrameEntry::at(root, root.time, window_secs)],
            });
            return timeline;
        }
        _ => {}
    }

    let min_exposure = options.effective_min_exposure();
    if min_exposure != options.min_exposure {
        warn!(
            window_minutes = options.window_minutes,
            min_exposure = options.min_exposure,
            "exposure count exceeds the window length, capping it at the window"
        );
    } else if !options.is_despread_safe() {
        debug!(
            window_minutes = options.window_minutes,
            min_exposure,
            "exposure count is not below the window length"
        );
    }

    let candidates = candidate_times(&nodes, window_secs);
    let (snapshots, last_shown) = prune_snapshots(&nodes, &candidates, window_secs);
    let repeated = repeat_short_lived(&snapshots, &last_shown, nodes.len(), min_exposure);
    let times = despread(&repeated);

    timeline.frames = times
        .iter()
        .map(|&time| materialize(&nodes, time, window_secs))
        .collect();

    debug!(
        nodes = nodes.len(),
        candidates = candidates.len(),
        repeats = repeated.len() - candidates.len(),
        frames = timeline.frames.len(),
        window_minutes = options.window_minutes,
        "built timeline"
    );

    timeline
}

/// Round a unix time up to the next whole minute.
pub fn ceil_to_minute(time: i64) -> i64 {
    time.saturating_add(59).div_euclid(60) * 60
}

/// Every arrival, every window expiry except the story's, then one trailing
/// minute. Sorted, no duplicates.
fn candidate_times(nodes: &[Node], window_secs: i64) -> Vec<i64> {
    let mut times: Vec<i64> = nodes
        .iter()
        .map(|node| node.time)
        .chain(
            nodes
                .iter()
                .skip(1)
                .map(|node| node.time.saturating_add(window_secs)),
        )
        .collect();
    times.sort_unstable();
    times.dedup();

    if let Some(&last) = times.last() {
        times.push(last.saturating_add(TRAILING_FRAME_SECS));
    }
    times
}

/// Prune the thread at every candidate time.
///
/// Also returns, per node position, the candidate time of the last snapshot
/// showing the node before it was first pruned.
fn prune_snapshots(
    nodes: &[Node],
    candidates: &[i64],
    window_secs: i64,
) -> (Vec<Snapshot>, Vec<Option<i64>>) {
    let mut last_shown: Vec<Option<i64>> = vec![None; nodes.len()];
    let mut snapshots = Vec::with_capacity(candidates.len());

    for (i, &time) in candidates.iter().enumerate() {
        let present: Vec<usize> = (0..nodes.len())
            .filter(|&idx| nodes[idx].time <= time)
            .collect();

        let mut scan = PruneScan::new(PruneRule::Snapshot);
        let mut members = Vec::with_capacity(present.len());

        for (pos, &idx) in present.iter().enumerate().rev() {
            let node = &nodes[idx];
            let active = pos == 0 || time - node.time <= window_secs;

            if scan.step(node.depth, active).is_kept() {
                members.push(idx);
            } else if let Some(prev) = i.checked_sub(1) {
                last_shown[idx].get_or_insert(candidates[prev]);
            }
        }

        members.reverse();
        snapshots.push(Snapshot { time, members });
    }

    (snapshots, last_shown)
}

/// Emit one time per snapshot, repeating a snapshot while a node whose last
/// snapshot it is has been shown fewer than `min_exposure` times.
///
/// The first member of a snapshot is the story and is not counted.
fn repeat_short_lived(
    snapshots: &[Snapshot],
    last_shown: &[Option<i64>],
    node_count: usize,
    min_exposure: u32,
) -> Vec<i64> {
    let mut shown = vec![0u32; node_count];
    let mut times = Vec::with_capacity(snapshots.len());

    for snapshot in snapshots {
        loop {
            let mut repeat = false;
            for &idx in snapshot.members.iter().skip(1) {
                shown[idx] += 1;
                if last_shown[idx] == Some(snapshot.time) && shown[idx] < min_exposure {
                    repeat = true;
                }
            }

            times.push(snapshot.time);
            if !repeat {
                break;
            }
        }
    }

    times
}

/// Build the frame shown at `time`: prune the full thread again under the
/// frame rules, then indent what is left.
fn materialize(nodes: &[Node], time: i64, window_secs: i64) -> Frame {
    let entries: Vec<FrameEntry> = nodes
        .iter()
        .filter(|node| node.time <= time)
        .map(|node| FrameEntry::at(node, time, window_secs))
        .collect();

    let mut scan = PruneScan::new(PruneRule::Frame);
    let mut kept = Vec::with_capacity(entries.len());

    for mut entry in entries.into_iter().rev() {
        match scan.step(entry.depth, entry.active) {
            Verdict::Keep => kept.push(entry),
            Verdict::Placeholder => {
                entry.text = None;
                kept.push(entry);
            }
            Verdict::Drop => {}
        }
    }
    kept.reverse();

    let indents = calculate_indents(&kept);
    for (entry, indent) in kept.iter_mut().zip(indents) {
        entry.indent = indent;
    }

    Frame {
        time,
        entries: kept,
    }
}
