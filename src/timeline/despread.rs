//! Separation of colliding frame timestamps.
//!
//! Repeating a snapshot leaves several frames at the same instant, e.g.
//! `[60, 300, 360, 360, 360, 420]`. Played back as-is the view would look
//! hung on those instants, so the duplicates are pushed back in whole-minute
//! steps until every timestamp is distinct: `[60, 180, 240, 300, 360, 420]`.

/// Step used to shift a colliding timestamp, in seconds.
pub const SPREAD_STEP_SECS: i64 = 60;

/// Return the timestamps sorted and strictly increasing, same length as the
/// input.
///
/// Each pass walks the sorted values from the end. Within a run of equal
/// values the last one keeps its value and the ones before it move down by
/// 60, 120, 180, ... seconds, the nearest getting the smallest shift. The
/// values are re-sorted and the pass repeats until nothing moves.
///
/// A pass leaves the largest colliding value with a single holder and never
/// raises a value, so the loop ends after at most `len` passes.
///
/// The relative order of distinct inputs is kept only while the shifts stay
/// smaller than the gaps between them; the timeline builder relies on its
/// exposure count staying below the window length in minutes for that.
pub fn despread(input: &[i64]) -> Vec<i64> {
    let mut times = input.to_vec();
    times.sort_unstable();

    let mut passes = 0usize;
    loop {
        let mut changed = false;
        let mut last: Option<i64> = None;
        let mut shift = 0i64;

        for i in (0..times.len()).rev() {
            if last == Some(times[i]) {
                shift += SPREAD_STEP_SECS;
                times[i] -= shift;
                changed = true;
            } else {
                shift = 0;
                last = Some(times[i]);
            }
        }

        times.sort_unstable();
        passes += 1;
        if !changed {
            break;
        }
    }

    tracing::trace!(len = times.len(), passes, "despread timestamps");
    times
}
