//! Replay options: activity window, exposure count, playback speed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Window lengths offered to the user, in minutes.
pub const WINDOW_CHOICES_MINUTES: &[u32] = &[5, 10, 15, 30, 45, 60, 90, 120];

/// Playback speed multipliers offered to the user.
pub const SPEED_CHOICES: &[f64] = &[0.5, 1.0, 2.0, 4.0];

/// Minimum number of frames a node stays on screen before it is pruned.
pub const DEFAULT_MIN_EXPOSURE: u32 = 5;

/// Autoplay interval at 1x speed.
pub const BASE_FRAME_INTERVAL: Duration = Duration::from_millis(500);

/// Pick a window length suited to the size of a thread.
///
/// Busy threads get a short window so a frame stays readable.
pub fn default_window_minutes(node_count: usize) -> u32 {
    if node_count >= 450 {
        5
    } else if node_count >= 250 {
        15
    } else {
        30
    }
}

/// Whether `minutes` is one of [`WINDOW_CHOICES_MINUTES`].
pub fn is_window_choice(minutes: u32) -> bool {
    WINDOW_CHOICES_MINUTES.contains(&minutes)
}

/// Whether `speed` is one of [`SPEED_CHOICES`].
pub fn is_speed_choice(speed: f64) -> bool {
    SPEED_CHOICES.contains(&speed)
}

/// Comma-separated list of choices for error messages.
pub fn choice_list<T: std::fmt::Display>(choices: &[T]) -> String {
    choices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Autoplay interval for a speed multiplier.
///
/// Non-positive or non-finite speeds fall back to the 1x interval.
pub fn frame_interval(speed: f64) -> Duration {
    if speed.is_finite() && speed > 0.0 {
        BASE_FRAME_INTERVAL.div_f64(speed)
    } else {
        BASE_FRAME_INTERVAL
    }
}

/// Options for building a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayOptions {
    /// Activity window in minutes.
    pub window_minutes: u32,
    /// Frames a node must be shown before it may disappear.
    pub min_exposure: u32,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            window_minutes: default_window_minutes(0),
            min_exposure: DEFAULT_MIN_EXPOSURE,
        }
    }
}

impl ReplayOptions {
    /// Options with the given window and the default exposure count.
    pub fn with_window(window_minutes: u32) -> Self {
        Self {
            window_minutes,
            ..Self::default()
        }
    }

    /// Options with the window picked from the thread size.
    pub fn for_thread(node_count: usize) -> Self {
        Self::with_window(default_window_minutes(node_count))
    }

    /// Activity window in seconds.
    pub fn window_seconds(&self) -> i64 {
        i64::from(self.window_minutes) * 60
    }

    /// Whether repeated frames can be spread out without overtaking their
    /// neighbours: the exposure count must stay below the window in minutes.
    pub fn is_despread_safe(&self) -> bool {
        self.min_exposure < self.window_minutes
    }

    /// Exposure count actually used by the builder, capped at the window
    /// length in minutes.
    pub fn effective_min_exposure(&self) -> u32 {
        self.min_exposure.min(self.window_minutes)
    }
}
