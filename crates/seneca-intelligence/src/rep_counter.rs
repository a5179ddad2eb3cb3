// ABOUTME: Debounced repetition counter driven by per-frame down/up position detection
// ABOUTME: Pure state transitions with an injected clock; a rep is a committed down-to-up change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! Repetition counting
//!
//! The counter has two positions, up and down. A frame whose position differs
//! from the current one only commits when more than `min_hold_time` has passed
//! since the last committed change; anything faster is treated as detector
//! jitter and dropped. Each committed down-to-up change is one rep.
//!
//! Timestamps are offsets on a caller-owned monotonic clock. Nothing here
//! reads the wall clock.

use std::time::Duration;

use seneca_core::constants::defaults::REP_MIN_HOLD_MS;
use seneca_core::models::{Exercise, Landmark, PoseLandmarks};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::angles::{elbow_angles, knee_angles};

/// Joint angle under which a counted exercise is at the bottom of a rep
///
/// Independent of the form analyzer's scoring thresholds.
const DOWN_POSITION_MAX_DEG: f64 = 120.0;

/// Snapshot of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepCounterState {
    /// Completed repetitions
    pub count: u32,
    /// Whether the last committed position was down
    pub is_in_down_position: bool,
    /// Clock reading of the last committed change (or of creation)
    pub last_position_time: Duration,
    /// Minimum time between committed changes
    pub min_hold_time: Duration,
}

impl RepCounterState {
    /// Fresh state in the up position
    #[must_use]
    pub const fn new(started_at: Duration, min_hold_time: Duration) -> Self {
        Self {
            count: 0,
            is_in_down_position: false,
            last_position_time: started_at,
            min_hold_time,
        }
    }

    /// State after observing a position at `now`
    ///
    /// Returns `self` unchanged when the position is the same or the change
    /// came too soon after the previous one.
    #[must_use]
    pub fn advance(self, is_down: bool, now: Duration) -> Self {
        let held_long_enough = now.saturating_sub(self.last_position_time) > self.min_hold_time;
        if is_down == self.is_in_down_position || !held_long_enough {
            return self;
        }

        let completed_rep = self.is_in_down_position && !is_down;
        Self {
            count: if completed_rep {
                self.count.saturating_add(1)
            } else {
                self.count
            },
            is_in_down_position: is_down,
            last_position_time: now,
            ..self
        }
    }

    /// State with the count cleared and the position back to up
    ///
    /// `last_position_time` is kept, so the first change after a reset is
    /// still debounced against the last observed change.
    #[must_use]
    pub const fn reset(self) -> Self {
        Self {
            count: 0,
            is_in_down_position: false,
            ..self
        }
    }
}

/// Repetition counter for one exercise session
#[derive(Debug, Clone)]
pub struct RepCounter {
    exercise: Exercise,
    state: RepCounterState,
}

impl RepCounter {
    /// Counter with the default 500 ms hold time
    #[must_use]
    pub const fn new(exercise: Exercise, started_at: Duration) -> Self {
        Self::with_min_hold(
            exercise,
            started_at,
            Duration::from_millis(REP_MIN_HOLD_MS),
        )
    }

    /// Counter with a custom hold time
    #[must_use]
    pub const fn with_min_hold(
        exercise: Exercise,
        started_at: Duration,
        min_hold_time: Duration,
    ) -> Self {
        Self {
            exercise,
            state: RepCounterState::new(started_at, min_hold_time),
        }
    }

    /// Feed one landmark frame observed at `now` and return the current count
    ///
    /// Frames without a full pose, and exercises that are not counted, leave
    /// the state untouched.
    pub fn update(&mut self, landmarks: &[Landmark], now: Duration) -> u32 {
        let Some(pose) = PoseLandmarks::from_slice(landmarks) else {
            return self.state.count;
        };
        let Some(is_down) = Self::is_down(self.exercise, &pose) else {
            return self.state.count;
        };

        let previous = self.state;
        self.state = previous.advance(is_down, now);
        if self.state.count != previous.count {
            debug!(
                exercise = %self.exercise,
                reps = self.state.count,
                at = ?now,
                "Repetition completed"
            );
        }
        self.state.count
    }

    /// Whether the pose is at the bottom of a rep; `None` for uncounted exercises
    #[must_use]
    pub fn is_down(exercise: Exercise, pose: &PoseLandmarks<'_>) -> Option<bool> {
        match exercise {
            Exercise::PushUps => {
                let elbows = elbow_angles(pose);
                Some(elbows.left < DOWN_POSITION_MAX_DEG && elbows.right < DOWN_POSITION_MAX_DEG)
            }
            // Only the left leg is tracked for squats
            Exercise::Squats => Some(knee_angles(pose).left < DOWN_POSITION_MAX_DEG),
            Exercise::Lunges => Some(knee_angles(pose).min() < DOWN_POSITION_MAX_DEG),
            Exercise::Planks | Exercise::Burpees => None,
        }
    }

    /// Clear the count and return to the up position
    pub fn reset(&mut self) {
        self.state = self.state.reset();
    }

    /// Switch exercise and reset
    pub fn set_exercise(&mut self, exercise: Exercise) {
        self.exercise = exercise;
        self.reset();
    }

    /// Completed repetitions
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.state.count
    }

    /// Exercise being counted
    #[must_use]
    pub const fn exercise(&self) -> Exercise {
        self.exercise
    }

    /// Current snapshot
    #[must_use]
    pub const fn state(&self) -> RepCounterState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_advance_commits_after_hold() {
        let state = RepCounterState::new(ms(0), ms(500))
            .advance(true, ms(600))
            .advance(false, ms(1200));
        assert_eq!(state.count, 1);
        assert!(!state.is_in_down_position);
        assert_eq!(state.last_position_time, ms(1200));
    }

    #[test]
    fn test_exactly_min_hold_is_not_enough() {
        let state = RepCounterState::new(ms(0), ms(500)).advance(true, ms(500));
        assert!(!state.is_in_down_position);
        assert_eq!(state.last_position_time, ms(0));
    }

    #[test]
    fn test_same_position_keeps_timer() {
        let state = RepCounterState::new(ms(0), ms(500)).advance(false, ms(900));
        assert_eq!(state.last_position_time, ms(0));
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let state = RepCounterState::new(ms(1000), ms(500)).advance(true, ms(10));
        assert!(!state.is_in_down_position);
    }
}
