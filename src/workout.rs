// ABOUTME: Live workout session tying form analysis, rep counting, and the skeleton overlay together
// ABOUTME: Consumes one landmark frame at a time with a caller-supplied session clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! # Workout Session
//!
//! The form analyzer always reports zero repetitions; the session stamps the
//! rep counter's count into every analysis it hands out. Frames without a
//! pose leave the previous report in place.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PoseConfig;
use crate::constants::defaults::{FRAME_HEIGHT, FRAME_WIDTH};
use seneca_core::models::{Exercise, ExerciseAnalysis, Landmark, PoseLandmarks};
use seneca_intelligence::{FormAnalyzer, RepCounter, RepCounterState, SkeletonOverlay};

/// Everything the overlay shows for one frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameReport {
    /// Form analysis with the current repetition count
    pub analysis: ExerciseAnalysis,
    /// Completed repetitions
    pub count: u32,
    /// Pixel-space skeleton of the frame
    pub overlay: SkeletonOverlay,
}

/// One exercise being performed in front of the camera
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    counter: RepCounter,
    frame_width: u32,
    frame_height: u32,
    report: FrameReport,
}

impl WorkoutSession {
    /// Session for `exercise` starting at `started_at` on the session clock
    #[must_use]
    pub fn new(exercise: Exercise, started_at: Duration, min_hold: Duration) -> Self {
        Self {
            counter: RepCounter::with_min_hold(exercise, started_at, min_hold),
            frame_width: FRAME_WIDTH,
            frame_height: FRAME_HEIGHT,
            report: FrameReport::default(),
        }
    }

    /// Session using the configured hold time and frame size
    #[must_use]
    pub fn from_config(exercise: Exercise, started_at: Duration, config: &PoseConfig) -> Self {
        Self::new(exercise, started_at, config.rep_min_hold())
            .with_frame_size(config.frame_width, config.frame_height)
    }

    /// Project overlays onto a `width` x `height` frame
    #[must_use]
    pub const fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self
    }

    /// Process one detector frame observed at `now`
    pub fn process_frame(&mut self, landmarks: &[Landmark], now: Duration) -> &FrameReport {
        let Some(pose) = PoseLandmarks::from_slice(landmarks) else {
            return &self.report;
        };

        let exercise = self.counter.exercise();
        let count = self.counter.update(landmarks, now);
        self.report = FrameReport {
            analysis: FormAnalyzer::analyze(exercise, &pose).with_reps(count),
            count,
            overlay: SkeletonOverlay::from_pose(&pose, self.frame_width, self.frame_height),
        };
        &self.report
    }

    /// Switch to another exercise, starting the count over
    pub fn select_exercise(&mut self, exercise: Exercise) {
        debug!(from = %self.counter.exercise(), to = %exercise, "Exercise selected");
        self.counter.set_exercise(exercise);
        self.report = FrameReport::default();
    }

    /// Start the count over for the current exercise
    pub fn reset(&mut self) {
        self.counter.reset();
        self.report.count = 0;
        self.report.analysis.reps = 0;
    }

    /// Latest analysis, with the current count
    #[must_use]
    pub const fn analysis(&self) -> &ExerciseAnalysis {
        &self.report.analysis
    }

    /// Completed repetitions
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.counter.count()
    }

    /// Exercise being performed
    #[must_use]
    pub const fn exercise(&self) -> Exercise {
        self.counter.exercise()
    }

    /// Latest full report
    #[must_use]
    pub const fn report(&self) -> &FrameReport {
        &self.report
    }

    /// Rep counter snapshot
    #[must_use]
    pub const fn rep_state(&self) -> RepCounterState {
        self.counter.state()
    }
}
