// ABOUTME: Exercise form intelligence crate: joint angles, form scoring, rep counting
// ABOUTME: Pure functions and owned state machines over detector landmarks, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

#![deny(unsafe_code)]

//! # Seneca Intelligence
//!
//! Pose analysis for the exercise-form overlay. Data flows one way:
//! landmarks from the external detector go through the angle engine, then to
//! the form analyzer (status, feedback, accuracy) and, independently, to the
//! rep counter (count).
//!
//! The form analyzer and the rep counter carry separate thresholds on purpose:
//! the counter detects the bottom of a rep at a fixed 120 degrees for every
//! counted exercise, while the analyzer scores form against per-exercise
//! limits. They are not unified.

/// Joint and body-segment angle geometry
pub mod angles;

/// Per-exercise form classification and scoring
pub mod form_analyzer;

/// Debounced down/up repetition counter
pub mod rep_counter;

/// Pixel-space skeleton projection for overlays
pub mod skeleton;

pub use angles::{angle_at, body_tilt};
pub use form_analyzer::FormAnalyzer;
pub use rep_counter::{RepCounter, RepCounterState};
pub use skeleton::{OverlayJoint, OverlaySegment, SkeletonOverlay};
