// ABOUTME: Exercise catalogue and per-frame form analysis result types
// ABOUTME: Closed Exercise enum with wire identifiers, FormStatus, and ExerciseAnalysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Exercises the form analyzer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exercise {
    /// Push-ups
    PushUps,
    /// Bodyweight squats
    Squats,
    /// Front plank hold
    Planks,
    /// Forward lunges
    Lunges,
    /// Burpees
    Burpees,
}

impl Exercise {
    /// Every supported exercise
    pub const ALL: [Self; 5] = [
        Self::PushUps,
        Self::Squats,
        Self::Planks,
        Self::Lunges,
        Self::Burpees,
    ];

    /// Identifier used by the UI and in recorded sessions
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::PushUps => "push-ups",
            Self::Squats => "squats",
            Self::Planks => "planks",
            Self::Lunges => "lunges",
            Self::Burpees => "burpees",
        }
    }

    /// Look up an exercise by identifier; unknown identifiers yield `None`
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|exercise| exercise.id() == id)
    }

    /// Whether repetitions of this exercise are counted
    #[must_use]
    pub const fn is_counted(self) -> bool {
        matches!(self, Self::PushUps | Self::Squats | Self::Lunges)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Exercise {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unknown exercise '{s}'. Expected one of: push-ups, squats, planks, lunges, burpees"
            ))
        })
    }
}

/// Discrete form verdict for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    /// Form is good
    Correct,
    /// Form is wrong in a way that risks injury or invalidates the rep
    Incorrect,
    /// User is mid-movement or needs a small correction
    Adjusting,
}

impl FormStatus {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::Adjusting => "adjusting",
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form feedback produced for a single pose update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseAnalysis {
    /// Repetitions completed so far (filled in by the workout session)
    pub reps: u32,
    /// Heuristic form score in `[0, 100]`
    pub accuracy: u8,
    /// Feedback sentence for the user
    pub feedback: String,
    /// Form verdict
    pub status: FormStatus,
}

impl ExerciseAnalysis {
    /// Build an analysis with zero reps
    ///
    /// Accuracy is clamped to 100.
    pub fn new(status: FormStatus, accuracy: u8, feedback: impl Into<String>) -> Self {
        Self {
            reps: 0,
            accuracy: accuracy.min(100),
            feedback: feedback.into(),
            status,
        }
    }

    /// Analysis shown before any pose has been seen
    #[must_use]
    pub fn awaiting_pose() -> Self {
        Self::new(
            FormStatus::Adjusting,
            85,
            "Position yourself in front of the camera to start",
        )
    }

    /// Copy of this analysis carrying a rep count
    #[must_use]
    pub fn with_reps(mut self, reps: u32) -> Self {
        self.reps = reps;
        self
    }
}

impl Default for ExerciseAnalysis {
    fn default() -> Self {
        Self::awaiting_pose()
    }
}
