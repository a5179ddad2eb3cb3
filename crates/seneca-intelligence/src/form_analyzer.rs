// ABOUTME: Exercise form classifier mapping joint angles to status, feedback, and accuracy
// ABOUTME: Fixed per-exercise thresholds evaluated in order, first matching rule wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! Exercise form analysis
//!
//! Each exercise checks its rules in a fixed order: the too-high (too
//! straight) check, then the too-low (too deep) check, then alignment, and
//! otherwise reports correct form. The order decides which feedback wins when
//! more than one rule would match, so it is part of the contract.
//!
//! `reps` is always 0 here; counting lives in [`crate::rep_counter`].

use seneca_core::models::{Exercise, ExerciseAnalysis, FormStatus, Landmark, PoseLandmarks};

use crate::angles::{elbow_angles, knee_angles, leg_tilt, torso_tilt};

/// Elbow angle above which a push-up is not low enough
const PUSH_UP_TOO_HIGH_DEG: f64 = 160.0;
/// Elbow angle below which a push-up is too deep
const PUSH_UP_TOO_LOW_DEG: f64 = 90.0;
/// Torso tilt beyond which the back is not straight during push-ups
const PUSH_UP_MAX_TORSO_TILT_DEG: f64 = 15.0;

/// Knee angle above which a squat is too shallow
const SQUAT_TOO_HIGH_DEG: f64 = 160.0;
/// Knee angle below which a squat is too deep
const SQUAT_TOO_LOW_DEG: f64 = 70.0;

/// Torso tilt beyond which hips sag or pike in a plank
const PLANK_MAX_TORSO_TILT_DEG: f64 = 10.0;
/// Leg tilt beyond which the body line is broken in a plank
const PLANK_MAX_LEG_TILT_DEG: f64 = 15.0;

/// Front-knee angle above which a lunge is too shallow
const LUNGE_TOO_HIGH_DEG: f64 = 120.0;
/// Front-knee angle below which a lunge is too deep
const LUNGE_TOO_LOW_DEG: f64 = 70.0;

/// Torso tilt under which a burpee is in its plank phase
const BURPEE_PLANK_TILT_DEG: f64 = 15.0;

/// Stateless form classifier
pub struct FormAnalyzer;

impl FormAnalyzer {
    /// Score one detected pose for an exercise
    #[must_use]
    pub fn analyze(exercise: Exercise, pose: &PoseLandmarks<'_>) -> ExerciseAnalysis {
        match exercise {
            Exercise::PushUps => Self::push_ups(pose),
            Exercise::Squats => Self::squats(pose),
            Exercise::Planks => Self::planks(pose),
            Exercise::Lunges => Self::lunges(pose),
            Exercise::Burpees => Self::burpees(pose),
        }
    }

    /// Score a raw landmark sequence; `None` when no pose was detected
    #[must_use]
    pub fn analyze_landmarks(exercise: Exercise, landmarks: &[Landmark]) -> Option<ExerciseAnalysis> {
        PoseLandmarks::from_slice(landmarks).map(|pose| Self::analyze(exercise, &pose))
    }

    /// Score by exercise identifier, keeping `previous` when nothing can be scored
    ///
    /// Unknown identifiers and empty or short landmark sequences are not
    /// errors; the caller's previous analysis is returned unchanged.
    #[must_use]
    pub fn analyze_by_id(
        exercise_id: &str,
        landmarks: &[Landmark],
        previous: &ExerciseAnalysis,
    ) -> ExerciseAnalysis {
        Exercise::from_id(exercise_id)
            .and_then(|exercise| Self::analyze_landmarks(exercise, landmarks))
            .unwrap_or_else(|| previous.clone())
    }

    fn push_ups(pose: &PoseLandmarks<'_>) -> ExerciseAnalysis {
        let elbows = elbow_angles(pose);
        let tilt = torso_tilt(pose);

        if elbows.max() > PUSH_UP_TOO_HIGH_DEG {
            ExerciseAnalysis::new(
                FormStatus::Adjusting,
                70,
                "Lower your chest closer to the ground",
            )
        } else if elbows.min() < PUSH_UP_TOO_LOW_DEG {
            ExerciseAnalysis::new(
                FormStatus::Adjusting,
                75,
                "Don't go too low, maintain control",
            )
        } else if tilt.abs() > PUSH_UP_MAX_TORSO_TILT_DEG {
            ExerciseAnalysis::new(
                FormStatus::Incorrect,
                60,
                "Keep your back straight and body aligned",
            )
        } else {
            ExerciseAnalysis::new(FormStatus::Correct, 95, "Great form! Keep it up!")
        }
    }

    fn squats(pose: &PoseLandmarks<'_>) -> ExerciseAnalysis {
        let knees = knee_angles(pose);

        if knees.max() > SQUAT_TOO_HIGH_DEG {
            ExerciseAnalysis::new(
                FormStatus::Adjusting,
                70,
                "Squat deeper - aim for 90 degrees at the knee",
            )
        } else if knees.min() < SQUAT_TOO_LOW_DEG {
            ExerciseAnalysis::new(
                FormStatus::Adjusting,
                75,
                "Don't squat too deep, maintain control",
            )
        } else {
            ExerciseAnalysis::new(FormStatus::Correct, 90, "Excellent squat form!")
        }
    }

    fn planks(pose: &PoseLandmarks<'_>) -> ExerciseAnalysis {
        if torso_tilt(pose).abs() > PLANK_MAX_TORSO_TILT_DEG {
            ExerciseAnalysis::new(
                FormStatus::Incorrect,
                65,
                "Keep your back straight - don't let your hips sag or pike up",
            )
        } else if leg_tilt(pose).abs() > PLANK_MAX_LEG_TILT_DEG {
            ExerciseAnalysis::new(
                FormStatus::Adjusting,
                80,
                "Align your body from head to heels",
            )
        } else {
            ExerciseAnalysis::new(FormStatus::Correct, 95, "Perfect plank position!")
        }
    }

    fn lunges(pose: &PoseLandmarks<'_>) -> ExerciseAnalysis {
        // The more bent knee is taken as the front leg
        let front_knee = knee_angles(pose).min();

        if front_knee > LUNGE_TOO_HIGH_DEG {
            ExerciseAnalysis::new(
                FormStatus::Adjusting,
                75,
                "Lunge deeper - aim for 90 degrees at the front knee",
            )
        } else if front_knee < LUNGE_TOO_LOW_DEG {
            ExerciseAnalysis::new(
                FormStatus::Adjusting,
                70,
                "Don't lunge too deep, maintain control",
            )
        } else {
            ExerciseAnalysis::new(FormStatus::Correct, 90, "Great lunge form!")
        }
    }

    fn burpees(pose: &PoseLandmarks<'_>) -> ExerciseAnalysis {
        if torso_tilt(pose).abs() < BURPEE_PLANK_TILT_DEG {
            ExerciseAnalysis::new(
                FormStatus::Correct,
                90,
                "Good plank position! Now jump back up!",
            )
        } else {
            ExerciseAnalysis::new(
                FormStatus::Adjusting,
                80,
                "Keep moving through the burpee sequence!",
            )
        }
    }
}
