// ABOUTME: Integration tests for the exercise form classifier
// ABOUTME: Rule order per exercise, feedback text and accuracy, and the keep-previous fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use seneca_core::models::{Exercise, ExerciseAnalysis, FormStatus, Landmark};
use seneca_intelligence::FormAnalyzer;

fn analyze(exercise: Exercise, frame: &[Landmark]) -> ExerciseAnalysis {
    FormAnalyzer::analyze_landmarks(exercise, frame).unwrap()
}

fn assert_analysis(analysis: &ExerciseAnalysis, status: FormStatus, accuracy: u8, feedback: &str) {
    assert_eq!(analysis.status, status, "feedback was: {}", analysis.feedback);
    assert_eq!(analysis.accuracy, accuracy);
    assert_eq!(analysis.feedback, feedback);
    assert_eq!(analysis.reps, 0);
}

#[test]
fn test_initial_analysis_before_any_pose() {
    let initial = ExerciseAnalysis::default();
    assert_analysis(
        &initial,
        FormStatus::Adjusting,
        85,
        "Position yourself in front of the camera to start",
    );
}

#[test]
fn test_push_up_rules_in_order() {
    // Arms straight wins over a bad back
    let high = analyze(Exercise::PushUps, &common::push_up_frame(170.0, 100.0, 30.0));
    assert_analysis(&high, FormStatus::Adjusting, 70, "Lower your chest closer to the ground");

    let low = analyze(Exercise::PushUps, &common::push_up_frame(120.0, 80.0, 30.0));
    assert_analysis(&low, FormStatus::Adjusting, 75, "Don't go too low, maintain control");

    let sagging = analyze(Exercise::PushUps, &common::push_up_frame(110.0, 110.0, 20.0));
    assert_analysis(
        &sagging,
        FormStatus::Incorrect,
        60,
        "Keep your back straight and body aligned",
    );

    let good = analyze(Exercise::PushUps, &common::push_up_frame(110.0, 110.0, 5.0));
    assert_analysis(&good, FormStatus::Correct, 95, "Great form! Keep it up!");
}

#[test]
fn test_squat_rules_in_order() {
    let shallow = analyze(Exercise::Squats, &common::squat_frame(100.0, 170.0));
    assert_analysis(
        &shallow,
        FormStatus::Adjusting,
        70,
        "Squat deeper - aim for 90 degrees at the knee",
    );

    let deep = analyze(Exercise::Squats, &common::squat_frame(65.0, 65.0));
    assert_analysis(&deep, FormStatus::Adjusting, 75, "Don't squat too deep, maintain control");

    let good = analyze(Exercise::Squats, &common::squat_frame(100.0, 100.0));
    assert_analysis(&good, FormStatus::Correct, 90, "Excellent squat form!");
}

#[test]
fn test_plank_rules_in_order() {
    let hips = analyze(Exercise::Planks, &common::plank_frame(12.0, 30.0));
    assert_analysis(
        &hips,
        FormStatus::Incorrect,
        65,
        "Keep your back straight - don't let your hips sag or pike up",
    );

    let legs = analyze(Exercise::Planks, &common::plank_frame(-5.0, 20.0));
    assert_analysis(&legs, FormStatus::Adjusting, 80, "Align your body from head to heels");

    let good = analyze(Exercise::Planks, &common::plank_frame(3.0, 8.0));
    assert_analysis(&good, FormStatus::Correct, 95, "Perfect plank position!");
}

#[test]
fn test_lunges_use_the_more_bent_knee() {
    let shallow = analyze(Exercise::Lunges, &common::squat_frame(130.0, 175.0));
    assert_analysis(
        &shallow,
        FormStatus::Adjusting,
        75,
        "Lunge deeper - aim for 90 degrees at the front knee",
    );

    let deep = analyze(Exercise::Lunges, &common::squat_frame(175.0, 60.0));
    assert_analysis(&deep, FormStatus::Adjusting, 70, "Don't lunge too deep, maintain control");

    let good = analyze(Exercise::Lunges, &common::squat_frame(170.0, 95.0));
    assert_analysis(&good, FormStatus::Correct, 90, "Great lunge form!");
}

#[test]
fn test_burpee_phases() {
    let plank = analyze(Exercise::Burpees, &common::plank_frame(10.0, 0.0));
    assert_analysis(&plank, FormStatus::Correct, 90, "Good plank position! Now jump back up!");

    let standing = analyze(Exercise::Burpees, &common::plank_frame(85.0, 90.0));
    assert_analysis(
        &standing,
        FormStatus::Adjusting,
        80,
        "Keep moving through the burpee sequence!",
    );
}

#[test]
fn test_accuracy_and_status_stay_in_range_for_any_pose() {
    let angles = [0.0, 45.0, 69.0, 85.0, 119.0, 150.0, 161.0, 180.0];
    for exercise in Exercise::ALL {
        for &left in &angles {
            for &right in &angles {
                for frame in [
                    common::squat_frame(left, right),
                    common::push_up_frame(left, right, left - right),
                    common::plank_frame(left - 90.0, right - 90.0),
                ] {
                    let analysis = analyze(exercise, &frame);
                    assert!(analysis.accuracy <= 100);
                    assert!(matches!(
                        analysis.status,
                        FormStatus::Correct | FormStatus::Incorrect | FormStatus::Adjusting
                    ));
                }
            }
        }
    }
}

#[test]
fn test_missing_pose_keeps_previous_analysis() {
    let previous = ExerciseAnalysis::new(FormStatus::Correct, 90, "Excellent squat form!");
    assert!(FormAnalyzer::analyze_landmarks(Exercise::Squats, &[]).is_none());
    assert_eq!(FormAnalyzer::analyze_by_id("squats", &[], &previous), previous);

    let short = vec![Landmark::new(0.5, 0.5); 20];
    assert_eq!(FormAnalyzer::analyze_by_id("squats", &short, &previous), previous);
}

#[test]
fn test_unknown_exercise_keeps_previous_analysis() {
    let previous = ExerciseAnalysis::default();
    let frame = common::squat_frame(65.0, 65.0);
    assert_eq!(FormAnalyzer::analyze_by_id("jumping-jacks", &frame, &previous), previous);

    let known = FormAnalyzer::analyze_by_id("squats", &frame, &previous);
    assert_eq!(known.feedback, "Don't squat too deep, maintain control");
}

#[test]
fn test_exercise_identifiers() {
    for exercise in Exercise::ALL {
        assert_eq!(Exercise::from_id(exercise.id()), Some(exercise));
        assert_eq!(exercise.to_string(), exercise.id());
    }
    assert!("yoga".parse::<Exercise>().is_err());
    assert_eq!("push-ups".parse::<Exercise>().unwrap(), Exercise::PushUps);
}
