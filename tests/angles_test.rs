// ABOUTME: Integration tests for the landmark angle engine
// ABOUTME: Symmetry, collinear and coincident rays, tilt sign, and bilateral joint angles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use seneca_core::models::{Landmark, PoseLandmarks};
use seneca_intelligence::angles::{elbow_angles, knee_angles, torso_tilt};
use seneca_intelligence::{angle_at, body_tilt};

const TOLERANCE: f64 = 1e-6;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < TOLERANCE
}

#[test]
fn test_angle_is_symmetric_in_outer_points() {
    let points = [
        (Landmark::new(0.1, 0.9), Landmark::new(0.4, 0.4), Landmark::new(0.8, 0.7)),
        (Landmark::new(0.9, 0.1), Landmark::new(0.5, 0.5), Landmark::new(0.2, 0.3)),
        (Landmark::new(0.0, 0.0), Landmark::new(1.0, 1.0), Landmark::new(0.0, 1.0)),
    ];
    for (a, b, c) in points {
        assert!(close(angle_at(a, b, c), angle_at(c, b, a)));
    }
}

#[test]
fn test_collinear_points_make_a_straight_angle() {
    let angle = angle_at(
        Landmark::new(0.2, 0.2),
        Landmark::new(0.5, 0.5),
        Landmark::new(0.8, 0.8),
    );
    assert!(close(angle, 180.0));
}

#[test]
fn test_rays_in_the_same_direction_make_zero() {
    let angle = angle_at(
        Landmark::new(0.6, 0.5),
        Landmark::new(0.5, 0.5),
        Landmark::new(0.9, 0.5),
    );
    assert!(close(angle, 0.0));
}

#[test]
fn test_angle_stays_within_half_turn() {
    for step in 0..72 {
        let radians = f64::from(step * 5).to_radians();
        let c = Landmark::new(0.5 + 0.2 * radians.cos(), 0.5 + 0.2 * radians.sin());
        let angle = angle_at(Landmark::new(0.7, 0.5), Landmark::new(0.5, 0.5), c);
        assert!((0.0..=180.0).contains(&angle), "angle {angle} out of range");
    }
}

#[test]
fn test_depth_is_ignored() {
    let flat = angle_at(
        Landmark::new(0.5, 0.3),
        Landmark::new(0.5, 0.5),
        Landmark::new(0.7, 0.5),
    );
    let deep = angle_at(
        Landmark::new(0.5, 0.3).with_depth(-0.4),
        Landmark::new(0.5, 0.5).with_depth(0.2),
        Landmark::new(0.7, 0.5).with_depth(0.9),
    );
    assert!(close(flat, deep));
    assert!(close(flat, 90.0));
}

#[test]
fn test_tilt_direction_and_range() {
    let origin = Landmark::new(0.5, 0.5);
    assert!(close(body_tilt(origin, Landmark::new(0.8, 0.5)), 0.0));
    assert!(close(body_tilt(origin, Landmark::new(0.5, 0.8)), 90.0));
    assert!(close(body_tilt(origin, Landmark::new(0.5, 0.2)), -90.0));
    assert!(close(body_tilt(origin, Landmark::new(0.2, 0.5)), 180.0));
}

#[test]
fn test_bilateral_angles_from_synthetic_frames() {
    let squat = common::squat_frame(95.0, 140.0);
    let pose = PoseLandmarks::from_slice(&squat).unwrap();
    let knees = knee_angles(&pose);
    assert!((knees.left - 95.0).abs() < 1e-9);
    assert!((knees.right - 140.0).abs() < 1e-9);
    assert!((knees.min() - 95.0).abs() < 1e-9);
    assert!((knees.max() - 140.0).abs() < 1e-9);

    let push_up = common::push_up_frame(100.0, 110.0, 5.0);
    let pose = PoseLandmarks::from_slice(&push_up).unwrap();
    let elbows = elbow_angles(&pose);
    assert!((elbows.left - 100.0).abs() < 1e-9);
    assert!((elbows.right - 110.0).abs() < 1e-9);
    assert!((torso_tilt(&pose) - 5.0).abs() < 1e-9);
}

#[test]
fn test_short_frames_are_not_poses() {
    assert!(PoseLandmarks::from_slice(&[]).is_none());
    let short = vec![Landmark::new(0.5, 0.5); 32];
    assert!(PoseLandmarks::from_slice(&short).is_none());
    assert!(PoseLandmarks::from_slice(&common::neutral_frame()).is_some());
}
