// ABOUTME: Criterion benchmarks for per-frame pose processing
// ABOUTME: Measures joint angles, form classification, and full workout frame handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! Criterion benchmarks for the pose pipeline.
//!
//! Every camera frame runs angle math, form classification, rep counting, and
//! overlay projection, so these paths bound the achievable frame rate.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use std::f64::consts::TAU;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seneca_coach::workout::WorkoutSession;
use seneca_core::constants::landmarks::{
    LANDMARK_COUNT, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE,
};
use seneca_core::models::{Exercise, Landmark, PoseLandmarks};
use seneca_intelligence::{angle_at, FormAnalyzer, SkeletonOverlay};

/// Frames in one simulated squat set (30 fps for 20 seconds)
const SET_FRAMES: usize = 600;

/// Frames per squat cycle (two seconds)
const CYCLE_FRAMES: usize = 60;

/// A standing pose with both knees bent to `knee_degrees`
fn squat_pose(knee_degrees: f64) -> Vec<Landmark> {
    let mut frame = vec![Landmark::new(0.5, 0.5); LANDMARK_COUNT];
    let bend = (180.0 - knee_degrees).to_radians();
    for (hip, knee, ankle, x) in [
        (LEFT_HIP, LEFT_KNEE, LEFT_ANKLE, 0.45),
        (RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE, 0.55),
    ] {
        frame[hip] = Landmark::new(x, 0.4);
        frame[knee] = Landmark::new(x, 0.6);
        frame[ankle] = Landmark::new(
            0.2_f64.mul_add(bend.sin(), x),
            0.2_f64.mul_add(bend.cos(), 0.6),
        );
    }
    frame
}

/// A squat set sweeping the knees between 170 and 80 degrees
#[allow(clippy::cast_precision_loss)]
fn squat_set(frames: usize) -> Vec<Vec<Landmark>> {
    (0..frames)
        .map(|i| {
            let phase = (i % CYCLE_FRAMES) as f64 / CYCLE_FRAMES as f64;
            let depth = (phase * TAU).cos().mul_add(-0.5, 0.5);
            squat_pose(depth.mul_add(-90.0, 170.0))
        })
        .collect()
}

fn bench_angle_math(c: &mut Criterion) {
    let frame = squat_pose(95.0);
    c.bench_function("angle_at", |b| {
        b.iter(|| {
            angle_at(
                black_box(frame[LEFT_HIP]),
                black_box(frame[LEFT_KNEE]),
                black_box(frame[LEFT_ANKLE]),
            )
        });
    });
}

fn bench_form_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_analysis");
    let frame = squat_pose(95.0);
    let Some(pose) = PoseLandmarks::from_slice(&frame) else {
        return;
    };

    for exercise in Exercise::ALL {
        group.bench_with_input(
            BenchmarkId::new("analyze", exercise.id()),
            &exercise,
            |b, &exercise| b.iter(|| FormAnalyzer::analyze(exercise, black_box(&pose))),
        );
    }
    group.finish();
}

fn bench_skeleton_projection(c: &mut Criterion) {
    let frame = squat_pose(120.0);
    c.bench_function("skeleton_project_1280x720", |b| {
        b.iter(|| SkeletonOverlay::project(black_box(&frame), 1_280, 720));
    });
}

#[allow(clippy::cast_possible_truncation)]
fn bench_workout_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("workout_session");
    let frames = squat_set(SET_FRAMES);
    group.throughput(Throughput::Elements(SET_FRAMES as u64));

    group.bench_function(BenchmarkId::new("squat_set", SET_FRAMES), |b| {
        b.iter(|| {
            let mut session =
                WorkoutSession::new(Exercise::Squats, Duration::ZERO, Duration::from_millis(500));
            for (i, frame) in frames.iter().enumerate() {
                let now = Duration::from_millis(i as u64 * 33);
                session.process_frame(black_box(frame), now);
            }
            session.count()
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_angle_math,
    bench_form_analysis,
    bench_skeleton_projection,
    bench_workout_frames,
);
criterion_main!(benches);
