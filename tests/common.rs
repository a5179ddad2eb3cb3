// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Synthetic pose frames with chosen joint angles and a local mock backend server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `seneca_coach`
//!
//! Pose frames are built in normalized coordinates with every landmark
//! parked at the frame center, then the joints a test cares about are placed
//! so that a chosen angle comes out of the angle engine.

use std::sync::Once;

use axum::Router;
use seneca_core::constants::landmarks::{
    LANDMARK_COUNT, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST,
    RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};
use seneca_core::models::Landmark;
use tokio::net::TcpListener;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Every landmark at the frame center, fully visible
pub fn neutral_frame() -> Vec<Landmark> {
    vec![Landmark::new(0.5, 0.5); LANDMARK_COUNT]
}

/// Place `c` so the angle at `b` between `a` and `c` is `degrees`
///
/// `a` and `b` must already be positioned.
pub fn bend(frame: &mut [Landmark], a: usize, b: usize, c: usize, degrees: f64) {
    let (pa, pb) = (frame[a], frame[b]);
    let toward_a = (pa.y - pb.y).atan2(pa.x - pb.x);
    let direction = toward_a + degrees.to_radians();
    frame[c] = Landmark::new(
        0.15_f64.mul_add(direction.cos(), pb.x),
        0.15_f64.mul_add(direction.sin(), pb.y),
    );
}

/// Standing figure with the given knee angles
pub fn squat_frame(left_knee: f64, right_knee: f64) -> Vec<Landmark> {
    let mut frame = neutral_frame();
    frame[LEFT_HIP] = Landmark::new(0.45, 0.4);
    frame[LEFT_KNEE] = Landmark::new(0.45, 0.6);
    frame[RIGHT_HIP] = Landmark::new(0.55, 0.4);
    frame[RIGHT_KNEE] = Landmark::new(0.55, 0.6);
    bend(&mut frame, LEFT_HIP, LEFT_KNEE, LEFT_ANKLE, left_knee);
    bend(&mut frame, RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE, right_knee);
    frame
}

/// Push-up figure with the given elbow angles and torso tilt
pub fn push_up_frame(left_elbow: f64, right_elbow: f64, torso_tilt: f64) -> Vec<Landmark> {
    let mut frame = neutral_frame();
    frame[LEFT_SHOULDER] = Landmark::new(0.3, 0.5);
    frame[LEFT_ELBOW] = Landmark::new(0.3, 0.65);
    frame[RIGHT_SHOULDER] = Landmark::new(0.32, 0.5);
    frame[RIGHT_ELBOW] = Landmark::new(0.32, 0.65);
    bend(&mut frame, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, left_elbow);
    bend(&mut frame, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, right_elbow);
    frame[LEFT_HIP] = offset(frame[LEFT_SHOULDER], torso_tilt, 0.3);
    frame
}

/// Plank figure with the given torso and leg tilts
pub fn plank_frame(torso_tilt: f64, leg_tilt: f64) -> Vec<Landmark> {
    let mut frame = neutral_frame();
    frame[LEFT_SHOULDER] = Landmark::new(0.2, 0.5);
    frame[LEFT_HIP] = offset(frame[LEFT_SHOULDER], torso_tilt, 0.3);
    frame[LEFT_ANKLE] = offset(frame[LEFT_HIP], leg_tilt, 0.3);
    frame
}

fn offset(from: Landmark, degrees: f64, length: f64) -> Landmark {
    let radians = degrees.to_radians();
    Landmark::new(
        length.mul_add(radians.cos(), from.x),
        length.mul_add(radians.sin(), from.y),
    )
}

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{address}")
}
