// ABOUTME: Landmark angle engine computing joint angles and body-segment tilt
// ABOUTME: Pure 2D geometry over normalized detector coordinates, results in degrees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use seneca_core::constants::landmarks::{
    LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE,
    RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};
use seneca_core::models::{Landmark, PoseLandmarks};

/// The same joint angle measured on both sides of the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilateralAngle {
    /// Left side, degrees
    pub left: f64,
    /// Right side, degrees
    pub right: f64,
}

impl BilateralAngle {
    /// Smaller of the two sides (the more bent joint)
    #[must_use]
    pub fn min(self) -> f64 {
        self.left.min(self.right)
    }

    /// Larger of the two sides (the straighter joint)
    #[must_use]
    pub fn max(self) -> f64 {
        self.left.max(self.right)
    }
}

/// Elbow angles (shoulder, elbow, wrist) on both arms
#[must_use]
pub fn elbow_angles(pose: &PoseLandmarks<'_>) -> BilateralAngle {
    BilateralAngle {
        left: angle_at(
            pose.get(LEFT_SHOULDER),
            pose.get(LEFT_ELBOW),
            pose.get(LEFT_WRIST),
        ),
        right: angle_at(
            pose.get(RIGHT_SHOULDER),
            pose.get(RIGHT_ELBOW),
            pose.get(RIGHT_WRIST),
        ),
    }
}

/// Knee angles (hip, knee, ankle) on both legs
#[must_use]
pub fn knee_angles(pose: &PoseLandmarks<'_>) -> BilateralAngle {
    BilateralAngle {
        left: angle_at(pose.get(LEFT_HIP), pose.get(LEFT_KNEE), pose.get(LEFT_ANKLE)),
        right: angle_at(
            pose.get(RIGHT_HIP),
            pose.get(RIGHT_KNEE),
            pose.get(RIGHT_ANKLE),
        ),
    }
}

/// Tilt of the left torso line (shoulder to hip), used as a straight-back proxy
#[must_use]
pub fn torso_tilt(pose: &PoseLandmarks<'_>) -> f64 {
    body_tilt(pose.get(LEFT_SHOULDER), pose.get(LEFT_HIP))
}

/// Tilt of the left leg line (hip to ankle)
#[must_use]
pub fn leg_tilt(pose: &PoseLandmarks<'_>) -> f64 {
    body_tilt(pose.get(LEFT_HIP), pose.get(LEFT_ANKLE))
}

/// Interior angle at `b` between rays `b -> a` and `b -> c`, in `[0, 180]` degrees
///
/// Only the planar coordinates are used. Differences above 180 are reflected
/// as `360 - angle`, so the result is symmetric in `a` and `c`.
#[must_use]
pub fn angle_at(a: Landmark, b: Landmark, c: Landmark) -> f64 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let angle = radians.to_degrees().abs();
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Direction of the segment `p1 -> p2` relative to horizontal, in degrees
///
/// Range is `(-180, 180]`. The sign tells which way the segment leans, with
/// image y growing downward.
#[must_use]
pub fn body_tilt(p1: Landmark, p2: Landmark) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees()
}
