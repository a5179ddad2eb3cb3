// ABOUTME: Pose landmark point and the validated 33-point pose view
// ABOUTME: A short or empty landmark sequence means no pose was detected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use serde::{Deserialize, Serialize};

use crate::constants::landmarks::LANDMARK_COUNT;

/// One detected body point
///
/// `x` and `y` are normalized to the frame (usually in `[0, 1]`), `z` is the
/// detector's optional relative depth, and `visibility` its confidence in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, normalized to frame width
    pub x: f64,
    /// Vertical position, normalized to frame height (grows downward)
    pub y: f64,
    /// Relative depth, when the detector provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Detection confidence
    #[serde(default = "full_visibility")]
    pub visibility: f64,
}

const fn full_visibility() -> f64 {
    1.0
}

impl Landmark {
    /// Fully visible planar landmark
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: 1.0,
        }
    }

    /// Set the detection confidence
    #[must_use]
    pub const fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the relative depth
    #[must_use]
    pub const fn with_depth(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }
}

/// A complete detected pose
///
/// Only constructible from a sequence holding every index of the detector's
/// contract, so analysis code can index any body part without bounds checks
/// failing. Anything shorter is treated as "no pose detected".
#[derive(Debug, Clone, Copy)]
pub struct PoseLandmarks<'a> {
    points: &'a [Landmark],
}

impl<'a> PoseLandmarks<'a> {
    /// Borrow a landmark slice as a pose, or `None` when no pose is present
    #[must_use]
    pub fn from_slice(points: &'a [Landmark]) -> Option<Self> {
        (points.len() >= LANDMARK_COUNT).then_some(Self { points })
    }

    /// Landmark at a detector index (see `constants::landmarks`)
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `LANDMARK_COUNT`.
    #[must_use]
    pub fn get(&self, index: usize) -> Landmark {
        self.points[index]
    }

    /// All landmarks in detector order
    #[must_use]
    pub const fn points(&self) -> &'a [Landmark] {
        self.points
    }
}
