// ABOUTME: Projects normalized pose landmarks into pixel space for skeleton overlays
// ABOUTME: Joints plus the detector's fixed bone connections, ready for any renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use seneca_core::constants::landmarks::POSE_CONNECTIONS;
use seneca_core::models::{Landmark, PoseLandmarks};
use serde::{Deserialize, Serialize};

/// One landmark in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayJoint {
    /// Detector index
    pub index: usize,
    /// Horizontal pixel position
    pub x: f64,
    /// Vertical pixel position
    pub y: f64,
    /// Detector confidence, passed through
    pub visibility: f64,
}

impl OverlayJoint {
    fn project(index: usize, landmark: Landmark, width: f64, height: f64) -> Self {
        Self {
            index,
            x: landmark.x * width,
            y: landmark.y * height,
            visibility: landmark.visibility,
        }
    }
}

/// A bone between two joints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlaySegment {
    /// Start joint
    pub from: OverlayJoint,
    /// End joint
    pub to: OverlayJoint,
}

impl OverlaySegment {
    /// Lower of the two endpoint confidences
    #[must_use]
    pub fn visibility(&self) -> f64 {
        self.from.visibility.min(self.to.visibility)
    }
}

/// Pixel-space skeleton for a single frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkeletonOverlay {
    /// Every landmark in detector order
    pub joints: Vec<OverlayJoint>,
    /// Bones from the detector's connection table
    pub segments: Vec<OverlaySegment>,
}

impl SkeletonOverlay {
    /// Project a landmark frame onto a `width` x `height` image
    ///
    /// Returns `None` when the frame holds no pose.
    #[must_use]
    pub fn project(landmarks: &[Landmark], width: u32, height: u32) -> Option<Self> {
        let pose = PoseLandmarks::from_slice(landmarks)?;
        Some(Self::from_pose(&pose, width, height))
    }

    /// Project an already validated pose
    #[must_use]
    pub fn from_pose(pose: &PoseLandmarks<'_>, width: u32, height: u32) -> Self {
        let (width, height) = (f64::from(width), f64::from(height));
        let joints: Vec<OverlayJoint> = pose
            .points()
            .iter()
            .enumerate()
            .map(|(index, landmark)| OverlayJoint::project(index, *landmark, width, height))
            .collect();

        let segments = POSE_CONNECTIONS
            .iter()
            .filter_map(|&(from, to)| {
                Some(OverlaySegment {
                    from: *joints.get(from)?,
                    to: *joints.get(to)?,
                })
            })
            .collect();

        Self { joints, segments }
    }

    /// Segments whose endpoints are both at least `min_visibility` confident
    pub fn visible_segments(&self, min_visibility: f64) -> impl Iterator<Item = &OverlaySegment> {
        self.segments
            .iter()
            .filter(move |segment| segment.visibility() >= min_visibility)
    }
}
