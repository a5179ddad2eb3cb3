// ABOUTME: Landmark index contract of the external 33-point pose detector
// ABOUTME: Named indices and the bone connections used to draw a skeleton overlay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

/// Number of landmarks in one detected pose
pub const LANDMARK_COUNT: usize = 33;

/// Nose
pub const NOSE: usize = 0;
/// Left eye (inner)
pub const LEFT_EYE_INNER: usize = 1;
/// Left eye
pub const LEFT_EYE: usize = 2;
/// Left eye (outer)
pub const LEFT_EYE_OUTER: usize = 3;
/// Right eye (inner)
pub const RIGHT_EYE_INNER: usize = 4;
/// Right eye
pub const RIGHT_EYE: usize = 5;
/// Right eye (outer)
pub const RIGHT_EYE_OUTER: usize = 6;
/// Left ear
pub const LEFT_EAR: usize = 7;
/// Right ear
pub const RIGHT_EAR: usize = 8;
/// Left corner of the mouth
pub const MOUTH_LEFT: usize = 9;
/// Right corner of the mouth
pub const MOUTH_RIGHT: usize = 10;
/// Left shoulder
pub const LEFT_SHOULDER: usize = 11;
/// Right shoulder
pub const RIGHT_SHOULDER: usize = 12;
/// Left elbow
pub const LEFT_ELBOW: usize = 13;
/// Right elbow
pub const RIGHT_ELBOW: usize = 14;
/// Left wrist
pub const LEFT_WRIST: usize = 15;
/// Right wrist
pub const RIGHT_WRIST: usize = 16;
/// Left pinky knuckle
pub const LEFT_PINKY: usize = 17;
/// Right pinky knuckle
pub const RIGHT_PINKY: usize = 18;
/// Left index knuckle
pub const LEFT_INDEX: usize = 19;
/// Right index knuckle
pub const RIGHT_INDEX: usize = 20;
/// Left thumb
pub const LEFT_THUMB: usize = 21;
/// Right thumb
pub const RIGHT_THUMB: usize = 22;
/// Left hip
pub const LEFT_HIP: usize = 23;
/// Right hip
pub const RIGHT_HIP: usize = 24;
/// Left knee
pub const LEFT_KNEE: usize = 25;
/// Right knee
pub const RIGHT_KNEE: usize = 26;
/// Left ankle
pub const LEFT_ANKLE: usize = 27;
/// Right ankle
pub const RIGHT_ANKLE: usize = 28;
/// Left heel
pub const LEFT_HEEL: usize = 29;
/// Right heel
pub const RIGHT_HEEL: usize = 30;
/// Left foot index
pub const LEFT_FOOT_INDEX: usize = 31;
/// Right foot index
pub const RIGHT_FOOT_INDEX: usize = 32;

/// Bone connections drawn by the skeleton overlay (start, end)
pub const POSE_CONNECTIONS: [(usize, usize); 35] = [
    // face
    (NOSE, LEFT_EYE_INNER),
    (LEFT_EYE_INNER, LEFT_EYE),
    (LEFT_EYE, LEFT_EYE_OUTER),
    (LEFT_EYE_OUTER, LEFT_EAR),
    (NOSE, RIGHT_EYE_INNER),
    (RIGHT_EYE_INNER, RIGHT_EYE),
    (RIGHT_EYE, RIGHT_EYE_OUTER),
    (RIGHT_EYE_OUTER, RIGHT_EAR),
    (MOUTH_LEFT, MOUTH_RIGHT),
    // upper body
    (LEFT_SHOULDER, RIGHT_SHOULDER),
    (LEFT_SHOULDER, LEFT_ELBOW),
    (LEFT_ELBOW, LEFT_WRIST),
    (LEFT_WRIST, LEFT_PINKY),
    (LEFT_WRIST, LEFT_INDEX),
    (LEFT_WRIST, LEFT_THUMB),
    (LEFT_PINKY, LEFT_INDEX),
    (RIGHT_SHOULDER, RIGHT_ELBOW),
    (RIGHT_ELBOW, RIGHT_WRIST),
    (RIGHT_WRIST, RIGHT_PINKY),
    (RIGHT_WRIST, RIGHT_INDEX),
    (RIGHT_WRIST, RIGHT_THUMB),
    (RIGHT_PINKY, RIGHT_INDEX),
    // torso
    (LEFT_SHOULDER, LEFT_HIP),
    (RIGHT_SHOULDER, RIGHT_HIP),
    (LEFT_HIP, RIGHT_HIP),
    // lower body
    (LEFT_HIP, LEFT_KNEE),
    (LEFT_KNEE, LEFT_ANKLE),
    (LEFT_ANKLE, LEFT_HEEL),
    (LEFT_HEEL, LEFT_FOOT_INDEX),
    (LEFT_ANKLE, LEFT_FOOT_INDEX),
    (RIGHT_HIP, RIGHT_KNEE),
    (RIGHT_KNEE, RIGHT_ANKLE),
    (RIGHT_ANKLE, RIGHT_HEEL),
    (RIGHT_HEEL, RIGHT_FOOT_INDEX),
    (RIGHT_ANKLE, RIGHT_FOOT_INDEX),
];
