// ABOUTME: Food photo handling: validation, data-URL encoding, and backend analysis
// ABOUTME: Photos become data URLs that the backend vision model analyzes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

/// Backend analysis of a validated photo
pub mod analysis;

/// Photo validation and data-URL encoding
pub mod upload;

pub use analysis::analyze_photo;
pub use upload::{is_image_mime, mime_type_for_path, FoodImage};
