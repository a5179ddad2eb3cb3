// ABOUTME: Food photo validation and data-URL encoding for the analyze-food API
// ABOUTME: Rejects non-image types and oversized files before any network call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use std::fs;
use std::io;
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use seneca_core::models::FoodAnalysisRequest;

/// MIME type used when the file extension is not recognized
const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// A validated food photo ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodImage {
    mime_type: String,
    bytes: Vec<u8>,
}

impl FoodImage {
    /// Validate raw image bytes
    ///
    /// The type is checked before the size, so a large non-image reports the
    /// type problem.
    ///
    /// # Errors
    ///
    /// `InvalidInput` with "Please select a valid image file" when the MIME
    /// type is not `image/*`; `ValueOutOfRange` with the size message when
    /// the payload exceeds `max_bytes`.
    pub fn from_bytes(
        bytes: Vec<u8>,
        mime_type: impl Into<String>,
        max_bytes: u64,
    ) -> AppResult<Self> {
        let mime_type = mime_type.into();
        validate(&mime_type, bytes.len() as u64, max_bytes)?;
        Ok(Self { mime_type, bytes })
    }

    /// Read and validate a photo from disk, typing it by extension
    ///
    /// The size limit is checked against file metadata before reading.
    ///
    /// # Errors
    ///
    /// Same validation errors as [`Self::from_bytes`], or `InvalidInput` if
    /// the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>, max_bytes: u64) -> AppResult<Self> {
        let path = path.as_ref();
        let mime_type = mime_type_for_path(path);
        let unreadable = |e: io::Error| {
            AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
        };

        let size = fs::metadata(path).map_err(unreadable)?.len();
        validate(mime_type, size, max_bytes)?;
        let bytes = fs::read(path).map_err(unreadable)?;
        debug!(path = %path.display(), mime_type, size, "Food photo accepted");

        Ok(Self {
            mime_type: mime_type.to_owned(),
            bytes,
        })
    }

    /// MIME type of the photo
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Raw photo bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `data:<mime>;base64,<payload>` form expected by the backend
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }

    /// Request body for `POST /api/analyze-food`
    #[must_use]
    pub fn analysis_request(&self, user_id: &str) -> FoodAnalysisRequest {
        FoodAnalysisRequest {
            image_data: self.to_data_url(),
            user_id: user_id.to_owned(),
        }
    }
}

/// Whether a MIME type names an image
#[must_use]
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// MIME type for a photo path, from its extension
#[must_use]
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => UNKNOWN_MIME_TYPE,
    }
}

fn validate(mime_type: &str, size: u64, max_bytes: u64) -> AppResult<()> {
    if !is_image_mime(mime_type) {
        return Err(AppError::invalid_input(messages::INVALID_IMAGE_TYPE));
    }
    if size > max_bytes {
        return Err(AppError::out_of_range(messages::IMAGE_TOO_LARGE));
    }
    Ok(())
}
