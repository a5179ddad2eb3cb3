// ABOUTME: Food photo analysis request against the coaching backend
// ABOUTME: Rejected analyses become errors carrying the backend's reason
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use tracing::{info, warn};

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::external::BackendClient;
use crate::food::upload::FoodImage;
use seneca_core::models::FoodAnalysisResponse;

/// Send a validated photo to the backend for analysis
///
/// Show [`AppError::user_message`] to the user on failure: a rejection keeps
/// the backend's reason, while transport and status failures collapse to the
/// static connection message.
///
/// # Errors
///
/// - `AnalysisFailed` with the backend's reason, or "Analysis failed" when it
///   gives none, for a `success: false` answer
/// - any error from [`BackendClient::analyze_food`]
pub async fn analyze_photo(
    client: &BackendClient,
    photo: &FoodImage,
    user_id: &str,
) -> AppResult<FoodAnalysisResponse> {
    let result = client
        .analyze_food(&photo.analysis_request(user_id))
        .await
        .inspect_err(|e| warn!(error = %e, "Food analysis request failed"))?;

    if !result.success {
        let reason = result
            .error
            .unwrap_or_else(|| messages::ANALYSIS_FAILED.to_owned());
        info!(reason = %reason, "Food analysis rejected");
        return Err(AppError::analysis_failed(reason));
    }

    info!(
        items = result.nutrition_data.as_ref().map_or(0, |n| n.items.len()),
        "Food analysis completed"
    );
    Ok(result)
}
