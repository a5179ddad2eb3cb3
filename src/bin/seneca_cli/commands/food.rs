// ABOUTME: Food photo analysis command for seneca-cli
// ABOUTME: Validates the photo, asks the backend to analyze it, and logs the meal for the day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing::{debug, info};

use seneca_coach::config::CoachConfig;
use seneca_coach::errors::AppError;
use seneca_coach::external::BackendClient;
use seneca_coach::food::{analyze_photo, FoodImage};
use seneca_coach::nutrition::NutritionDayLog;

use crate::helpers::display::{display_food_analysis, display_goals};

/// Analyze one food photo and show how it moves the day's goals
pub async fn analyze(config: &CoachConfig, image: &Path, user_id: &str) -> Result<()> {
    let photo = FoodImage::from_file(image, config.max_image_bytes).map_err(shown_to_user)?;
    info!(
        file = %image.display(),
        mime_type = photo.mime_type(),
        bytes = photo.bytes().len(),
        "Analyzing food photo"
    );

    let client = BackendClient::new(&config.backend.base_url);
    let result = analyze_photo(&client, &photo, user_id)
        .await
        .map_err(shown_to_user)?;

    display_food_analysis(&result);
    if let Some(nutrition) = &result.nutrition_data {
        let mut day = NutritionDayLog::new();
        let meal = day.add_meal_now(nutrition);
        println!("\nLogged as {} at {}", meal.name, meal.time_label());
        display_goals(&day);
    }
    Ok(())
}

/// Keep backend details in the debug log and give the user the static text
fn shown_to_user(error: AppError) -> anyhow::Error {
    debug!(code = ?error.code, error = %error, "Food command failed");
    anyhow!(error.user_message())
}
