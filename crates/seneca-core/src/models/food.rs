// ABOUTME: Wire types for voice fatigue prediction and food photo analysis
// ABOUTME: FatiguePrediction, FoodAnalysisRequest/Response, NutritionData, FoodItem, MealTotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use serde::{Deserialize, Serialize};

/// Response of `POST /api/predict-fatigue`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatiguePrediction {
    /// Whether the model produced a verdict
    pub success: bool,
    /// Whether the user sounds tired
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tired: Option<bool>,
    /// Model probability for the verdict
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    /// Failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `POST /api/analyze-food`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodAnalysisRequest {
    /// Photo as a `data:<mime>;base64,<payload>` URL
    pub image_data: String,
    /// User the meal belongs to
    pub user_id: String,
}

/// One recognized food on the plate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Estimated portion, e.g. "1 cup"
    pub portion: String,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Recognition confidence in `[0, 1]`
    pub confidence: f64,
}

/// Totals over every item in the photo
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MealTotals {
    /// Calories (kcal)
    pub total_calories: f64,
    /// Protein (g)
    pub total_protein_g: f64,
    /// Carbohydrates (g)
    pub total_carbs_g: f64,
    /// Fat (g)
    pub total_fat_g: f64,
}

/// Structured nutrition estimate for a photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionData {
    /// Recognized items
    pub items: Vec<FoodItem>,
    /// Totals
    pub meal_totals: MealTotals,
    /// Free-form caveats from the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Response of `POST /api/analyze-food`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodAnalysisResponse {
    /// Whether analysis succeeded
    pub success: bool,
    /// Model's description of the photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Nutrition estimate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_data: Option<NutritionData>,
    /// One-paragraph summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FoodAnalysisResponse {
    /// Failed response carrying a reason
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}
