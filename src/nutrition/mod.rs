// ABOUTME: Daily nutrition tracking fed by food photo analysis
// ABOUTME: Re-exports the day log, goal progress, and meal types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

/// One day of logged meals, totals, and water
pub mod day_log;

pub use day_log::{
    GoalProgress, LoggedFood, LoggedMeal, Nutrient, NutritionDayLog, NutritionTargets,
    ProgressRating,
};
