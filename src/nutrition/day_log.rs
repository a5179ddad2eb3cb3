// ABOUTME: Running log of one day's meals built from food photo analyses
// ABOUTME: Meal naming, daily macro totals, goal progress ratings, and water glasses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! # Nutrition Day Log
//!
//! Every successful food analysis becomes one meal. Meals are named by the
//! order they were logged (Breakfast, Lunch, Snack, Dinner, Late Night, then
//! "Meal 6", "Meal 7", ...), and their totals are added to the day's running
//! totals. Goal progress compares the rounded totals with fixed targets.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::nutrition::{
    CALORIE_TARGET, CARBS_TARGET_G, CLOSE_PERCENT, FAT_TARGET_G, MEAL_NAMES, ON_TARGET_PERCENT,
    PROTEIN_TARGET_G, WATER_TARGET_GLASSES,
};
use seneca_core::models::{FoodItem, MealTotals, NutritionData};

/// One food in a logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedFood {
    /// Food name
    pub name: String,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl From<&FoodItem> for LoggedFood {
    fn from(item: &FoodItem) -> Self {
        Self {
            name: item.name.clone(),
            calories: item.calories,
            protein_g: item.protein_g,
            carbs_g: item.carbs_g,
            fat_g: item.fat_g,
        }
    }
}

/// A meal added to the day log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedMeal {
    /// Position in the day, starting at 1
    pub id: u32,
    /// Name derived from the position
    pub name: String,
    /// When the meal was logged
    pub logged_at: DateTime<Utc>,
    /// Meal calories from the analysis totals
    pub calories: f64,
    /// Foods recognized in the photo
    pub foods: Vec<LoggedFood>,
}

impl LoggedMeal {
    /// Clock time of the meal, e.g. `1:05 PM`
    #[must_use]
    pub fn time_label(&self) -> String {
        self.logged_at.format("%-I:%M %p").to_string()
    }
}

/// Nutrient tracked against a daily goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    /// Energy
    Calories,
    /// Protein
    Protein,
    /// Carbohydrates
    Carbs,
    /// Fat
    Fat,
}

impl Nutrient {
    /// Every tracked nutrient in display order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];

    /// Display unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "cal",
            Self::Protein | Self::Carbs | Self::Fat => "g",
        }
    }

    const fn amount(self, totals: &MealTotals) -> f64 {
        match self {
            Self::Calories => totals.total_calories,
            Self::Protein => totals.total_protein_g,
            Self::Carbs => totals.total_carbs_g,
            Self::Fat => totals.total_fat_g,
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        };
        f.write_str(name)
    }
}

/// How close a total is to its goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressRating {
    /// At least 90% of the target
    OnTarget,
    /// At least 70% of the target
    Close,
    /// Below 70% of the target
    Behind,
}

impl ProgressRating {
    /// Rate a percentage of target
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= ON_TARGET_PERCENT {
            Self::OnTarget
        } else if percent >= CLOSE_PERCENT {
            Self::Close
        } else {
            Self::Behind
        }
    }
}

/// Daily targets, one per nutrient plus water
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Water (glasses)
    pub water_glasses: u32,
}

impl NutritionTargets {
    /// Target for one nutrient
    #[must_use]
    pub const fn target(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein_g,
            Nutrient::Carbs => self.carbs_g,
            Nutrient::Fat => self.fat_g,
        }
    }
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self {
            calories: CALORIE_TARGET,
            protein_g: PROTEIN_TARGET_G,
            carbs_g: CARBS_TARGET_G,
            fat_g: FAT_TARGET_G,
            water_glasses: WATER_TARGET_GLASSES,
        }
    }
}

/// Progress of one nutrient toward its goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Nutrient measured
    pub nutrient: Nutrient,
    /// Day total, rounded to a whole number
    pub current: f64,
    /// Daily target
    pub target: f64,
    /// `current / target * 100`
    pub percent: f64,
    /// Rating derived from `percent`
    pub rating: ProgressRating,
}

/// Meals, totals, and water for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionDayLog {
    meals: Vec<LoggedMeal>,
    totals: MealTotals,
    water_glasses: u32,
    targets: NutritionTargets,
}

impl NutritionDayLog {
    /// Empty log with the default targets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty log with custom targets
    #[must_use]
    pub fn with_targets(targets: NutritionTargets) -> Self {
        Self {
            targets,
            ..Self::default()
        }
    }

    /// Name the next logged meal will get
    #[must_use]
    pub fn next_meal_name(&self) -> String {
        let logged = self.meals.len();
        MEAL_NAMES
            .get(logged)
            .map_or_else(|| format!("Meal {}", logged + 1), |name| (*name).to_owned())
    }

    /// Add a meal from a food analysis, logged at `logged_at`
    pub fn add_meal_from_analysis(
        &mut self,
        nutrition: &NutritionData,
        logged_at: DateTime<Utc>,
    ) -> &LoggedMeal {
        let totals = nutrition.meal_totals;
        let id = u32::try_from(self.meals.len()).unwrap_or(u32::MAX).saturating_add(1);
        let meal = LoggedMeal {
            id,
            name: self.next_meal_name(),
            logged_at,
            calories: totals.total_calories,
            foods: nutrition.items.iter().map(LoggedFood::from).collect(),
        };

        self.totals.total_calories += totals.total_calories;
        self.totals.total_protein_g += totals.total_protein_g;
        self.totals.total_carbs_g += totals.total_carbs_g;
        self.totals.total_fat_g += totals.total_fat_g;

        debug!(
            meal.id = meal.id,
            meal.name = %meal.name,
            meal.calories = meal.calories,
            day.calories = self.totals.total_calories,
            "Meal logged"
        );

        self.meals.push(meal);
        &self.meals[self.meals.len() - 1]
    }

    /// Add a meal from a food analysis, logged now
    pub fn add_meal_now(&mut self, nutrition: &NutritionData) -> &LoggedMeal {
        self.add_meal_from_analysis(nutrition, Utc::now())
    }

    /// Meals in the order they were logged
    #[must_use]
    pub fn meals(&self) -> &[LoggedMeal] {
        &self.meals
    }

    /// Look up a meal by id
    #[must_use]
    pub fn meal(&self, id: u32) -> Option<&LoggedMeal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    /// Unrounded day totals
    #[must_use]
    pub const fn totals(&self) -> &MealTotals {
        &self.totals
    }

    /// Targets in use
    #[must_use]
    pub const fn targets(&self) -> &NutritionTargets {
        &self.targets
    }

    /// Progress toward one goal
    #[must_use]
    pub fn goal_progress(&self, nutrient: Nutrient) -> GoalProgress {
        let current = nutrient.amount(&self.totals).round();
        let target = self.targets.target(nutrient);
        let percent = if target > 0.0 {
            current / target * 100.0
        } else {
            0.0
        };
        GoalProgress {
            nutrient,
            current,
            target,
            percent,
            rating: ProgressRating::from_percent(percent),
        }
    }

    /// Progress toward every goal, in display order
    #[must_use]
    pub fn goals(&self) -> Vec<GoalProgress> {
        Nutrient::ALL
            .into_iter()
            .map(|nutrient| self.goal_progress(nutrient))
            .collect()
    }

    /// Drink one more glass of water; returns the new count
    pub fn add_water_glass(&mut self) -> u32 {
        self.water_glasses = self.water_glasses.saturating_add(1);
        self.water_glasses
    }

    /// Glasses of water so far
    #[must_use]
    pub const fn water_glasses(&self) -> u32 {
        self.water_glasses
    }

    /// Water progress as a percentage of the target
    #[must_use]
    pub fn water_percent(&self) -> f64 {
        if self.targets.water_glasses == 0 {
            return 0.0;
        }
        f64::from(self.water_glasses) / f64::from(self.targets.water_glasses) * 100.0
    }
}
