// ABOUTME: Core data models for the Seneca coaching client
// ABOUTME: Re-exports landmark, exercise analysis, chat, and food analysis types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! # Data Models
//!
//! - `Landmark` / `PoseLandmarks`: detector output and its validated view
//! - `Exercise`, `FormStatus`, `ExerciseAnalysis`: form feedback types
//! - Chat, fatigue, and food analysis request/response types mirroring the
//!   backend's JSON contract

mod chat;
mod exercise;
mod food;
mod landmark;

pub use chat::{
    parse_backend_timestamp, ChatRequest, ChatResponse, LoginRequest, LoginResponse, MessageType,
    Priority,
};
pub use exercise::{Exercise, ExerciseAnalysis, FormStatus};
pub use food::{
    FatiguePrediction, FoodAnalysisRequest, FoodAnalysisResponse, FoodItem, MealTotals,
    NutritionData,
};
pub use landmark::{Landmark, PoseLandmarks};
