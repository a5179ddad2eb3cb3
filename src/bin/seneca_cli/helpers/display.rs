// ABOUTME: Output formatting helpers for seneca-cli
// ABOUTME: Prints frame reports, chat messages, food analyses, and nutrition goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use seneca_coach::coach::{ChatMessage, Sender};
use seneca_coach::nutrition::{NutritionDayLog, ProgressRating};
use seneca_coach::workout::FrameReport;
use seneca_core::models::{Exercise, ExerciseAnalysis, FoodAnalysisResponse};

/// Print a frame where the rep count changed
pub fn display_frame_report(t_ms: u64, report: &FrameReport) {
    println!(
        "[{:>8.3}s] rep {:>3} | {:<9} {:>3}% | {}",
        t_ms as f64 / 1000.0,
        report.count,
        report.analysis.status,
        report.analysis.accuracy,
        report.analysis.feedback
    );
}

/// Print the end-of-replay summary
pub fn display_replay_summary(exercise: Exercise, frames: usize, analysis: &ExerciseAnalysis) {
    println!("\nReplay complete");
    println!("{}", "=".repeat(50));
    println!("   Exercise: {exercise}");
    println!("   Frames: {frames}");
    if exercise.is_counted() {
        println!("   Reps: {}", analysis.reps);
    } else {
        println!("   Reps: not counted for {exercise}");
    }
    println!("   Last form: {} ({}%)", analysis.status, analysis.accuracy);
    println!("   Feedback: {}", analysis.feedback);
}

/// Print one transcript message
pub fn display_message(message: &ChatMessage) {
    let who = match message.sender {
        Sender::User => "You",
        Sender::Coach => "Coach",
    };
    let emoji = message.emoji.as_deref().unwrap_or("");
    println!(
        "\n{who} ({}): {emoji}{}{}",
        message.timestamp.format("%H:%M"),
        if emoji.is_empty() { "" } else { " " },
        message.content
    );
    if let Some(suggestions) = &message.suggestions {
        for suggestion in suggestions {
            println!("   > {suggestion}");
        }
    }
}

/// Print a successful food analysis
pub fn display_food_analysis(result: &FoodAnalysisResponse) {
    if let Some(description) = &result.description {
        println!("{description}");
    }
    if let Some(nutrition) = &result.nutrition_data {
        println!("{}", "=".repeat(50));
        for item in &nutrition.items {
            println!(
                "   {} ({}): {:.0} cal, {:.1}g protein, {:.1}g carbs, {:.1}g fat",
                item.name, item.portion, item.calories, item.protein_g, item.carbs_g, item.fat_g
            );
        }
        let totals = nutrition.meal_totals;
        println!(
            "   Total: {:.0} cal, {:.1}g protein, {:.1}g carbs, {:.1}g fat",
            totals.total_calories,
            totals.total_protein_g,
            totals.total_carbs_g,
            totals.total_fat_g
        );
        if let Some(notes) = &nutrition.notes {
            println!("   Notes: {notes}");
        }
    }
    if let Some(summary) = &result.summary {
        println!("\n{summary}");
    }
}

/// Print progress toward the day's goals
pub fn display_goals(day: &NutritionDayLog) {
    println!("\nDaily goals");
    for goal in day.goals() {
        let marker = match goal.rating {
            ProgressRating::OnTarget => "on target",
            ProgressRating::Close => "close",
            ProgressRating::Behind => "behind",
        };
        println!(
            "   {:<9} {:>5.0} / {:<5.0} {:<3} {:>4.0}% {marker}",
            goal.nutrient.to_string(),
            goal.current,
            goal.target,
            goal.nutrient.unit(),
            goal.percent
        );
    }
    println!(
        "   water     {:>5} / {:<5} glasses",
        day.water_glasses(),
        day.targets().water_glasses
    );
}
