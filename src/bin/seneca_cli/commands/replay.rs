// ABOUTME: Workout replay command for seneca-cli
// ABOUTME: Feeds recorded landmark frames through a workout session and reports reps and form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use seneca_coach::config::PoseConfig;
use seneca_coach::workout::WorkoutSession;
use seneca_core::models::{Exercise, Landmark};

use crate::helpers::display::{display_frame_report, display_replay_summary};

/// One recorded detector frame
#[derive(Debug, Deserialize)]
struct RecordedFrame {
    /// Milliseconds since the recording started
    t_ms: u64,
    /// Detector output; empty when no pose was found
    #[serde(default)]
    landmarks: Vec<Landmark>,
}

/// Replay a JSON-lines recording
pub fn run(config: &PoseConfig, file: &Path, exercise: Exercise, json: bool) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Cannot read recording {}", file.display()))?;
    info!(file = %file.display(), %exercise, "Replaying recording");

    let mut session = WorkoutSession::from_config(exercise, Duration::ZERO, config);
    let mut frames = 0_usize;
    let mut last_count = 0;

    for (line_number, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let frame: RecordedFrame = serde_json::from_str(line)
            .with_context(|| format!("Invalid frame on line {}", line_number + 1))?;
        frames += 1;

        let report = session.process_frame(&frame.landmarks, Duration::from_millis(frame.t_ms));
        if json {
            println!("{}", serde_json::to_string(report)?);
        } else if report.count != last_count {
            display_frame_report(frame.t_ms, report);
        }
        last_count = report.count;
    }

    debug!(frames, reps = session.count(), "Replay finished");
    if !json {
        display_replay_summary(exercise, frames, session.analysis());
    }
    Ok(())
}
