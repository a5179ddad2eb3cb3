// ABOUTME: Main library entry point for the Seneca coaching client
// ABOUTME: Workout sessions, coach chat, fatigue voice clips, food analysis, and nutrition logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

#![deny(unsafe_code)]

//! # Seneca Coach
//!
//! Client side of the Seneca fitness coaching service. The backend does the
//! thinking (chat replies, food photo analysis, fatigue inference from the
//! user's voice); this crate holds session state, prepares captured input,
//! and relays requests.
//!
//! ## Features
//!
//! - **Workout sessions**: live form feedback and rep counting from pose
//!   landmarks, with a pixel-space skeleton overlay
//! - **Coach chat**: login, transcript, and voice-based fatigue hints
//! - **Food analysis**: photo validation, backend analysis, and a local proxy
//! - **Nutrition log**: meals, daily totals, goals, and water intake
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use seneca_coach::workout::WorkoutSession;
//! use seneca_core::models::{Exercise, Landmark};
//!
//! let mut session = WorkoutSession::new(
//!     Exercise::Squats,
//!     Duration::ZERO,
//!     Duration::from_millis(500),
//! );
//! let frame = vec![Landmark::new(0.5, 0.5); 33];
//! let report = session.process_frame(&frame, Duration::from_millis(33));
//! println!("{} reps: {}", report.count, report.analysis.feedback);
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// Used by the CLI binary (src/bin/) and integration tests (tests/).

/// Conversation with the AI coach
pub mod coach;

/// Environment-based configuration
pub mod config;

/// Application constants
pub mod constants;

/// Error types shared with the core crate
pub mod errors;

/// Clients for the coaching backend
pub mod external;

/// Food photo validation and encoding
pub mod food;

/// Shared HTTP client with connection pooling
pub mod http_client;

/// Structured logging setup
pub mod logging;

/// Daily nutrition tracking
pub mod nutrition;

/// Local HTTP routes
pub mod routes;

/// Voice clip capture and WAV encoding
pub mod voice;

/// Live workout sessions
pub mod workout;
