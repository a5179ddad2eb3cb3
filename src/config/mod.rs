// ABOUTME: Configuration module for the Seneca client
// ABOUTME: Environment-only settings loaded once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

/// Environment variable parsing and typed settings
pub mod environment;

pub use environment::{BackendConfig, CoachConfig, Environment, LogLevel, PoseConfig};
