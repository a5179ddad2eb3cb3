// ABOUTME: Client constants: shared core constants plus environment variable names
// ABOUTME: Environment variable names are the only constants owned by the root crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! Constants module
//!
//! Domain constants live in `seneca-core` and are re-exported here.

pub use seneca_core::constants::{
    audio, defaults, endpoints, landmarks, limits, messages, nutrition, service_names,
};

/// Environment variable names read by [`crate::config::environment::CoachConfig`]
pub mod env_vars {
    /// Backend base URL
    pub const API_BASE_URL: &str = "SENECA_API_BASE_URL";
    /// User ID for food analysis and CLI commands
    pub const USER_ID: &str = "SENECA_USER_ID";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "SENECA_HTTP_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "SENECA_HTTP_CONNECT_TIMEOUT_SECS";
    /// Rep counter hold time in milliseconds
    pub const REP_MIN_HOLD_MS: &str = "SENECA_REP_MIN_HOLD_MS";
    /// Overlay frame width in pixels
    pub const FRAME_WIDTH: &str = "SENECA_FRAME_WIDTH";
    /// Overlay frame height in pixels
    pub const FRAME_HEIGHT: &str = "SENECA_FRAME_HEIGHT";
    /// Largest accepted food photo in bytes
    pub const MAX_IMAGE_BYTES: &str = "SENECA_MAX_IMAGE_BYTES";
    /// Local food proxy port
    pub const PROXY_PORT: &str = "SENECA_PROXY_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level fallback when `RUST_LOG` is unset
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
