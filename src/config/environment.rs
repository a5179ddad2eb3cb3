// ABOUTME: Environment configuration for the Seneca client and CLI
// ABOUTME: Typed log level and deployment mode, backend URL, timeouts, and pose settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! Environment-based configuration
//!
//! All settings come from environment variables; there is no config file.
//! Missing variables fall back to defaults, malformed ones are errors.

use std::env;
use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{defaults, env_vars, limits};
use crate::logging::LogFormat;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the coaching backend, without a trailing slash
    pub base_url: String,
    /// User the client acts for
    pub user_id: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_owned(),
            user_id: defaults::USER_ID.to_owned(),
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Exercise overlay settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseConfig {
    /// Minimum time a rep position must be held, in milliseconds
    pub rep_min_hold_ms: u64,
    /// Overlay frame width in pixels
    pub frame_width: u32,
    /// Overlay frame height in pixels
    pub frame_height: u32,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            rep_min_hold_ms: defaults::REP_MIN_HOLD_MS,
            frame_width: defaults::FRAME_WIDTH,
            frame_height: defaults::FRAME_HEIGHT,
        }
    }
}

impl PoseConfig {
    /// Rep counter hold time
    #[must_use]
    pub const fn rep_min_hold(&self) -> Duration {
        Duration::from_millis(self.rep_min_hold_ms)
    }
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Log output format
    pub log_format: LogFormat,
    /// Backend connection
    pub backend: BackendConfig,
    /// Exercise overlay
    pub pose: PoseConfig,
    /// Largest accepted food photo in bytes
    pub max_image_bytes: u64,
    /// Port of the local food analysis proxy
    pub proxy_port: u16,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            log_format: LogFormat::default(),
            backend: BackendConfig::default(),
            pose: PoseConfig::default(),
            max_image_bytes: limits::MAX_IMAGE_BYTES,
            proxy_port: defaults::PROXY_PORT,
        }
    }
}

impl CoachConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or a value is
    /// out of range.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_vars::LOG_LEVEL, "info")),
            log_format: LogFormat::from_str_or_default(&env_var_or(
                env_vars::LOG_FORMAT,
                "pretty",
            )),
            backend: BackendConfig {
                base_url: env_var_or(env_vars::API_BASE_URL, defaults::API_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                user_id: env_var_or(env_vars::USER_ID, defaults::USER_ID),
                timeout_secs: parse_env_or(
                    env_vars::HTTP_TIMEOUT_SECS,
                    defaults::HTTP_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: parse_env_or(
                    env_vars::HTTP_CONNECT_TIMEOUT_SECS,
                    defaults::HTTP_CONNECT_TIMEOUT_SECS,
                )?,
            },
            pose: PoseConfig {
                rep_min_hold_ms: parse_env_or(env_vars::REP_MIN_HOLD_MS, defaults::REP_MIN_HOLD_MS)?,
                frame_width: parse_env_or(env_vars::FRAME_WIDTH, defaults::FRAME_WIDTH)?,
                frame_height: parse_env_or(env_vars::FRAME_HEIGHT, defaults::FRAME_HEIGHT)?,
            },
            max_image_bytes: parse_env_or(env_vars::MAX_IMAGE_BYTES, limits::MAX_IMAGE_BYTES)?,
            proxy_port: parse_env_or(env_vars::PROXY_PORT, defaults::PROXY_PORT)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if !(self.backend.base_url.starts_with("http://")
            || self.backend.base_url.starts_with("https://"))
        {
            bail!(
                "{} must be an http(s) URL, got '{}'",
                env_vars::API_BASE_URL,
                self.backend.base_url
            );
        }
        if self.backend.user_id.trim().is_empty() {
            bail!("{} must not be empty", env_vars::USER_ID);
        }
        if self.backend.timeout_secs == 0 || self.backend.connect_timeout_secs == 0 {
            bail!("HTTP timeouts must be greater than zero");
        }
        if self.pose.frame_width == 0 || self.pose.frame_height == 0 {
            bail!("Frame dimensions must be greater than zero");
        }
        if self.max_image_bytes == 0 {
            bail!("{} must be greater than zero", env_vars::MAX_IMAGE_BYTES);
        }
        Ok(())
    }

    /// Human-readable summary for logs and `--help`-style output
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Seneca Coach Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Log Format: {}\n\
             - Backend: {}\n\
             - User: {}\n\
             - Timeouts: {}s request / {}s connect\n\
             - Rep Hold: {}ms\n\
             - Frame: {}x{}\n\
             - Max Image: {} bytes\n\
             - Proxy Port: {}",
            self.environment,
            self.log_level,
            self.log_format,
            self.backend.base_url,
            self.backend.user_id,
            self.backend.timeout_secs,
            self.backend.connect_timeout_secs,
            self.pose.rep_min_hold_ms,
            self.pose.frame_width,
            self.pose.frame_height,
            self.max_image_bytes,
            self.proxy_port,
        )
    }
}

/// Get an environment variable or a default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value '{raw}'")),
        Err(_) => Ok(default),
    }
}
