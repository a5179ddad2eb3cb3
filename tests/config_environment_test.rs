// ABOUTME: Integration tests for environment configuration loading
// ABOUTME: Defaults, overrides, malformed values, validation, and enum parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use serial_test::serial;

use seneca_coach::config::{CoachConfig, Environment, LogLevel};
use seneca_coach::constants::env_vars;
use seneca_coach::logging::{LogFormat, LoggingConfig};

const ALL_VARS: [&str; 12] = [
    env_vars::API_BASE_URL,
    env_vars::USER_ID,
    env_vars::HTTP_TIMEOUT_SECS,
    env_vars::HTTP_CONNECT_TIMEOUT_SECS,
    env_vars::REP_MIN_HOLD_MS,
    env_vars::FRAME_WIDTH,
    env_vars::FRAME_HEIGHT,
    env_vars::MAX_IMAGE_BYTES,
    env_vars::PROXY_PORT,
    env_vars::ENVIRONMENT,
    env_vars::LOG_LEVEL,
    env_vars::LOG_FORMAT,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = CoachConfig::from_env().unwrap();

    assert_eq!(config, CoachConfig::default());
    assert_eq!(config.backend.base_url, "http://localhost:8000");
    assert_eq!(config.backend.user_id, "user_00001");
    assert_eq!(config.backend.timeout(), Duration::from_secs(30));
    assert_eq!(config.backend.connect_timeout(), Duration::from_secs(10));
    assert_eq!(config.pose.rep_min_hold(), Duration::from_millis(500));
    assert_eq!((config.pose.frame_width, config.pose.frame_height), (640, 480));
    assert_eq!(config.max_image_bytes, 10 * 1024 * 1024);
    assert_eq!(config.proxy_port, 3000);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var(env_vars::API_BASE_URL, "https://coach.example.com/");
    env::set_var(env_vars::USER_ID, "user_00042");
    env::set_var(env_vars::REP_MIN_HOLD_MS, " 750 ");
    env::set_var(env_vars::PROXY_PORT, "4100");
    env::set_var(env_vars::ENVIRONMENT, "prod");
    env::set_var(env_vars::LOG_LEVEL, "DEBUG");

    let config = CoachConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.backend.base_url, "https://coach.example.com");
    assert_eq!(config.backend.user_id, "user_00042");
    assert_eq!(config.pose.rep_min_hold_ms, 750);
    assert_eq!(config.proxy_port, 4100);
    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
#[serial]
fn test_logging_follows_loaded_config() {
    clear_env();
    env::set_var(env_vars::LOG_LEVEL, "trace");
    env::set_var(env_vars::LOG_FORMAT, "JSON");
    env::set_var(env_vars::ENVIRONMENT, "production");

    let config = CoachConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.log_format, LogFormat::Json);

    let logging = LoggingConfig::from_config(&config);
    assert_eq!(logging.level, LogLevel::Trace);
    assert_eq!(logging.format, LogFormat::Json);
    assert_eq!(logging.environment, Environment::Production);
    assert!(logging.include_location);
    assert!(logging.include_spans);

    assert_eq!(logging.verbose(true).level, LogLevel::Debug);
}

#[test]
#[serial]
fn test_log_level_override_changes_logging_without_reload() {
    clear_env();
    let mut config = CoachConfig::from_env().unwrap();
    config.log_level = LogLevel::Warn;

    let logging = LoggingConfig::from_config(&config);
    assert_eq!(logging.level, LogLevel::Warn);
    assert_eq!(logging.format, LogFormat::Pretty);
    assert!(!logging.include_location);
}

#[test]
#[serial]
fn test_malformed_number_is_an_error() {
    clear_env();
    env::set_var(env_vars::FRAME_WIDTH, "wide");
    let error = CoachConfig::from_env().unwrap_err();
    clear_env();

    assert!(error
        .to_string()
        .contains("Invalid SENECA_FRAME_WIDTH value 'wide'"));
}

#[test]
#[serial]
fn test_non_http_url_is_rejected() {
    clear_env();
    env::set_var(env_vars::API_BASE_URL, "localhost:8000");
    let error = CoachConfig::from_env().unwrap_err();
    clear_env();

    assert!(error.to_string().contains("must be an http(s) URL"));
}

#[test]
#[serial]
fn test_zero_values_are_rejected() {
    clear_env();
    env::set_var(env_vars::HTTP_TIMEOUT_SECS, "0");
    assert!(CoachConfig::from_env().is_err());

    clear_env();
    env::set_var(env_vars::MAX_IMAGE_BYTES, "0");
    assert!(CoachConfig::from_env().is_err());

    clear_env();
    env::set_var(env_vars::USER_ID, "   ");
    assert!(CoachConfig::from_env().is_err());
    clear_env();
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("Warn"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
    assert_eq!(LogLevel::Warn.to_string(), "warn");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert!(Environment::from_str_or_default("test").is_testing());
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
}

#[test]
fn test_summary_lists_settings() {
    let summary = CoachConfig::default().summary();
    assert!(summary.contains("Backend: http://localhost:8000"));
    assert!(summary.contains("Frame: 640x480"));
    assert!(summary.contains("Proxy Port: 3000"));
    assert!(summary.contains("Log Format: pretty"));
}
