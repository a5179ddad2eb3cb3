// ABOUTME: Unified error type and error codes shared by every Seneca crate
// ABOUTME: Maps validation failures, backend failures, and backend verdicts to stable codes and user messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! # Unified Error Handling System
//!
//! Centralized error handling for the coaching client. Errors fall into three
//! families: input validation (rejected before any network call), backend and
//! transport failures (caught at the call site and turned into a static
//! message), and backend verdicts such as a rejected login or a photo the
//! model could not analyze. Missing host capabilities are not errors at all;
//! those features are simply disabled.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

use crate::constants::messages;

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was empty or absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A value fell outside its allowed range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Session state (4000-4999)
    /// The backend rejected the login
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid = 4001,

    // External Services (5000-5999)
    /// The backend answered with a non-success status
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The backend could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    /// The backend answered but could not analyze the input
    #[serde(rename = "ANALYSIS_FAILED")]
    AnalysisFailed = 5002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Encoding or decoding failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::AuthInvalid => "Login was rejected",
            Self::ExternalServiceError => "The coaching service encountered an error",
            Self::ExternalServiceUnavailable => "The coaching service is currently unavailable",
            Self::AnalysisFailed => "The coaching service could not analyze the input",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the failure came from talking to the backend
    #[must_use]
    pub const fn is_backend_failure(self) -> bool {
        matches!(
            self,
            Self::ExternalServiceError | Self::ExternalServiceUnavailable | Self::SerializationError
        )
    }
}

/// Unified error type for the client
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// HTTP status reported by the backend, when there was one
    pub upstream_status: Option<u16>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            upstream_status: None,
            source: None,
        }
    }

    /// Record the backend's HTTP status
    #[must_use]
    pub const fn with_upstream_status(mut self, status: u16) -> Self {
        self.upstream_status = Some(status);
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input; the message is shown to the user as-is
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its allowed range; the message is shown to the user as-is
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Required field missing
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} must not be empty"),
        )
    }

    /// Backend rejected the login
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Backend answered with a non-success status
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Backend could not be reached at all
    pub fn service_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Backend declined to analyze the input; the reason is shown as-is
    pub fn analysis_failed(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::AnalysisFailed, reason)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Static text safe to show in the UI for this error
    ///
    /// Validation messages are already written for the user and pass through.
    /// Everything else collapses to the generic connection message, so raw
    /// transport details never reach the transcript.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.code {
            ErrorCode::InvalidInput
            | ErrorCode::ValueOutOfRange
            | ErrorCode::MissingRequiredField
            | ErrorCode::AuthInvalid
            | ErrorCode::AnalysisFailed => self.message.clone(),
            _ => messages::CHAT_CONNECTION_ERROR.to_owned(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

#[cfg(feature = "http-errors")]
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        use crate::constants::service_names::COACHING_BACKEND;

        let service = COACHING_BACKEND;
        let mapped = if error.is_decode() {
            Self::serialization(format!("{service}: invalid response body: {error}"))
        } else if let Some(status) = error.status() {
            Self::external_service(service, format!("HTTP {status}"))
                .with_upstream_status(status.as_u16())
        } else {
            Self::service_unavailable(service, error.to_string())
        };
        mapped.with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_pass_through() {
        let error = AppError::invalid_input("Please select a valid image file");
        assert_eq!(error.user_message(), "Please select a valid image file");
        let rejected = AppError::analysis_failed("No food detected in the image");
        assert!(!rejected.code.is_backend_failure());
        assert_eq!(rejected.user_message(), "No food detected in the image");
    }

    #[test]
    fn test_backend_failures_collapse_to_static_message() {
        let error = AppError::service_unavailable("Coaching backend", "connection refused");
        assert!(error.code.is_backend_failure());
        assert_eq!(error.user_message(), messages::CHAT_CONNECTION_ERROR);
    }

    #[test]
    fn test_upstream_status_is_recorded() {
        let error = AppError::external_service("Coaching backend", "HTTP 503").with_upstream_status(503);
        assert_eq!(error.upstream_status, Some(503));
        assert_eq!(error.user_message(), messages::CHAT_CONNECTION_ERROR);
        assert!(error.to_string().contains("HTTP 503"));
    }
}
