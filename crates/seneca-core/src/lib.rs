// ABOUTME: Core types and constants for the Seneca fitness coaching client
// ABOUTME: Foundation crate with error handling, the landmark contract, and backend wire models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

#![deny(unsafe_code)]

//! # Seneca Core
//!
//! Foundation crate providing shared types and constants for the Seneca coaching
//! client. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Landmark indices, backend endpoints, limits, and user-facing messages
//! - **models**: Landmarks, exercises, form analysis, and backend request/response types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (landmarks, exercises, chat, food analysis)
pub mod models;
