// ABOUTME: Error types for the Seneca client, re-exported from seneca-core
// ABOUTME: Keeps `seneca_coach::errors::AppError` paths stable for binaries and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! # Unified Error Handling
//!
//! `AppError` and `ErrorCode` are defined in `seneca-core` so the algorithm
//! crates and the client share one taxonomy.

pub use seneca_core::errors::{AppError, AppResult, ErrorCode};
