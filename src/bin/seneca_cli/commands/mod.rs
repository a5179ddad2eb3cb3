// ABOUTME: Re-exports command modules for seneca-cli
// ABOUTME: Workout replay, coach chat, food analysis, and proxy commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

pub mod coach;
pub mod food;
pub mod proxy;
pub mod replay;
