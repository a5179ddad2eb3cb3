// ABOUTME: Re-exports helper modules for seneca-cli
// ABOUTME: Provides terminal output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

pub mod display;
