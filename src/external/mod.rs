// ABOUTME: External API client modules (coaching backend)
// ABOUTME: Login, chat, voice fatigue, and food analysis over HTTP+JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! External API Clients

pub mod backend_client;

pub use backend_client::BackendClient;
