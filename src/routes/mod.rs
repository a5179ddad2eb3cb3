// ABOUTME: HTTP route modules served by the client
// ABOUTME: Currently the local food analysis proxy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

/// Food analysis proxy forwarding to the coaching backend
pub mod food_proxy;

pub use food_proxy::FoodProxyRoutes;
