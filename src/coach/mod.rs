// ABOUTME: Conversation with the AI coach over the backend chat API
// ABOUTME: Re-exports the session and transcript message types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

/// Login state, transcript, and the send flow
pub mod session;

pub use session::{ChatMessage, CoachSession, Sender};
