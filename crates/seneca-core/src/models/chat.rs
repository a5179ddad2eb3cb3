// ABOUTME: Wire types for the backend login and chat endpoints
// ABOUTME: LoginRequest/Response, ChatRequest/Response, message type and priority enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// User identifier, e.g. `user_00001`
    pub user_id: String,
}

/// Response of `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Whether the login was accepted
    pub success: bool,
    /// Greeting on success, reason on failure
    pub message: String,
    /// Profile data the backend holds for the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<serde_json::Value>,
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message
    pub message: String,
    /// Logged-in user
    pub user_id: String,
    /// Fatigue verdict text, when a voice clip was analyzed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatigue_status: Option<String>,
    /// Fatigue model probability, when a voice clip was analyzed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatigue_probability: Option<f64>,
}

/// Kind of coach message, used to pick a card layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Plain text
    #[default]
    Text,
    /// Workout plan
    Workout,
    /// Nutrition advice
    Nutrition,
    /// Motivational message
    Motivation,
    /// Progress report
    Progress,
    /// Short tip
    Tip,
    /// Achievement celebration
    Achievement,
}

/// Display priority of a coach message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Normal priority
    #[default]
    Normal,
    /// High priority
    High,
}

/// Response of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Coach reply text (markdown)
    pub response: String,
    /// When the backend produced the reply
    #[serde(deserialize_with = "deserialize_backend_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Kind of message
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub message_type: MessageType,
    /// Emoji shown next to the reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Display priority
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub priority: Priority,
    /// Structured payload for special message types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Quick reply suggestions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Accept RFC 3339 timestamps and naive ISO datetimes (read as UTC)
///
/// The backend serializes `datetime.now()` without an offset.
fn deserialize_backend_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_backend_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid timestamp '{raw}'"))
    })
}

/// Parse a backend timestamp, RFC 3339 first, then naive ISO 8601
#[must_use]
pub fn parse_backend_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Treat `null` as the type's default
fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_naive_backend_timestamp_is_utc() {
        let parsed = parse_backend_timestamp("2025-03-14T09:26:53.589793");
        assert_eq!(parsed.map(|t| (t.year(), t.hour())), Some((2025, 9)));
    }

    #[test]
    fn test_null_optionals_fall_back_to_defaults() -> serde_json::Result<()> {
        let json = r#"{
            "response": "Let's go!",
            "timestamp": "2025-03-14T09:26:53Z",
            "message_type": null,
            "priority": null
        }"#;
        let response: ChatResponse = serde_json::from_str(json)?;
        assert_eq!(response.message_type, MessageType::Text);
        assert_eq!(response.priority, Priority::Normal);
        assert!(response.suggestions.is_none());
        Ok(())
    }
}
