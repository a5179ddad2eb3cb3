// ABOUTME: Chat session with the AI coach: login, transcript, and the fatigue-first send flow
// ABOUTME: Backend failures become static coach messages in the transcript, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! # Coach Session
//!
//! A session starts logged out. A successful login replaces the transcript
//! with a welcome message. Each send then:
//!
//! 1. appends the user's message and clears the previous fatigue status
//! 2. when a voice clip is attached, asks the fatigue model first and waits
//! 3. sends the chat message, with the fatigue verdict when there is one
//! 4. appends the coach's reply, or a static apology if the chat failed
//!
//! `send_message` takes `&mut self`, so a second send cannot start while one
//! is in flight.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::constants::messages;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::external::BackendClient;
use crate::voice::VoiceClip;
use seneca_core::models::{ChatRequest, ChatResponse, MessageType, Priority};

/// Id of the welcome message that opens every transcript
const WELCOME_MESSAGE_ID: &str = "1";

/// Who wrote a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The logged-in user
    User,
    /// The AI coach
    Coach,
}

/// One message in the chat transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique id within the transcript
    pub id: String,
    /// Message text
    pub content: String,
    /// Author
    pub sender: Sender,
    /// When the message was written
    pub timestamp: DateTime<Utc>,
    /// Kind of coach reply
    pub message_type: MessageType,
    /// Emoji chosen by the coach
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Importance of a coach reply
    pub priority: Priority,
    /// Structured payload attached by the coach
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Follow-up prompts offered by the coach
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl ChatMessage {
    fn plain(id: String, sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            sender,
            timestamp: Utc::now(),
            message_type: MessageType::Text,
            emoji: None,
            priority: Priority::Normal,
            data: None,
            suggestions: None,
        }
    }

    fn from_reply(reply: ChatResponse) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: reply.response,
            sender: Sender::Coach,
            timestamp: reply.timestamp,
            message_type: reply.message_type,
            emoji: reply.emoji,
            priority: reply.priority,
            data: reply.data,
            suggestions: reply.suggestions,
        }
    }
}

/// Verdict of the fatigue model, included in the chat request
#[derive(Debug, Clone, PartialEq)]
struct FatigueVerdict {
    status: &'static str,
    probability: Option<f64>,
}

#[derive(Debug, Clone)]
struct LoggedInUser {
    user_id: String,
    user_data: Option<Value>,
}

/// State of one user's conversation with the coach
#[derive(Debug)]
pub struct CoachSession {
    client: BackendClient,
    user: Option<LoggedInUser>,
    messages: Vec<ChatMessage>,
    fatigue_status: Option<String>,
}

impl CoachSession {
    /// Logged-out session talking to `client`
    #[must_use]
    pub const fn new(client: BackendClient) -> Self {
        Self {
            client,
            user: None,
            messages: Vec::new(),
            fatigue_status: None,
        }
    }

    /// Log in as `user_id` (surrounding whitespace ignored)
    ///
    /// On success the transcript is replaced by the welcome message, which is
    /// returned.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` for an empty user id (no request is sent)
    /// - `AuthInvalid` carrying the backend's reason when it rejects the login
    /// - `ExternalServiceUnavailable` with the static connection message when
    ///   the backend cannot be reached or answers nonsense
    pub async fn login(&mut self, user_id: &str) -> AppResult<&ChatMessage> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(AppError::missing_field("user_id"));
        }

        let response = self.client.login(user_id).await.map_err(|e| {
            warn!(user.id = %user_id, error = %e, "Login failed");
            AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                messages::LOGIN_CONNECTION_ERROR,
            )
            .with_source(e)
        })?;

        if !response.success {
            info!(user.id = %user_id, reason = %response.message, "Login rejected");
            return Err(AppError::auth_invalid(response.message));
        }

        info!(user.id = %user_id, "Logged in");
        self.user = Some(LoggedInUser {
            user_id: user_id.to_owned(),
            user_data: response.user_data,
        });
        self.fatigue_status = None;
        self.messages = vec![ChatMessage::plain(
            WELCOME_MESSAGE_ID.to_owned(),
            Sender::Coach,
            format!("{} {}", response.message, messages::WELCOME_SUFFIX),
        )];

        Ok(&self.messages[0])
    }

    /// Forget the user and clear the transcript
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user.id = %user.user_id, "Logged out");
        }
        self.messages.clear();
        self.fatigue_status = None;
    }

    /// Send a chat message, optionally with a voice clip for fatigue analysis
    ///
    /// Returns the coach message appended to the transcript, or `None` when
    /// nothing was sent because the content is blank or nobody is logged in.
    /// Backend failures never surface as errors: the fatigue status and the
    /// coach reply carry the static messages instead.
    pub async fn send_message(
        &mut self,
        content: &str,
        voice: Option<&VoiceClip>,
    ) -> Option<&ChatMessage> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        let user_id = self.user.as_ref()?.user_id.clone();

        self.messages.push(ChatMessage::plain(
            Uuid::new_v4().to_string(),
            Sender::User,
            content,
        ));
        self.fatigue_status = None;

        let verdict = match voice {
            Some(clip) => self.assess_fatigue(clip).await,
            None => None,
        };

        let request = ChatRequest {
            message: content.to_owned(),
            user_id,
            fatigue_status: verdict.as_ref().map(|v| v.status.to_owned()),
            fatigue_probability: verdict.and_then(|v| v.probability),
        };

        let reply = match self.client.chat(&request).await {
            Ok(reply) => {
                debug!(
                    message_type = ?reply.message_type,
                    priority = ?reply.priority,
                    "Coach replied"
                );
                ChatMessage::from_reply(reply)
            }
            Err(e) => {
                warn!(error = %e, "Chat request failed");
                ChatMessage::plain(
                    Uuid::new_v4().to_string(),
                    Sender::Coach,
                    messages::CHAT_CONNECTION_ERROR,
                )
            }
        };

        self.messages.push(reply);
        self.messages.last()
    }

    async fn assess_fatigue(&mut self, clip: &VoiceClip) -> Option<FatigueVerdict> {
        let outcome = match clip.to_fatigue_wav() {
            Ok(wav) => self.client.predict_fatigue(wav).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(prediction) if prediction.success => {
                let status = if prediction.tired.unwrap_or(false) {
                    messages::FATIGUE_TIRED
                } else {
                    messages::FATIGUE_ENERGETIC
                };
                debug!(status, probability = ?prediction.probability, "Fatigue assessed");
                self.fatigue_status = Some(status.to_owned());
                Some(FatigueVerdict {
                    status,
                    probability: prediction.probability,
                })
            }
            Ok(prediction) => {
                warn!(reason = ?prediction.error, "Fatigue model could not classify the clip");
                self.fatigue_status = Some(messages::FATIGUE_FAILED.to_owned());
                None
            }
            Err(e) => {
                warn!(error = %e, "Fatigue prediction request failed");
                self.fatigue_status = Some(messages::FATIGUE_ERROR.to_owned());
                None
            }
        }
    }

    /// Whether a user is logged in
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Logged-in user id
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.user_id.as_str())
    }

    /// Profile data the backend returned at login
    #[must_use]
    pub fn user_data(&self) -> Option<&Value> {
        self.user.as_ref().and_then(|user| user.user_data.as_ref())
    }

    /// Transcript, oldest first
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Outcome of the last fatigue assessment, cleared on every send
    #[must_use]
    pub fn fatigue_status(&self) -> Option<&str> {
        self.fatigue_status.as_deref()
    }

    /// Prompts offered before the user types anything
    #[must_use]
    pub const fn quick_suggestions() -> &'static [&'static str] {
        &messages::QUICK_SUGGESTIONS
    }
}
