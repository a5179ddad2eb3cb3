// ABOUTME: HTTP client for the coaching backend: login, chat, fatigue, and food analysis
// ABOUTME: Typed JSON and multipart requests with status mapping into AppError, no retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! Coaching backend client
//!
//! The backend owns every piece of business logic (chat reasoning, vision
//! analysis, voice fatigue inference). This client only shapes requests and
//! classifies failures:
//!
//! - transport failures become `ExternalServiceUnavailable`
//! - non-success statuses become `ExternalServiceError` carrying the status
//! - undecodable bodies become `SerializationError`
//!
//! Nothing is retried. Callers decide what the user sees.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::constants::{audio, endpoints, service_names::COACHING_BACKEND};
use crate::errors::{AppError, AppResult};
use crate::http_client::shared_client;
use seneca_core::models::{
    ChatRequest, ChatResponse, FatiguePrediction, FoodAnalysisRequest, FoodAnalysisResponse,
    LoginRequest, LoginResponse,
};

/// Client for the coaching backend's HTTP API
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http_client: Client,
}

impl BackendClient {
    /// Client for `base_url` using the shared connection pool
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, shared_client().clone())
    }

    /// Client for `base_url` using a caller-supplied `reqwest` client
    #[must_use]
    pub fn with_http_client(base_url: impl Into<String>, http_client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            http_client,
        }
    }

    /// Backend base URL, without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Log in a user
    ///
    /// A rejected login is not an error here: the backend answers with
    /// `success: false` and a reason, which is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or its answer is not
    /// a login response.
    pub async fn login(&self, user_id: &str) -> AppResult<LoginResponse> {
        let request = LoginRequest {
            user_id: user_id.to_owned(),
        };
        let response = self
            .http_client
            .post(self.url(endpoints::LOGIN))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let login: LoginResponse = read_json_any_status(response).await?;
        info!(
            user.id = %user_id,
            http.status = status.as_u16(),
            auth.success = login.success,
            "Login response"
        );
        Ok(login)
    }

    /// Send one chat message
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn chat(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        debug!(
            user.id = %request.user_id,
            with_fatigue = request.fatigue_status.is_some(),
            "Sending chat message"
        );
        self.post_json(endpoints::CHAT, request).await
    }

    /// Ask the fatigue model about a WAV voice clip
    ///
    /// Like login, a model that fails to classify answers `success: false`
    /// with a reason, which is returned rather than raised.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or the answer is not
    /// a fatigue prediction.
    pub async fn predict_fatigue(&self, wav: Vec<u8>) -> AppResult<FatiguePrediction> {
        let size = wav.len();
        let part = Part::bytes(wav)
            .file_name(audio::FILE_NAME)
            .mime_str(audio::MIME_TYPE)
            .map_err(|e| AppError::internal(format!("Invalid voice clip part: {e}")))?;
        let form = Form::new().part(audio::FORM_FIELD, part);

        debug!(bytes = size, "Sending voice clip for fatigue prediction");
        let response = self
            .http_client
            .post(self.url(endpoints::PREDICT_FATIGUE))
            .multipart(form)
            .send()
            .await?;

        let prediction: FatiguePrediction = read_json_any_status(response).await?;
        debug!(
            success = prediction.success,
            tired = ?prediction.tired,
            probability = ?prediction.probability,
            "Fatigue prediction"
        );
        Ok(prediction)
    }

    /// Analyze a food photo
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn analyze_food(
        &self,
        request: &FoodAnalysisRequest,
    ) -> AppResult<FoodAnalysisResponse> {
        debug!(
            user.id = %request.user_id,
            image_bytes = request.image_data.len(),
            "Sending food photo for analysis"
        );
        self.post_json(endpoints::ANALYZE_FOOD, request).await
    }

    /// Forward an arbitrary JSON body to the food analysis endpoint
    ///
    /// Used by the local proxy, which passes bodies through untouched.
    ///
    /// # Errors
    ///
    /// Same as [`Self::analyze_food`]; a non-success status is recorded in
    /// `upstream_status`.
    pub async fn forward_food_analysis(&self, body: &Value) -> AppResult<Value> {
        self.post_json(endpoints::ANALYZE_FOOD, body).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(http.path = path, http.status = status.as_u16(), "Backend request failed");
            return Err(status_error(status, &text));
        }

        response.json().await.map_err(|e| {
            AppError::serialization(format!("{COACHING_BACKEND}: JSON parse error: {e}"))
        })
    }
}

/// Decode a JSON body whatever the status, falling back to a status error
/// when the body is not the expected shape
async fn read_json_any_status<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let status = response.status();
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        if status.is_success() {
            AppError::serialization(format!("{COACHING_BACKEND}: JSON parse error: {e}"))
        } else {
            status_error(status, &text)
        }
    })
}

fn status_error(status: StatusCode, body: &str) -> AppError {
    AppError::external_service(COACHING_BACKEND, format!("HTTP {status}: {body}"))
        .with_upstream_status(status.as_u16())
}
