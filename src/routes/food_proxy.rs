// ABOUTME: Local HTTP proxy forwarding food analysis requests to the coaching backend
// ABOUTME: Passes JSON through, maps backend failures to {success:false,error}, answers CORS preflight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! Food analysis proxy
//!
//! `POST /api/food_analyzer` forwards the body to the backend's
//! `/api/analyze-food` and returns its JSON unchanged. When the backend
//! answers with a failure status, the proxy answers with the same status and
//! `{"success": false, "error": "Backend server error: <status>"}`. Any other
//! failure (unreachable backend, malformed body) is a 500 carrying the error
//! message.

use std::future;

use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};
use crate::external::BackendClient;
use seneca_core::models::FoodAnalysisResponse;

/// Food proxy routes
pub struct FoodProxyRoutes;

impl FoodProxyRoutes {
    /// Build the proxy router around a backend client
    pub fn routes(backend: BackendClient) -> Router {
        Router::new()
            .route(endpoints::FOOD_ANALYZER_PROXY, post(Self::handle_analyze))
            .with_state(backend)
            .layer(Self::cors())
            .layer(TraceLayer::new_for_http())
    }

    /// Serve the proxy on `listener` until the task is dropped or fails
    ///
    /// # Errors
    ///
    /// Returns an error if the server stops on an I/O failure.
    pub async fn serve(listener: TcpListener, backend: BackendClient) -> AppResult<()> {
        let address = listener
            .local_addr()
            .map_err(|e| AppError::internal(format!("Proxy listener has no address: {e}")))?;
        info!(
            %address,
            route = endpoints::FOOD_ANALYZER_PROXY,
            backend = backend.base_url(),
            "Food analysis proxy listening"
        );

        axum::serve(listener, Self::routes(backend))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Food proxy stopped: {e}")).with_source(e))
    }

    fn cors() -> CorsLayer {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    }

    async fn handle_analyze(State(backend): State<BackendClient>, body: String) -> Response {
        let request: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(e) => {
                error!(error = %e, "Food analyzer proxy received a malformed body");
                return failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
            }
        };

        match backend.forward_food_analysis(&request).await {
            Ok(result) => {
                info!("Food analysis completed");
                Json(result).into_response()
            }
            Err(e) => Self::backend_failure(&e),
        }
    }

    fn backend_failure(e: &AppError) -> Response {
        match e.upstream_status.and_then(|s| StatusCode::from_u16(s).ok()) {
            Some(status) => {
                error!(http.status = status.as_u16(), "Backend responded with an error status");
                failure(
                    status,
                    format!("Backend server error: {}", status.as_u16()),
                )
            }
            None => {
                error!(error = %e, "Food analyzer proxy error");
                failure(StatusCode::INTERNAL_SERVER_ERROR, e.message.clone())
            }
        }
    }
}

fn failure(status: StatusCode, message: String) -> Response {
    (status, Json(FoodAnalysisResponse::failure(message))).into_response()
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the task is dropped
        future::pending::<()>().await;
    }
    info!("Food analysis proxy shutting down");
}
