// ABOUTME: Integration tests for food photo analysis against a local mock backend
// ABOUTME: Successful analyses, rejected photos with and without a reason, and user-facing failure text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use seneca_coach::constants::{limits, messages};
use seneca_coach::errors::ErrorCode;
use seneca_coach::external::BackendClient;
use seneca_coach::food::{analyze_photo, FoodImage};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn photo() -> FoodImage {
    FoodImage::from_bytes(PNG_MAGIC.to_vec(), "image/png", limits::MAX_IMAGE_BYTES).unwrap()
}

async fn backend_answering(status: StatusCode, body: Value) -> BackendClient {
    common::init_test_logging();
    let router = Router::new().route(
        "/api/analyze-food",
        post(move |Json(request): Json<Value>| async move {
            assert_eq!(request["user_id"], "user_00001");
            assert!(request["image_data"]
                .as_str()
                .unwrap()
                .starts_with("data:image/png;base64,"));
            (status, Json(body))
        }),
    );
    BackendClient::new(common::spawn_server(router).await)
}

#[tokio::test]
async fn test_successful_analysis_is_returned() {
    let client = backend_answering(
        StatusCode::OK,
        json!({
            "success": true,
            "description": "A bowl of oatmeal with berries",
            "nutrition_data": {
                "items": [{
                    "name": "Oatmeal",
                    "portion": "1 cup",
                    "calories": 310.0,
                    "protein_g": 11.0,
                    "carbs_g": 54.0,
                    "fat_g": 6.0,
                    "confidence": 0.9
                }],
                "meal_totals": {
                    "total_calories": 310.0,
                    "total_protein_g": 11.0,
                    "total_carbs_g": 54.0,
                    "total_fat_g": 6.0
                }
            }
        }),
    )
    .await;

    let result = analyze_photo(&client, &photo(), "user_00001").await.unwrap();
    assert!(result.success);
    assert_eq!(result.nutrition_data.unwrap().items[0].name, "Oatmeal");
}

#[tokio::test]
async fn test_rejected_photo_keeps_backend_reason() {
    let client = backend_answering(
        StatusCode::OK,
        json!({"success": false, "error": "No food detected in the image"}),
    )
    .await;

    let error = analyze_photo(&client, &photo(), "user_00001")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AnalysisFailed);
    assert_eq!(error.user_message(), "No food detected in the image");
}

#[tokio::test]
async fn test_rejection_without_reason_uses_default_text() {
    let client = backend_answering(StatusCode::OK, json!({"success": false})).await;

    let error = analyze_photo(&client, &photo(), "user_00001")
        .await
        .unwrap_err();
    assert_eq!(error.user_message(), messages::ANALYSIS_FAILED);
}

#[tokio::test]
async fn test_backend_error_status_shows_static_message() {
    let client = backend_answering(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({"detail": "vision model offline"}),
    )
    .await;

    let error = analyze_photo(&client, &photo(), "user_00001")
        .await
        .unwrap_err();
    assert_eq!(error.upstream_status, Some(503));
    let shown = error.user_message();
    assert_eq!(shown, messages::CHAT_CONNECTION_ERROR);
    assert!(!shown.contains("Coaching backend"));
    assert!(!shown.contains("vision model offline"));
}

#[tokio::test]
async fn test_unreachable_backend_shows_static_message() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = BackendClient::new(format!("http://{address}"));
    let error = analyze_photo(&client, &photo(), "user_00001")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert!(error.message.contains("Coaching backend"));
    assert_eq!(error.user_message(), messages::CHAT_CONNECTION_ERROR);
}
