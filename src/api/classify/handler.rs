// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Classify endpoint handler

use axum::extract::{Multipart, State};
use axum::Json;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::request::UploadedImage;
use super::response::ClassifyResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::{ApiErrorResponse, AppState};
use crate::presenter::present;
use crate::vision::decode_image_bytes;

/// POST /v1/classify - Analyze an uploaded lesion photograph
///
/// Accepts a multipart form with an `image` field (JPEG/PNG/WebP) and
/// returns the ranked class probabilities with localized labels.
///
/// # Response
/// - `results`: every class the model returned, confidence descending;
///   index 0 is the primary prediction and carries its description
/// - `primary`: raw label of the primary prediction
/// - `disclaimer`: fixed non-diagnosis text
/// - `imageWidth`/`imageHeight`, `model`, `processingTimeMs`
///
/// # Errors
/// - 400 Bad Request: missing/invalid upload or undecodable image;
///   scoped to this upload, the user may simply upload again
/// - 503 Service Unavailable: classifier construction failed (cached for
///   the process lifetime, never retried here)
/// - 500 Internal Server Error: inference failed
pub async fn classify_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ClassifyResponse>, ApiErrorResponse> {
    let request_id = Uuid::new_v4().to_string();
    let fail = |err: ApiError| ApiErrorResponse::with_request_id(err, request_id.clone());

    // 1. Pull the image field out of the multipart form
    let mut upload: Option<UploadedImage> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| fail(ApiError::InvalidRequest(format!("malformed multipart body: {e}"))))?
    {
        if field.name() == Some("image") {
            let file_name = field.file_name().map(String::from);
            let content_type = field.content_type().map(String::from);
            let bytes = field.bytes().await.map_err(|e| {
                fail(ApiError::InvalidRequest(format!(
                    "failed to read upload: {e}"
                )))
            })?;
            upload = Some(UploadedImage {
                bytes: bytes.to_vec(),
                file_name,
                content_type,
            });
            break;
        }
    }

    let upload = upload.ok_or_else(|| {
        fail(ApiError::ValidationError {
            field: "image".to_string(),
            message: "image is required".to_string(),
        })
    })?;

    // 2. Validate at the upload boundary
    if let Err(e) = upload.validate() {
        warn!("Upload validation failed: {}", e);
        return Err(fail(e));
    }

    // 3. Decode
    let (image, image_info) = decode_image_bytes(&upload.bytes).map_err(|e| {
        warn!("Failed to decode image: {}", e);
        fail(ApiError::InvalidRequest(format!("invalid image: {e}")))
    })?;

    debug!(
        "Decoded upload: {}x{}, {} bytes",
        image_info.width, image_info.height, image_info.size_bytes
    );

    // 4. Get the memoized classifier handle
    let model = state.classifier.get().await.ok_or_else(|| {
        warn!("Classifier unavailable");
        fail(ApiError::ServiceUnavailable(
            "analysis unavailable: classifier failed to load".to_string(),
        ))
    })?;

    // 5. Classify
    let start = Instant::now();
    let raw_results = model.classify(&image).map_err(|e| {
        warn!("Classification failed: {}", e);
        fail(ApiError::InferenceFailed(e.to_string()))
    })?;
    let processing_time_ms = start.elapsed().as_millis() as u64;

    // 6. Rank and annotate for display
    let ranked = present(&raw_results);

    info!(
        "Classification complete: {} classes, primary {:?}, {}ms",
        ranked.len(),
        ranked.primary().map(|p| p.label.as_str()),
        processing_time_ms
    );

    // 7. Build response
    Ok(Json(ClassifyResponse::new(
        &ranked,
        image_info.width,
        image_info.height,
        model.model_name(),
        processing_time_ms,
    )))
}
