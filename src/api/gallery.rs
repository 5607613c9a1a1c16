// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Example gallery endpoint
//!
//! Static reference content: one illustrative image per vocabulary class,
//! paired with its localized caption. Purely informational, not part of the
//! inference path.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::classifier::MODEL_LABELS;
use crate::presenter::metadata;

/// One gallery entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleImage {
    /// Raw model label
    pub label: String,
    /// Localized caption
    pub caption: String,
    /// Image URL under the static mount
    pub url: String,
}

/// Response from the gallery endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplesResponse {
    pub examples: Vec<ExampleImage>,
}

impl ExamplesResponse {
    pub fn build() -> Self {
        let examples = MODEL_LABELS
            .iter()
            .copied()
            .map(|label| ExampleImage {
                label: label.to_string(),
                caption: metadata::display_name(label).to_string(),
                url: format!("/static/examples/{}.jpg", slug(label)),
            })
            .collect();
        Self { examples }
    }
}

/// File-name slug for a label
fn slug(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// GET /v1/examples - Gallery metadata for the demo page
pub async fn gallery_handler() -> Json<ExamplesResponse> {
    Json(ExamplesResponse::build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_per_vocabulary_class() {
        let response = ExamplesResponse::build();
        assert_eq!(response.examples.len(), MODEL_LABELS.len());
    }

    #[test]
    fn test_captions_are_localized() {
        let response = ExamplesResponse::build();
        let melanoma = response
            .examples
            .iter()
            .find(|e| e.label == "melanoma")
            .unwrap();
        assert_eq!(melanoma.caption, "Melanoma");
        assert_eq!(melanoma.url, "/static/examples/melanoma.jpg");
    }

    #[test]
    fn test_slug_sanitizes() {
        assert_eq!(slug("benign_keratosis-like_lesions"), "benign_keratosis_like_lesions");
        assert_eq!(slug("melanocytic_Nevi"), "melanocytic_nevi");
    }

    #[test]
    fn test_serialization_camel_case() {
        let response = ExamplesResponse::build();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"caption\""));
        assert!(json.contains("\"url\""));
    }
}
