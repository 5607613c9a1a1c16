// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Classify response types

use serde::{Deserialize, Serialize};

use crate::presenter::{RankedEntry, RankedResultSet, PRIMARY_DISCLAIMER};

/// One ranked classification entry, display-ready
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    /// Raw model label
    pub label: String,
    /// Localized display name
    pub display_name: String,
    /// Full-precision confidence (drives the progress bar)
    pub confidence: f32,
    /// Percentage text rounded to one decimal, e.g. "91.0%"
    pub percent_text: String,
    /// Descriptive text; present only on the primary entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&RankedEntry> for ResultEntry {
    fn from(entry: &RankedEntry) -> Self {
        Self {
            label: entry.label.clone(),
            display_name: entry.display_name.clone(),
            confidence: entry.score,
            percent_text: entry.percent_text.clone(),
            description: entry.description.clone(),
        }
    }
}

/// Response from the classify endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    /// Ranked entries, highest confidence first; index 0 is the primary
    /// prediction. Empty when the model returned nothing.
    pub results: Vec<ResultEntry>,
    /// Raw label of the primary prediction, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Fixed non-diagnosis disclaimer shown with the primary prediction
    pub disclaimer: String,
    /// Uploaded image width in pixels
    pub image_width: u32,
    /// Uploaded image height in pixels
    pub image_height: u32,
    /// Model used for classification
    pub model: String,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl ClassifyResponse {
    /// Build a response from a ranked result set.
    pub fn new(
        ranked: &RankedResultSet,
        image_width: u32,
        image_height: u32,
        model: &str,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            results: ranked.entries.iter().map(ResultEntry::from).collect(),
            primary: ranked.primary().map(|entry| entry.label.clone()),
            disclaimer: PRIMARY_DISCLAIMER.to_string(),
            image_width,
            image_height,
            model: model.to_string(),
            processing_time_ms,
        }
    }
}
