// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Classification adapter around the pretrained skin-lesion ViT model
//!
//! The model is consumed as an opaque function: given a decoded image it
//! returns one (label, score) pair per class in its fixed vocabulary, in
//! model output order. Ranking and display concerns live in the presenter.

pub mod labels;
pub mod model_manager;
pub mod onnx_model;

pub use labels::MODEL_LABELS;
pub use model_manager::{ClassifierAvailability, ClassifierManager};
pub use onnx_model::{ModelConfig, SkinLesionModel};

use thiserror::Error;

/// One raw model output: a vocabulary label and its confidence in [0, 1].
///
/// Scores are independent per-class confidences as emitted by the model;
/// they are not guaranteed to sum to 1 and are never normalized downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub score: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Errors produced by the classification adapter
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The classifier could not be constructed (model fetch or session
    /// initialization failed). Cached for the process lifetime.
    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    /// A valid handle failed to classify one specific image. Scoped to that
    /// upload; never retried automatically.
    #[error("inference failed: {0}")]
    Inference(String),
}
