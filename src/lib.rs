// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
pub mod api;
pub mod classifier;
pub mod config;
pub mod presenter;
pub mod version;
pub mod vision;

// Re-export main types
pub use api::{ApiError, ErrorResponse};
pub use classifier::{
    Classification, ClassifierAvailability, ClassifierError, ClassifierManager, ModelConfig,
    SkinLesionModel,
};
pub use config::NodeConfig;
pub use presenter::{present, RankedEntry, RankedResultSet};
