// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Construct-once classifier handle
//!
//! The classifier is built lazily on first access and the outcome — success
//! or failure — is cached for the lifetime of the process. A failed
//! construction is never re-attempted: every later caller observes the same
//! unavailable state until restart.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::onnx_model::{ModelConfig, SkinLesionModel};

/// Lifecycle state of the memoized classifier handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierAvailability {
    /// Construction has not been attempted yet
    NotLoaded,
    /// Construction succeeded; the handle is shared and read-only
    Ready,
    /// Construction failed; cached until the process restarts
    Unavailable,
}

impl ClassifierAvailability {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierAvailability::NotLoaded => "not_loaded",
            ClassifierAvailability::Ready => "ready",
            ClassifierAvailability::Unavailable => "unavailable",
        }
    }
}

/// Manager owning the single memoized classifier instance
#[derive(Debug)]
pub struct ClassifierManager {
    config: ModelConfig,
    cell: OnceCell<Option<Arc<SkinLesionModel>>>,
}

impl ClassifierManager {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    /// Returns the shared classifier handle, constructing it on first call.
    ///
    /// All subsequent calls return the identical cached handle. `None` means
    /// construction failed and the whole pipeline is unavailable; callers
    /// surface that and take no further action.
    pub async fn get(&self) -> Option<Arc<SkinLesionModel>> {
        self.cell
            .get_or_init(|| async {
                match SkinLesionModel::new(self.config.clone()).await {
                    Ok(model) => {
                        info!("✅ Classifier ready: {}", model.model_name());
                        Some(Arc::new(model))
                    }
                    Err(e) => {
                        warn!("⚠️ Failed to load classifier: {:#}", e);
                        None
                    }
                }
            })
            .await
            .clone()
    }

    /// Reports the handle state without forcing construction.
    pub fn availability(&self) -> ClassifierAvailability {
        match self.cell.get() {
            None => ClassifierAvailability::NotLoaded,
            Some(Some(_)) => ClassifierAvailability::Ready,
            Some(None) => ClassifierAvailability::Unavailable,
        }
    }

    /// The model name this manager was configured with.
    pub fn model_name(&self) -> &str {
        &self.config.repo_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn failing_config() -> ModelConfig {
        // An explicit, nonexistent model path fails construction immediately
        // without ever touching the network.
        ModelConfig {
            repo_id: "test/never-fetched".to_string(),
            model_path: Some(PathBuf::from("/nonexistent/model.onnx")),
        }
    }

    #[tokio::test]
    async fn test_availability_before_first_access() {
        let manager = ClassifierManager::new(failing_config());
        assert_eq!(manager.availability(), ClassifierAvailability::NotLoaded);
    }

    #[tokio::test]
    async fn test_construction_failure_is_cached() {
        let manager = ClassifierManager::new(failing_config());

        assert!(manager.get().await.is_none());
        assert_eq!(manager.availability(), ClassifierAvailability::Unavailable);

        // Second access observes the cached failure, not a new attempt
        assert!(manager.get().await.is_none());
        assert_eq!(manager.availability(), ClassifierAvailability::Unavailable);
    }

    #[tokio::test]
    async fn test_availability_strings() {
        assert_eq!(ClassifierAvailability::NotLoaded.as_str(), "not_loaded");
        assert_eq!(ClassifierAvailability::Ready.as_str(), "ready");
        assert_eq!(ClassifierAvailability::Unavailable.as_str(), "unavailable");
    }

    #[tokio::test]
    async fn test_model_name_passthrough() {
        let manager = ClassifierManager::new(failing_config());
        assert_eq!(manager.model_name(), "test/never-fetched");
    }
}
