// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Node configuration parsed from environment variables

use std::env;
use std::path::PathBuf;

use crate::classifier::ModelConfig;
use crate::version;

/// Runtime configuration for the demo service
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Port the HTTP server binds to
    pub api_port: u16,
    /// Hugging Face repo the classifier is fetched from
    pub model_repo: String,
    /// Explicit local path to the ONNX model file; overrides the repo fetch
    pub model_path: Option<PathBuf>,
    /// Directory served under /static (example gallery images)
    pub static_dir: PathBuf,
    /// Construct the classifier at startup instead of on the first upload
    pub preload_model: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_port: 8080,
            model_repo: version::DEFAULT_MODEL_REPO.to_string(),
            model_path: None,
            static_dir: PathBuf::from("./static"),
            preload_model: false,
        }
    }
}

impl NodeConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(defaults.api_port);

        let model_repo = env::var("MODEL_REPO").unwrap_or(defaults.model_repo);

        let model_path = env::var("MODEL_PATH").ok().map(PathBuf::from);

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let preload_model = env::var("PRELOAD_MODEL")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        Self {
            api_port,
            model_repo,
            model_path,
            static_dir,
            preload_model,
        }
    }

    /// The classifier-facing slice of the configuration.
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            repo_id: self.model_repo.clone(),
            model_path: self.model_path.clone(),
        }
    }
}
