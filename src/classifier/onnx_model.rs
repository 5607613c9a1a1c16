// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! ONNX skin-lesion model wrapper
//!
//! This module wraps ONNX Runtime for running the pretrained ViT
//! skin-cancer classifier.
//!
//! Features:
//! - Model loading from disk or one-time fetch from the Hugging Face Hub
//! - CPU execution (no GPU contention for a demo workload)
//! - ViT preprocessing (224x224 resize, 0.5/0.5 normalization, NCHW)
//! - Softmax over logits, paired with the fixed label vocabulary

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::DynamicImage;
use ndarray::Array4;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;

use super::labels::MODEL_LABELS;
use super::{Classification, ClassifierError};

/// Side length the ViT expects
const IMAGE_SIZE: u32 = 224;

/// File fetched from the model repo
const MODEL_FILE: &str = "model.onnx";

/// Where the classifier's ONNX file comes from
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Hugging Face repo id (e.g. "Anwarkh1/Skin_Cancer-Image_Classification")
    pub repo_id: String,
    /// Explicit local model path; when set it is authoritative and a missing
    /// file is a hard construction failure (no hub fallback)
    pub model_path: Option<PathBuf>,
}

/// ONNX-based skin-lesion classifier (ViT)
///
/// Wraps an ONNX Runtime session and exposes the model as a single call:
/// decoded image in, one (label, score) pair per vocabulary class out.
///
/// # Thread Safety
/// The session is behind `Arc<Mutex<_>>`; `Session::run` takes `&mut self`
/// in ort 2.0, so concurrent callers serialize on the lock.
#[derive(Clone)]
pub struct SkinLesionModel {
    /// ONNX Runtime session
    session: Arc<Mutex<Session>>,

    /// Model name (repo id or file stem)
    model_name: String,
}

impl std::fmt::Debug for SkinLesionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkinLesionModel")
            .field("model_name", &self.model_name)
            .field("classes", &MODEL_LABELS.len())
            .finish_non_exhaustive()
    }
}

impl SkinLesionModel {
    /// Creates the classifier from the given model source
    ///
    /// # Errors
    /// Returns error if:
    /// - An explicit `model_path` is set but the file does not exist
    /// - The hub fetch fails (network, missing file in the repo)
    /// - ONNX Runtime initialization fails
    /// - The model does not output one logit per vocabulary class
    pub async fn new(config: ModelConfig) -> Result<Self> {
        let model_path = match &config.model_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("ONNX model file not found: {}", path.display());
                }
                path.clone()
            }
            None => fetch_from_hub(&config.repo_id).await?,
        };

        info!("Loading skin-lesion classifier from {}", model_path.display());

        let mut session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .context("Failed to set intra threads")?
            .commit_from_file(&model_path)
            .context(format!(
                "Failed to load ONNX model from {}",
                model_path.display()
            ))?;

        // Validate the output arity with a blank test inference before the
        // session is handed out. Wrap in a block so outputs are dropped
        // before moving the session.
        {
            let input = Array4::<f32>::zeros((1, 3, IMAGE_SIZE as usize, IMAGE_SIZE as usize));
            let outputs = session.run(ort::inputs![
                "pixel_values" => Value::from_array(input)?
            ])?;
            let logits = outputs[0]
                .try_extract_array::<f32>()
                .context("Failed to extract output tensor")?;
            let count = logits.len();
            if count != MODEL_LABELS.len() {
                anyhow::bail!(
                    "Model outputs {} logits (expected {} for the lesion vocabulary)",
                    count,
                    MODEL_LABELS.len()
                );
            }
        }

        info!("✅ Skin-lesion classifier loaded ({} classes)", MODEL_LABELS.len());

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            model_name: config.repo_id,
        })
    }

    /// Classifies a decoded image
    ///
    /// # Returns
    /// One `Classification` per vocabulary class, in model output order
    /// (NOT sorted); scores are softmax confidences in [0, 1].
    ///
    /// Side-effect-free; a failure is scoped to this one image and is never
    /// retried here.
    pub fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        let input = preprocess(image);

        let input_value = Value::from_array(input)
            .map_err(|e| ClassifierError::Inference(format!("input tensor: {e}")))?;

        let mut session = self.session.lock().unwrap();
        let outputs = session
            .run(ort::inputs!["pixel_values" => input_value])
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let logits = outputs[0]
            .try_extract_array::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let raw: Vec<f32> = logits.iter().copied().collect();
        if raw.len() != MODEL_LABELS.len() {
            return Err(ClassifierError::Inference(format!(
                "unexpected logit count: {} (expected {})",
                raw.len(),
                MODEL_LABELS.len()
            )));
        }

        let scores = softmax(&raw);

        Ok(MODEL_LABELS
            .iter()
            .zip(scores)
            .map(|(label, score)| Classification::new(*label, score))
            .collect())
    }

    /// Returns the model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Resolve the model file through the Hugging Face Hub cache
///
/// The hub client is blocking, so the fetch runs on the blocking pool.
/// A previously cached file is reused without touching the network.
async fn fetch_from_hub(repo_id: &str) -> Result<PathBuf> {
    let repo = repo_id.to_string();
    tokio::task::spawn_blocking(move || -> Result<PathBuf> {
        let api = hf_hub::api::sync::Api::new()
            .context("Failed to create Hugging Face Hub client")?;
        let path = api
            .model(repo.clone())
            .get(MODEL_FILE)
            .with_context(|| format!("Failed to fetch {} from {}", MODEL_FILE, repo))?;
        Ok(path)
    })
    .await
    .context("Model fetch task panicked")?
}

/// ViT preprocessing: 224x224 resize, scale to [0,1], normalize with
/// mean 0.5 / std 0.5 per channel, NCHW layout.
fn preprocess(image: &DynamicImage) -> Array4<f32> {
    let resized = image
        .resize_exact(IMAGE_SIZE, IMAGE_SIZE, FilterType::CatmullRom)
        .to_rgb8();

    let mut input = Array4::<f32>::zeros((1, 3, IMAGE_SIZE as usize, IMAGE_SIZE as usize));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for c in 0..3 {
            input[[0, c, y as usize, x as usize]] = (pixel[c] as f32 / 255.0 - 0.5) / 0.5;
        }
    }
    input
}

/// Numerically stable softmax
fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_shape_and_range() {
        let image = DynamicImage::new_rgb8(640, 480);
        let tensor = preprocess(&image);
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);
        // Black image normalizes to -1.0 everywhere
        assert!(tensor.iter().all(|&v| (v + 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_preprocess_white_image() {
        let mut buf = image::RgbImage::new(10, 10);
        for pixel in buf.pixels_mut() {
            *pixel = image::Rgb([255, 255, 255]);
        }
        let tensor = preprocess(&DynamicImage::ImageRgb8(buf));
        assert!(tensor.iter().all(|&v| (v - 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let scores = softmax(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let sum: f32 = scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(scores.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_softmax_uniform() {
        let scores = softmax(&[0.0; 7]);
        for s in scores {
            assert!((s - 1.0 / 7.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_softmax_large_logits() {
        // Max subtraction keeps this finite
        let scores = softmax(&[1000.0, 999.0]);
        assert!(scores.iter().all(|s| s.is_finite()));
        assert!(scores[0] > scores[1]);
    }

    #[tokio::test]
    #[ignore] // Only run if the model file is downloaded
    async fn test_model_creation() {
        let config = ModelConfig {
            repo_id: crate::version::DEFAULT_MODEL_REPO.to_string(),
            model_path: Some(PathBuf::from("./models/skin-lesion-vit/model.onnx")),
        };
        let model = SkinLesionModel::new(config).await.unwrap();
        let image = DynamicImage::new_rgb8(224, 224);
        let results = model.classify(&image).unwrap();
        assert_eq!(results.len(), MODEL_LABELS.len());
    }
}
