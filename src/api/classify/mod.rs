// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Classification API endpoint module
//!
//! Provides POST /v1/classify for analyzing an uploaded lesion photograph.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::classify_handler;
pub use request::UploadedImage;
pub use response::{ClassifyResponse, ResultEntry};
