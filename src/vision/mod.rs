// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Image decoding for the upload boundary

pub mod image_utils;

pub use image_utils::{decode_image_bytes, detect_format, ImageError, ImageInfo};
