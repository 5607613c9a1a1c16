// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Upload extraction and validation for the classify endpoint

use crate::api::errors::ApiError;

/// File extensions the upload boundary accepts
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Content types the upload boundary accepts
const SUPPORTED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Maximum upload size (10MB)
const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// An image file received through the multipart upload boundary
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Raw file bytes
    pub bytes: Vec<u8>,
    /// Client-supplied file name, if any
    pub file_name: Option<String>,
    /// Client-supplied content type, if any
    pub content_type: Option<String>,
}

impl UploadedImage {
    /// Validate the upload before it reaches the classifier.
    ///
    /// Rejects empty and oversized payloads and any file whose name or
    /// content type is not one of the accepted image container formats.
    /// Actual decodability is checked later against the magic bytes.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.bytes.is_empty() {
            return Err(ApiError::ValidationError {
                field: "image".to_string(),
                message: "image is required".to_string(),
            });
        }

        if self.bytes.len() > MAX_UPLOAD_SIZE {
            return Err(ApiError::ValidationError {
                field: "image".to_string(),
                message: format!("image exceeds maximum size of {} bytes", MAX_UPLOAD_SIZE),
            });
        }

        if let Some(ref content_type) = self.content_type {
            if !SUPPORTED_CONTENT_TYPES.contains(&content_type.to_lowercase().as_str()) {
                return Err(ApiError::ValidationError {
                    field: "image".to_string(),
                    message: format!(
                        "unsupported content type '{}', supported: {:?}",
                        content_type, SUPPORTED_CONTENT_TYPES
                    ),
                });
            }
        }

        if let Some(ref name) = self.file_name {
            let extension = name.rsplit('.').next().unwrap_or("").to_lowercase();
            if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
                return Err(ApiError::ValidationError {
                    field: "image".to_string(),
                    message: format!(
                        "unsupported file type '{}', supported: {:?}",
                        name, SUPPORTED_EXTENSIONS
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: Option<&str>, content_type: Option<&str>, bytes: &[u8]) -> UploadedImage {
        UploadedImage {
            bytes: bytes.to_vec(),
            file_name: name.map(String::from),
            content_type: content_type.map(String::from),
        }
    }

    #[test]
    fn test_valid_jpeg_upload() {
        let u = upload(Some("lesion.jpg"), Some("image/jpeg"), &[0xFF, 0xD8, 0xFF]);
        assert!(u.validate().is_ok());
    }

    #[test]
    fn test_valid_upload_without_hints() {
        // Some clients omit filename and content type; magic-byte detection
        // still guards the decode step.
        let u = upload(None, None, &[0x89, 0x50]);
        assert!(u.validate().is_ok());
    }

    #[test]
    fn test_empty_upload_rejected() {
        let u = upload(Some("lesion.png"), Some("image/png"), &[]);
        assert!(matches!(
            u.validate(),
            Err(ApiError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let u = upload(Some("notes.txt"), None, b"hello");
        assert!(u.validate().is_err());
    }

    #[test]
    fn test_gif_rejected() {
        let u = upload(Some("anim.gif"), Some("image/gif"), b"GIF89a");
        assert!(u.validate().is_err());
    }

    #[test]
    fn test_uppercase_extension_accepted() {
        let u = upload(Some("PHOTO.JPG"), None, &[0xFF, 0xD8, 0xFF]);
        assert!(u.validate().is_ok());
    }

    #[test]
    fn test_oversized_upload_rejected() {
        let u = UploadedImage {
            bytes: vec![0u8; MAX_UPLOAD_SIZE + 1],
            file_name: Some("big.png".to_string()),
            content_type: Some("image/png".to_string()),
        };
        assert!(u.validate().is_err());
    }
}
