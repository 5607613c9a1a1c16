// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
pub mod classify;
pub mod errors;
pub mod gallery;
pub mod http_server;

pub use classify::{classify_handler, ClassifyResponse, ResultEntry, UploadedImage};
pub use errors::{ApiError, ErrorResponse};
pub use gallery::{gallery_handler, ExampleImage, ExamplesResponse};
pub use http_server::{build_router, start_server, AppState, HealthResponse};
