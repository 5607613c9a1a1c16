// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Fixed label vocabulary of the skin-lesion classifier
//!
//! Order matches the model's `id2label` mapping; position i pairs with
//! logit i of the model output.

/// The closed, 7-class vocabulary the model was trained to emit.
pub const MODEL_LABELS: [&str; 7] = [
    "benign_keratosis-like_lesions",
    "basal_cell_carcinoma",
    "actinic_keratoses",
    "vascular_lesions",
    "melanocytic_Nevi",
    "melanoma",
    "dermatofibroma",
];
