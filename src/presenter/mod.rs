// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
//! Result presenter: raw model output to display-ready ranked results
//!
//! A pure, stateless transform. Sorting is stable (ties keep model output
//! order), scores are never normalized, nothing is filtered or thresholded,
//! and rounding applies to the display text only.

pub mod metadata;

pub use metadata::{GLOBAL_DISCLAIMER, NO_DESCRIPTION, PRIMARY_DISCLAIMER};

use std::cmp::Ordering;

use crate::classifier::Classification;

/// One display-ready entry of the ranked result list
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    /// Raw model label
    pub label: String,
    /// Localized display name (raw label for unknown classes)
    pub display_name: String,
    /// Untouched model confidence; drives progress-bar style rendering
    pub score: f32,
    /// `round(score * 100, 1)` — display value only
    pub percent: f32,
    /// Formatted percentage text, e.g. "91.0%"
    pub percent_text: String,
    /// Descriptive text; `Some` only on the primary entry
    pub description: Option<String>,
}

/// Ordered, annotated classification results for a single render cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedResultSet {
    pub entries: Vec<RankedEntry>,
}

impl RankedResultSet {
    /// The primary prediction: the highest-confidence entry, if any.
    pub fn primary(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Transforms raw classifier output into a display-ready ranked result set.
///
/// 1. Stable sort by confidence descending (equal scores keep input order).
/// 2. Localized display name per entry; unknown labels pass through.
/// 3. Index 0 is the primary prediction and carries the descriptive text
///    (generic placeholder for unknown labels).
/// 4. Display percentage is `round(score * 100, 1)`; the score itself keeps
///    full precision.
/// 5. Every class the model returned is emitted; empty in, empty out.
pub fn present(raw_results: &[Classification]) -> RankedResultSet {
    let mut sorted: Vec<&Classification> = raw_results.iter().collect();
    // Vec::sort_by is stable; NaN scores compare as equal and keep their slot
    sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let entries = sorted
        .into_iter()
        .enumerate()
        .map(|(i, result)| {
            let (percent, percent_text) = display_percent(result.score);
            RankedEntry {
                label: result.label.clone(),
                display_name: metadata::display_name(&result.label).to_string(),
                score: result.score,
                percent,
                percent_text,
                description: (i == 0).then(|| metadata::description(&result.label).to_string()),
            }
        })
        .collect();

    RankedResultSet { entries }
}

/// Rounds a confidence to one decimal place as a percentage, for display.
pub fn display_percent(score: f32) -> (f32, String) {
    let rounded = (score as f64 * 1000.0).round() / 10.0;
    (rounded as f32, format!("{:.1}%", rounded))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, f32)]) -> Vec<Classification> {
        pairs
            .iter()
            .map(|(label, score)| Classification::new(*label, *score))
            .collect()
    }

    #[test]
    fn test_length_preserved() {
        let input = raw(&[("a", 0.2), ("b", 0.3), ("c", 0.5)]);
        assert_eq!(present(&input).len(), 3);
    }

    #[test]
    fn test_sorted_descending() {
        let input = raw(&[("a", 0.1), ("b", 0.7), ("c", 0.2)]);
        let set = present(&input);
        for pair in set.entries.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(set.primary().unwrap().label, "b");
    }

    #[test]
    fn test_tie_keeps_input_order() {
        let input = raw(&[("a", 0.5), ("b", 0.5)]);
        let set = present(&input);
        assert_eq!(set.entries[0].label, "a");
        assert_eq!(set.entries[1].label, "b");
    }

    #[test]
    fn test_idempotent() {
        let input = raw(&[("melanoma", 0.91), ("dermatofibroma", 0.04), ("x", 0.05)]);
        assert_eq!(present(&input), present(&input));
    }

    #[test]
    fn test_scores_not_normalized() {
        // Independent per-class scores summing past 1.0 are shown as-is
        let input = raw(&[("a", 0.9), ("b", 0.8)]);
        let set = present(&input);
        assert_eq!(set.entries[0].score, 0.9);
        assert_eq!(set.entries[1].score, 0.8);
    }

    #[test]
    fn test_description_only_on_primary() {
        let input = raw(&[("melanoma", 0.91), ("dermatofibroma", 0.04)]);
        let set = present(&input);
        assert!(set.entries[0].description.is_some());
        assert!(set.entries[1].description.is_none());
    }

    #[test]
    fn test_unknown_label_fallbacks() {
        let input = raw(&[("mystery_label", 0.6)]);
        let set = present(&input);
        let primary = set.primary().unwrap();
        assert_eq!(primary.display_name, "mystery_label");
        assert_eq!(primary.description.as_deref(), Some(NO_DESCRIPTION));
    }

    #[test]
    fn test_empty_input() {
        let set = present(&[]);
        assert!(set.is_empty());
        assert!(set.primary().is_none());
    }

    #[test]
    fn test_melanoma_scenario() {
        let input = raw(&[
            ("melanoma", 0.91),
            ("melanocytic_Nevi", 0.05),
            ("dermatofibroma", 0.04),
        ]);
        let set = present(&input);

        let primary = set.primary().unwrap();
        assert_eq!(primary.label, "melanoma");
        assert_eq!(primary.display_name, "Melanoma");
        assert_eq!(primary.percent_text, "91.0%");
        assert_eq!(
            primary.description.as_deref(),
            Some(metadata::description("melanoma"))
        );

        assert_eq!(set.entries[1].percent_text, "5.0%");
        assert_eq!(set.entries[2].percent_text, "4.0%");
    }

    #[test]
    fn test_rounding_law() {
        for (score, expected) in [
            (0.91_f32, "91.0%"),
            (0.056, "5.6%"),
            (0.0, "0.0%"),
            (1.0, "100.0%"),
            (0.333_33, "33.3%"),
            (0.999_99, "100.0%"),
        ] {
            let (_, text) = display_percent(score);
            assert_eq!(text, expected, "score {score}");
        }
    }

    #[test]
    fn test_rounding_keeps_score_untouched() {
        let input = raw(&[("a", 0.123_456)]);
        let set = present(&input);
        assert_eq!(set.entries[0].score, 0.123_456);
        assert_eq!(set.entries[0].percent_text, "12.3%");
    }

    #[test]
    fn test_nan_score_does_not_panic() {
        let input = raw(&[("a", f32::NAN), ("b", 0.5)]);
        let set = present(&input);
        assert_eq!(set.len(), 2);
    }
}
