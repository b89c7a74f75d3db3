//! Smoothing aggregator - stabilizes noisy per-frame predictions
//!
//! Groups the window by label and reports the label with the highest mean
//! confidence. The displayed confidence is that mean, not the latest frame.

use std::collections::BTreeMap;

use super::history::PredictionHistory;
use crate::classifier::RawPrediction;
use crate::config::DEFAULT_WINDOW_SIZE;

/// Label shown when there is nothing to report
pub const EMPTY_LABEL: &str = "–";

/// Smoothed output for display
#[derive(Clone, Debug, PartialEq)]
pub struct StabilizedPrediction {
    pub label: String,
    pub confidence: f32,
}

impl StabilizedPrediction {
    pub fn empty() -> Self {
        Self {
            label: EMPTY_LABEL.to_string(),
            confidence: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label == EMPTY_LABEL
    }

    /// Confidence as a percentage (0-100)
    pub fn confidence_percent(&self) -> f32 {
        self.confidence * 100.0
    }

    /// e.g. "87.5%"
    pub fn confidence_text(&self) -> String {
        format!("{:.1}%", self.confidence_percent())
    }
}

impl Default for StabilizedPrediction {
    fn default() -> Self {
        Self::empty()
    }
}

/// Owns the prediction window and the last stabilized value.
///
/// Single writer: `ingest` and `reset` take `&mut self`. Cross-thread readers
/// go through `pipeline::DisplayHandle`, never through a shared aggregator.
#[derive(Clone, Debug)]
pub struct SmoothingAggregator {
    history: PredictionHistory,
    current: StabilizedPrediction,
}

impl SmoothingAggregator {
    pub fn new(window_size: usize) -> Self {
        Self {
            history: PredictionHistory::new(window_size),
            current: StabilizedPrediction::empty(),
        }
    }

    /// Append a prediction, evict past capacity, and recompute
    pub fn ingest(&mut self, prediction: RawPrediction) -> StabilizedPrediction {
        self.history.push(prediction);
        self.current = stabilize(&self.history);
        self.current.clone()
    }

    /// Drop all history; output returns to the empty value
    pub fn reset(&mut self) {
        self.history.clear();
        self.current = StabilizedPrediction::empty();
    }

    pub fn current_stabilized(&self) -> StabilizedPrediction {
        self.current.clone()
    }

    pub fn history(&self) -> &PredictionHistory {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn window_size(&self) -> usize {
        self.history.capacity()
    }
}

impl Default for SmoothingAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

/// Highest mean confidence per label wins. Equal means go to the
/// lexicographically smallest label.
fn stabilize(history: &PredictionHistory) -> StabilizedPrediction {
    let mut groups: BTreeMap<&str, Vec<f32>> = BTreeMap::new();
    for entry in history.iter() {
        groups.entry(entry.label()).or_default().push(entry.confidence());
    }

    let mut best: Option<(&str, f32)> = None;
    // BTreeMap iterates in label order, so a strict `>` keeps the smallest
    // label on ties.
    for (label, confidences) in groups.iter_mut() {
        let mean = mean_confidence(confidences);
        match best {
            Some((_, best_mean)) if mean <= best_mean => {}
            _ => best = Some((*label, mean)),
        }
    }

    match best {
        Some((label, confidence)) => StabilizedPrediction {
            label: label.to_string(),
            confidence,
        },
        None => StabilizedPrediction::empty(),
    }
}

/// Summed in sorted order so arrival order cannot change the result
fn mean_confidence(confidences: &mut [f32]) -> f32 {
    confidences.sort_by(f32::total_cmp);
    let sum: f64 = confidences.iter().map(|&c| c as f64).sum();
    (sum / confidences.len() as f64) as f32
}
