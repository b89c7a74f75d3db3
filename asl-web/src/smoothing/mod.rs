//! Smoothing module - temporal stabilization of per-frame predictions
//!
//! Re-exports only. All logic in submodules.

mod aggregator;
mod history;

pub use aggregator::{SmoothingAggregator, StabilizedPrediction, EMPTY_LABEL};
pub use history::PredictionHistory;
