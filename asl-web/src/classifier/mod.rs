//! Classifier module - frame classifier adapter
//!
//! Note: the ASL model itself is external. Rust declares the input shape,
//! validates frames, and reduces class scores to a single prediction.

mod frame;
mod model;
mod scores;

pub use frame::{ImageFrame, InputShape, PixelFormat, MODEL_INPUT_HEIGHT, MODEL_INPUT_WIDTH};
pub use model::{ClassifierError, FrameClassifier, RawPrediction, ASL_LABELS};
pub use scores::{softmax, top_prediction, ScoreKind, ScoringClassifier};
