//! Classifier contract and per-frame predictions
//!
//! NOTE: In the browser the model runs in JavaScript (onnxruntime-web) and
//! results are pushed in through the bridge. Native hosts implement
//! `FrameClassifier` directly.

use thiserror::Error;

use super::frame::{ImageFrame, InputShape};

/// ASL alphabet labels (order matches model output)
pub const ASL_LABELS: [&str; 29] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O",
    "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
    "del", "nothing", "space",
];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("Classifier model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("Invalid classifier input: {0}")]
    InvalidInput(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
}

impl ClassifierError {
    /// Per-frame failures: drop the frame and keep going
    pub fn is_frame_local(&self) -> bool {
        matches!(self, ClassifierError::InvalidInput(_) | ClassifierError::InferenceFailed(_))
    }
}

/// Top-1 classifier output for a single frame
#[derive(Clone, Debug, PartialEq)]
pub struct RawPrediction {
    label: String,
    confidence: f32,
}

impl RawPrediction {
    /// Finite confidences are clamped into [0, 1]; NaN and infinities are
    /// treated as a failed inference.
    pub fn new(label: impl Into<String>, confidence: f32) -> Result<Self, ClassifierError> {
        if !confidence.is_finite() {
            return Err(ClassifierError::InferenceFailed(format!(
                "non-finite confidence {}",
                confidence
            )));
        }
        Ok(Self {
            label: label.into(),
            confidence: confidence.clamp(0.0, 1.0),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

/// Opaque image classifier returning its single best class
pub trait FrameClassifier {
    /// Shape every frame must be preprocessed to
    fn input_shape(&self) -> InputShape;

    /// Whether the underlying model is loaded
    fn is_ready(&self) -> bool {
        true
    }

    fn classify(&mut self, frame: &ImageFrame) -> Result<RawPrediction, ClassifierError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(RawPrediction::new("A", 1.5).unwrap().confidence(), 1.0);
        assert_eq!(RawPrediction::new("A", -0.2).unwrap().confidence(), 0.0);
        assert_eq!(RawPrediction::new("B", 0.42).unwrap().confidence(), 0.42);
    }

    #[test]
    fn non_finite_confidence_is_an_inference_failure() {
        let err = RawPrediction::new("A", f32::NAN).unwrap_err();
        assert!(matches!(err, ClassifierError::InferenceFailed(_)));
        assert!(RawPrediction::new("A", f32::INFINITY).is_err());
    }

    #[test]
    fn only_model_unavailable_is_session_level() {
        assert!(!ClassifierError::ModelUnavailable("x".into()).is_frame_local());
        assert!(ClassifierError::InvalidInput("x".into()).is_frame_local());
        assert!(ClassifierError::InferenceFailed("x".into()).is_frame_local());
    }

    #[test]
    fn label_set_covers_alphabet_and_controls() {
        assert_eq!(ASL_LABELS.len(), 29);
        assert_eq!(ASL_LABELS[0], "A");
        assert_eq!(ASL_LABELS[25], "Z");
        assert_eq!(ASL_LABELS[28], "space");
    }
}
