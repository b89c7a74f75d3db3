//! Score-vector adapter: turns any per-class scoring backend into a
//! `FrameClassifier` by picking the top-1 class.

use super::frame::{ImageFrame, InputShape};
use super::model::{ClassifierError, FrameClassifier, RawPrediction, ASL_LABELS};

/// How the backend's raw output should be read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreKind {
    Probabilities,
    /// Unnormalized outputs, converted with softmax before ranking
    Logits,
}

/// Numerically stable softmax
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Pick the highest-scoring label. Equal scores resolve to the lower index.
pub fn top_prediction<S: AsRef<str>>(
    labels: &[S],
    scores: &[f32],
) -> Result<RawPrediction, ClassifierError> {
    if scores.is_empty() {
        return Err(ClassifierError::InferenceFailed("empty score vector".into()));
    }
    if scores.len() != labels.len() {
        return Err(ClassifierError::InferenceFailed(format!(
            "model returned {} scores for {} labels",
            scores.len(),
            labels.len()
        )));
    }
    if let Some(idx) = scores.iter().position(|s| !s.is_finite()) {
        return Err(ClassifierError::InferenceFailed(format!(
            "non-finite score for class {}",
            labels[idx].as_ref()
        )));
    }

    let mut best = 0;
    for (idx, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = idx;
        }
    }

    RawPrediction::new(labels[best].as_ref(), scores[best])
}

/// Classifier over a scoring function `frame -> per-class scores`
pub struct ScoringClassifier<F> {
    labels: Vec<String>,
    shape: InputShape,
    kind: ScoreKind,
    score: F,
}

impl<F> ScoringClassifier<F>
where
    F: FnMut(&ImageFrame) -> Result<Vec<f32>, ClassifierError>,
{
    pub fn new(labels: Vec<String>, shape: InputShape, kind: ScoreKind, score: F) -> Self {
        Self { labels, shape, kind, score }
    }

    /// ASL alphabet labels with the default 299×299 input
    pub fn asl(kind: ScoreKind, score: F) -> Self {
        let labels = ASL_LABELS.iter().map(|l| l.to_string()).collect();
        Self::new(labels, InputShape::default(), kind, score)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl<F> FrameClassifier for ScoringClassifier<F>
where
    F: FnMut(&ImageFrame) -> Result<Vec<f32>, ClassifierError>,
{
    fn input_shape(&self) -> InputShape {
        self.shape
    }

    fn is_ready(&self) -> bool {
        !self.labels.is_empty()
    }

    fn classify(&mut self, frame: &ImageFrame) -> Result<RawPrediction, ClassifierError> {
        if !self.is_ready() {
            return Err(ClassifierError::ModelUnavailable("no output labels".into()));
        }
        self.shape.check(frame)?;

        let raw = (self.score)(frame)?;
        let scores = match self.kind {
            ScoreKind::Probabilities => raw,
            ScoreKind::Logits => softmax(&raw),
        };
        top_prediction(&self.labels, &scores)
    }
}
