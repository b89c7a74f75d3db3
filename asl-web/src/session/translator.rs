//! Translation session controller
//!
//! Owns the on/off state, model availability, and the smoothing aggregator.
//! Frames only reach the aggregator while translation is active.

use crate::classifier::{ClassifierError, FrameClassifier, ImageFrame, RawPrediction};
use crate::config::TranslatorConfig;
use crate::smoothing::{SmoothingAggregator, StabilizedPrediction};

use super::stats::FrameStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TranslationState {
    Active,
    #[default]
    Inactive,
}

impl TranslationState {
    pub fn is_active(&self) -> bool {
        matches!(self, TranslationState::Active)
    }

    /// Status line shown above the prediction
    pub fn status_text(&self) -> &'static str {
        match self {
            TranslationState::Active => "Translating...",
            TranslationState::Inactive => "Ready to Translate",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ModelStatus {
    #[default]
    Loading,
    Ready,
    Unavailable(String),
}

pub struct Translator {
    aggregator: SmoothingAggregator,
    state: TranslationState,
    model: ModelStatus,
    stats: FrameStats,
}

impl Translator {
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            aggregator: SmoothingAggregator::new(config.window_size),
            state: TranslationState::Inactive,
            model: ModelStatus::Loading,
            stats: FrameStats::default(),
        }
    }

    pub fn set_model_ready(&mut self) {
        self.model = ModelStatus::Ready;
    }

    /// Marks the model unusable and stops any running session
    pub fn set_model_unavailable(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("ASL model unavailable: {}", reason);
        self.model = ModelStatus::Unavailable(reason);
        if self.state.is_active() {
            self.stop();
        }
    }

    pub fn model_status(&self) -> &ModelStatus {
        &self.model
    }

    /// Begin a session with an empty window. Refused until the model is ready.
    pub fn start(&mut self) -> Result<(), ClassifierError> {
        match &self.model {
            ModelStatus::Ready => {}
            ModelStatus::Loading => {
                return Err(ClassifierError::ModelUnavailable("model is still loading".into()));
            }
            ModelStatus::Unavailable(reason) => {
                return Err(ClassifierError::ModelUnavailable(reason.clone()));
            }
        }

        self.aggregator.reset();
        self.stats = FrameStats::default();
        self.state = TranslationState::Active;
        log::info!("Translation started (window {})", self.aggregator.window_size());
        Ok(())
    }

    pub fn stop(&mut self) {
        self.state = TranslationState::Inactive;
        self.aggregator.reset();
        log::info!(
            "Translation stopped: {} ingested, {} failed, {} dropped",
            self.stats.ingested,
            self.stats.failed,
            self.stats.dropped
        );
    }

    /// Flip the session; returns the new state
    pub fn toggle(&mut self) -> Result<TranslationState, ClassifierError> {
        if self.state.is_active() {
            self.stop();
        } else {
            self.start()?;
        }
        Ok(self.state)
    }

    pub fn state(&self) -> TranslationState {
        self.state
    }

    /// Feed one classified frame. Ignored while inactive.
    pub fn submit(&mut self, prediction: RawPrediction) -> Option<StabilizedPrediction> {
        if !self.state.is_active() {
            self.stats.ignored += 1;
            return None;
        }
        self.stats.ingested += 1;
        Some(self.aggregator.ingest(prediction))
    }

    /// Classify a frame and feed the result. Failed frames are dropped and
    /// the last stabilized value stays on display.
    pub fn process_frame<C: FrameClassifier + ?Sized>(
        &mut self,
        classifier: &mut C,
        frame: &ImageFrame,
    ) -> StabilizedPrediction {
        if !self.state.is_active() {
            self.stats.ignored += 1;
            return self.displayed();
        }

        match classifier.classify(frame) {
            Ok(prediction) => {
                self.stats.ingested += 1;
                self.aggregator.ingest(prediction)
            }
            Err(err) => {
                self.record_failure(&err);
                self.displayed()
            }
        }
    }

    /// Count a classification failure reported by an external inference path
    pub fn record_failure(&mut self, err: &ClassifierError) {
        self.stats.failed += 1;
        match err {
            ClassifierError::ModelUnavailable(reason) => self.set_model_unavailable(reason.clone()),
            _ => log::debug!("Dropping frame: {}", err),
        }
    }

    /// Count a frame skipped because inference was still busy
    pub fn record_dropped(&mut self) {
        self.stats.dropped += 1;
    }

    /// What the display should show right now
    pub fn displayed(&self) -> StabilizedPrediction {
        if self.state.is_active() {
            self.aggregator.current_stabilized()
        } else {
            StabilizedPrediction::empty()
        }
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn aggregator(&self) -> &SmoothingAggregator {
        &self.aggregator
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(&TranslatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{InputShape, ScoreKind, ScoringClassifier};

    fn ready() -> Translator {
        let mut translator = Translator::default();
        translator.set_model_ready();
        translator
    }

    fn p(label: &str, confidence: f32) -> RawPrediction {
        RawPrediction::new(label, confidence).unwrap()
    }

    #[test]
    fn start_requires_ready_model() {
        let mut translator = Translator::default();
        assert!(matches!(translator.start(), Err(ClassifierError::ModelUnavailable(_))));

        translator.set_model_unavailable("failed to fetch model");
        assert_eq!(
            translator.start(),
            Err(ClassifierError::ModelUnavailable("failed to fetch model".into()))
        );
        assert_eq!(translator.state(), TranslationState::Inactive);
    }

    #[test]
    fn inactive_translator_ignores_frames() {
        let mut translator = ready();
        assert!(translator.submit(p("A", 0.9)).is_none());
        assert!(translator.aggregator().is_empty());
        assert_eq!(translator.stats().ignored, 1);
        assert!(translator.displayed().is_empty());
    }

    #[test]
    fn stop_forces_empty_display() {
        let mut translator = ready();
        translator.start().unwrap();
        translator.submit(p("A", 0.9));
        assert_eq!(translator.displayed().label, "A");

        translator.stop();
        assert_eq!(translator.displayed(), StabilizedPrediction::empty());
        assert!(translator.aggregator().is_empty());
    }

    #[test]
    fn restart_does_not_leak_previous_session() {
        let mut translator = ready();
        translator.start().unwrap();
        translator.submit(p("A", 0.9));
        translator.stop();
        translator.start().unwrap();

        let out = translator.submit(p("B", 0.3)).unwrap();
        assert_eq!(out.label, "B");
        assert_eq!(translator.aggregator().len(), 1);
    }

    #[test]
    fn toggle_flips_state() {
        let mut translator = ready();
        assert_eq!(translator.toggle().unwrap(), TranslationState::Active);
        assert_eq!(translator.toggle().unwrap(), TranslationState::Inactive);
    }

    #[test]
    fn failed_frames_keep_last_value() {
        let mut translator = ready();
        translator.start().unwrap();

        let mut outputs: Vec<Result<Vec<f32>, ClassifierError>> =
            vec![Ok(vec![0.1, 0.9]), Err(ClassifierError::InferenceFailed("busy".into()))];
        let mut classifier = ScoringClassifier::new(
            vec!["A".into(), "B".into()],
            InputShape::default(),
            ScoreKind::Probabilities,
            move |_: &ImageFrame| outputs.remove(0),
        );
        let frame = ImageFrame::blank(InputShape::default());

        let first = translator.process_frame(&mut classifier, &frame);
        assert_eq!(first.label, "B");
        let second = translator.process_frame(&mut classifier, &frame);
        assert_eq!(second, first);
        assert_eq!(translator.stats().failed, 1);
        assert_eq!(translator.aggregator().len(), 1);
    }

    #[test]
    fn model_loss_mid_session_stops_translation() {
        let mut translator = ready();
        translator.start().unwrap();
        translator.submit(p("A", 0.9));

        translator.record_failure(&ClassifierError::ModelUnavailable("context lost".into()));
        assert_eq!(translator.state(), TranslationState::Inactive);
        assert!(translator.displayed().is_empty());
        assert!(translator.start().is_err());
    }

    #[test]
    fn status_text_follows_state() {
        assert_eq!(TranslationState::Active.status_text(), "Translating...");
        assert_eq!(TranslationState::Inactive.status_text(), "Ready to Translate");
    }
}
