//! Display strings for the translation panel

use crate::session::TranslationState;
use crate::smoothing::StabilizedPrediction;

/// Everything the panel renders for one update
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayText {
    pub status: &'static str,
    /// Letter, or `None` while not translating
    pub label: Option<String>,
    pub confidence: Option<String>,
}

impl DisplayText {
    pub fn new(state: TranslationState, prediction: &StabilizedPrediction) -> Self {
        if !state.is_active() {
            return Self {
                status: state.status_text(),
                label: None,
                confidence: None,
            };
        }

        Self {
            status: state.status_text(),
            label: Some(prediction.label.clone()),
            confidence: Some(format!("Confidence: {}", prediction.confidence_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_panel_shows_letter_and_percentage() {
        let prediction = StabilizedPrediction {
            label: "A".into(),
            confidence: 0.8,
        };
        let text = DisplayText::new(TranslationState::Active, &prediction);
        assert_eq!(text.status, "Translating...");
        assert_eq!(text.label.as_deref(), Some("A"));
        assert_eq!(text.confidence.as_deref(), Some("Confidence: 80.0%"));
    }

    #[test]
    fn inactive_panel_hides_prediction() {
        let prediction = StabilizedPrediction {
            label: "A".into(),
            confidence: 0.8,
        };
        let text = DisplayText::new(TranslationState::Inactive, &prediction);
        assert_eq!(text.status, "Ready to Translate");
        assert!(text.label.is_none() && text.confidence.is_none());
    }
}
