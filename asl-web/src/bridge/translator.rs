//! Translator integration - connects JS inference results with smoothing
//!
//! The ASL model runs in JavaScript (onnxruntime-web). JS pushes each
//! frame's result here and reads back the stabilized letter for the panel.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::classifier::{
    softmax, top_prediction, ClassifierError, InputShape, RawPrediction, ASL_LABELS,
};
use crate::config::{ConfigError, TranslatorConfig};
use crate::display::{DebugMetrics, DisplayText};
use crate::session::{ModelStatus, Translator};

impl From<ClassifierError> for JsValue {
    fn from(err: ClassifierError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[derive(Default)]
struct BridgeState {
    translator: Translator,
    metrics: DebugMetrics,
}

// Thread-local storage (WASM is single-threaded, so this is the single writer)
thread_local! {
    static BRIDGE: RefCell<BridgeState> = RefCell::new(BridgeState::default());
}

// ============================================================================
// SESSION CONTROL
// ============================================================================

/// Apply a JSON config (or defaults). Resets any running session but keeps
/// the model status.
#[wasm_bindgen]
pub fn init_translator(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => TranslatorConfig::from_json(&json)?,
        None => TranslatorConfig::default(),
    };
    log::set_max_level(config.log_level);

    BRIDGE.with(|cell| {
        let mut state = cell.borrow_mut();
        let model = state.translator.model_status().clone();
        state.translator = Translator::new(&config);
        match model {
            ModelStatus::Ready => state.translator.set_model_ready(),
            ModelStatus::Unavailable(reason) => state.translator.set_model_unavailable(reason),
            ModelStatus::Loading => {}
        }
    });
    log::info!("Translator configured (window {})", config.window_size);
    Ok(())
}

/// Called from JS when the ONNX model is loaded
#[wasm_bindgen]
pub fn set_model_ready() {
    BRIDGE.with(|cell| cell.borrow_mut().translator.set_model_ready());
    log::info!("ASL classifier ready");
}

/// Called from JS when the model failed to load
#[wasm_bindgen]
pub fn set_model_unavailable(reason: String) {
    BRIDGE.with(|cell| cell.borrow_mut().translator.set_model_unavailable(reason));
}

#[wasm_bindgen]
pub fn start_translation() -> Result<(), JsValue> {
    BRIDGE.with(|cell| cell.borrow_mut().translator.start())?;
    Ok(())
}

#[wasm_bindgen]
pub fn stop_translation() {
    BRIDGE.with(|cell| cell.borrow_mut().translator.stop());
}

/// Returns whether translation is now active
#[wasm_bindgen]
pub fn toggle_translation() -> Result<bool, JsValue> {
    let state = BRIDGE.with(|cell| cell.borrow_mut().translator.toggle())?;
    Ok(state.is_active())
}

#[wasm_bindgen]
pub fn is_translating() -> bool {
    BRIDGE.with(|cell| cell.borrow().translator.state().is_active())
}

// ============================================================================
// FRAME INPUT
// ============================================================================

/// Top-1 result for one frame. Returns true if it entered the window.
#[wasm_bindgen]
pub fn push_prediction(label: String, confidence: f32) -> bool {
    BRIDGE.with(|cell| {
        let mut state = cell.borrow_mut();
        match RawPrediction::new(label, confidence) {
            Ok(prediction) => state.translator.submit(prediction).is_some(),
            Err(err) => {
                state.translator.record_failure(&err);
                false
            }
        }
    })
}

/// Full model output for one frame, in `ASL_LABELS` order.
/// Set `logits` when the model has no softmax layer.
#[wasm_bindgen]
pub fn push_class_scores(scores: &[f32], logits: bool) -> bool {
    let scores = if logits { softmax(scores) } else { scores.to_vec() };
    BRIDGE.with(|cell| {
        let mut state = cell.borrow_mut();
        match top_prediction(&ASL_LABELS, &scores) {
            Ok(prediction) => state.translator.submit(prediction).is_some(),
            Err(err) => {
                state.translator.record_failure(&err);
                false
            }
        }
    })
}

/// Inference or preprocessing failed in JS for one frame
#[wasm_bindgen]
pub fn report_frame_error(message: String) {
    let err = ClassifierError::InferenceFailed(message);
    BRIDGE.with(|cell| cell.borrow_mut().translator.record_failure(&err));
}

/// JS skipped a frame because the previous inference was still running
#[wasm_bindgen]
pub fn report_frame_dropped() {
    BRIDGE.with(|cell| cell.borrow_mut().translator.record_dropped());
}

/// [width, height, bytes per pixel] the JS preprocessing must produce
#[wasm_bindgen]
pub fn get_model_input_shape() -> Vec<u32> {
    let shape = InputShape::default();
    vec![shape.width, shape.height, shape.format.bytes_per_pixel() as u32]
}

// ============================================================================
// DISPLAY OUTPUT
// ============================================================================

#[wasm_bindgen]
pub fn get_prediction_label() -> String {
    BRIDGE.with(|cell| cell.borrow().translator.displayed().label)
}

#[wasm_bindgen]
pub fn get_prediction_confidence() -> f32 {
    BRIDGE.with(|cell| cell.borrow().translator.displayed().confidence)
}

/// e.g. "Confidence: 87.5%", empty while not translating
#[wasm_bindgen]
pub fn get_confidence_text() -> String {
    BRIDGE.with(|cell| panel_text(&cell.borrow().translator).confidence.unwrap_or_default())
}

#[wasm_bindgen]
pub fn get_status_text() -> String {
    BRIDGE.with(|cell| panel_text(&cell.borrow().translator).status.to_string())
}

fn panel_text(translator: &Translator) -> DisplayText {
    DisplayText::new(translator.state(), &translator.displayed())
}

// ============================================================================
// DEBUG OVERLAY
// ============================================================================

/// Set frame timing (called from JS each frame)
#[wasm_bindgen]
pub fn set_frame_metrics(fps: f32, frame_time_ms: f32) {
    BRIDGE.with(|cell| {
        cell.borrow_mut().metrics.record_frame(fps, frame_time_ms);
    });
}

/// Set ONNX inference latency
#[wasm_bindgen]
pub fn set_inference_latency(ms: f32) {
    BRIDGE.with(|cell| cell.borrow_mut().metrics.record_inference_latency(ms));
}

/// Get formatted overlay text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_debug_overlay_text() -> String {
    BRIDGE.with(|cell| {
        let state = cell.borrow();
        let aggregator = state.translator.aggregator();
        state.metrics.overlay_text(
            &state.translator.stats(),
            aggregator.len(),
            aggregator.window_size(),
        )
    })
}
