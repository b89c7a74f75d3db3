//! ASL Web - real-time ASL letter recognition core
//! 
//! The camera and the pretrained model live in JavaScript. This crate
//! validates frames, smooths per-frame predictions into a stable letter,
//! tracks the translation session, and formats what the panel shows.
//! Native hosts get the same core as a threaded pipeline.

pub mod classifier;
pub mod config;
pub mod display;
pub mod session;
pub mod smoothing;

#[cfg(not(target_arch = "wasm32"))]
pub mod pipeline;

mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    get_confidence_text, get_debug_overlay_text, get_model_input_shape, get_prediction_confidence,
    get_prediction_label, get_status_text, init_translator, is_translating, push_class_scores,
    push_prediction, report_frame_dropped, report_frame_error, set_frame_metrics,
    set_inference_latency, set_model_ready, set_model_unavailable, start_translation,
    stop_translation, toggle_translation,
};

pub use classifier::{ClassifierError, FrameClassifier, ImageFrame, InputShape, RawPrediction};
pub use config::{ConfigError, TranslatorConfig};
pub use session::{TranslationState, Translator};
pub use smoothing::{SmoothingAggregator, StabilizedPrediction};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    bridge::init_console_logger(TranslatorConfig::default().log_level);
}
