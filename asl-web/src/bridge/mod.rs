//! Bridge module - JS ↔ Rust communication
//!
//! Every #[wasm_bindgen] entry point except the start hook lives here.
//! The page pushes inference results in and pulls panel text out.

mod console;
mod translator;

pub use console::init_console_logger;

pub use translator::{
    // Session control
    init_translator,
    set_model_ready,
    set_model_unavailable,
    start_translation,
    stop_translation,
    toggle_translation,
    is_translating,
    // Frame input
    push_prediction,
    push_class_scores,
    report_frame_error,
    report_frame_dropped,
    get_model_input_shape,
    // Display output
    get_prediction_label,
    get_prediction_confidence,
    get_confidence_text,
    get_status_text,
    // Debug overlay
    set_frame_metrics,
    set_inference_latency,
    get_debug_overlay_text,
};
