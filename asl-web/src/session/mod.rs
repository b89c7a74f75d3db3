//! Session module - translation on/off state and frame routing
//!
//! Re-exports only. All logic in submodules.

mod stats;
mod translator;

pub use stats::FrameStats;
pub use translator::{ModelStatus, TranslationState, Translator};
