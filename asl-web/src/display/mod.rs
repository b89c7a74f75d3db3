//! Display module - text for the translation panel and debug overlay
//!
//! Re-exports only. All logic in submodules.

mod debug_ui;
mod text;

pub use debug_ui::DebugMetrics;
pub use text::DisplayText;
