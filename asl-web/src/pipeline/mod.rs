//! Pipeline module - threaded frame pipeline for native hosts
//!
//! inference stage --(bounded queue)--> aggregator stage --(latest slot)--> display
//!
//! Not built for wasm32, where the bridge drives a `Translator` directly on
//! the main thread.

mod channel;
mod display;
mod producer;
mod stage;

use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::config::ConfigError;

pub use channel::PredictionSender;
pub use display::{DisplayHandle, DisplayUpdate};
pub use producer::{FrameOutcome, FrameProducer};
pub use stage::Pipeline;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to spawn aggregator stage: {0}")]
    Spawn(std::io::Error),
    #[error("Aggregator stage is no longer running")]
    Disconnected,
    #[error("Aggregator stage panicked")]
    StagePanicked,
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
