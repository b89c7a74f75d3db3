//! Bounded hand-off from the inference stage to the aggregator stage

use std::sync::mpsc::{SyncSender, TrySendError};

use super::PipelineError;
use crate::classifier::RawPrediction;

pub(crate) enum StageMessage {
    Prediction(RawPrediction),
    SetTranslating(bool),
    Shutdown,
}

/// Producer side of the prediction queue. Never blocks: a full queue means
/// the aggregator is behind and the frame is dropped.
pub struct PredictionSender {
    tx: SyncSender<StageMessage>,
}

impl PredictionSender {
    pub(crate) fn new(tx: SyncSender<StageMessage>) -> Self {
        Self { tx }
    }

    /// Queue a prediction. `Ok(false)` means the frame was dropped.
    pub fn offer(&self, prediction: RawPrediction) -> Result<bool, PipelineError> {
        match self.tx.try_send(StageMessage::Prediction(prediction)) {
            Ok(()) => Ok(true),
            Err(TrySendError::Full(_)) => {
                log::debug!("Aggregator queue full, dropping frame");
                Ok(false)
            }
            Err(TrySendError::Disconnected(_)) => Err(PipelineError::Disconnected),
        }
    }
}
