//! Aggregator stage thread
//!
//! Sole owner of the `Translator` on native targets. Reads predictions and
//! on/off signals from one bounded queue and publishes every change to the
//! display slot.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use super::channel::{PredictionSender, StageMessage};
use super::display::DisplayHandle;
use super::PipelineError;
use crate::config::TranslatorConfig;
use crate::session::{FrameStats, Translator};

pub struct Pipeline {
    control: SyncSender<StageMessage>,
    display: DisplayHandle,
    worker: Option<JoinHandle<FrameStats>>,
}

impl Pipeline {
    /// Start the aggregator stage. The returned sender is the only way to
    /// push predictions in.
    pub fn spawn(config: &TranslatorConfig) -> Result<(Self, PredictionSender), PipelineError> {
        config.validate()?;

        let (tx, rx) = sync_channel(config.frame_queue_capacity);
        let display = DisplayHandle::new();

        // Model readiness is checked by the producer before any frame is sent.
        let mut translator = Translator::new(config);
        translator.set_model_ready();

        let stage_display = display.clone();
        let worker = thread::Builder::new()
            .name("asl-aggregator".into())
            .spawn(move || run_stage(rx, translator, stage_display))
            .map_err(PipelineError::Spawn)?;

        log::debug!(
            "Aggregator stage started (window {}, queue {})",
            config.window_size,
            config.frame_queue_capacity
        );

        let pipeline = Self {
            control: tx.clone(),
            display,
            worker: Some(worker),
        };
        Ok((pipeline, PredictionSender::new(tx)))
    }

    pub fn display(&self) -> DisplayHandle {
        self.display.clone()
    }

    /// Turn translation on or off. Queued behind pending predictions and
    /// never dropped.
    pub fn set_translating(&self, active: bool) -> Result<(), PipelineError> {
        self.control
            .send(StageMessage::SetTranslating(active))
            .map_err(|_| PipelineError::Disconnected)
    }

    /// Stop the stage and return its frame counters
    pub fn shutdown(mut self) -> Result<FrameStats, PipelineError> {
        self.stop_worker()
    }

    fn stop_worker(&mut self) -> Result<FrameStats, PipelineError> {
        let Some(worker) = self.worker.take() else {
            return Ok(FrameStats::default());
        };
        // The stage may already have exited; joining is what matters.
        let _ = self.control.send(StageMessage::Shutdown);
        worker.join().map_err(|_| PipelineError::StagePanicked)
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        if let Err(err) = self.stop_worker() {
            log::warn!("Aggregator stage did not shut down cleanly: {}", err);
        }
    }
}

fn run_stage(rx: Receiver<StageMessage>, mut translator: Translator, display: DisplayHandle) -> FrameStats {
    let mut total = FrameStats::default();

    for message in rx.iter() {
        match message {
            StageMessage::Prediction(prediction) => {
                if let Some(stabilized) = translator.submit(prediction) {
                    display.publish(stabilized);
                }
            }
            StageMessage::SetTranslating(true) => {
                let previous = translator.stats();
                match translator.start() {
                    Ok(()) => total.merge(&previous),
                    Err(err) => log::warn!("Cannot start translation: {}", err),
                }
                display.publish(translator.displayed());
            }
            StageMessage::SetTranslating(false) => {
                translator.stop();
                display.publish(translator.displayed());
            }
            StageMessage::Shutdown => break,
        }
    }

    total.merge(&translator.stats());
    log::debug!("Aggregator stage exiting after {} frames", total.total());
    total
}
