//! Capture/inference stage: classify frames and queue the results

use super::channel::PredictionSender;
use super::PipelineError;
use crate::classifier::{ClassifierError, FrameClassifier, ImageFrame};
use crate::session::FrameStats;

/// What happened to one frame on the producer side
#[derive(Debug, PartialEq)]
pub enum FrameOutcome {
    Queued,
    /// Aggregator queue was full
    Dropped,
    /// Classification failed for this frame only
    Failed(ClassifierError),
}

pub struct FrameProducer<C> {
    classifier: C,
    sender: PredictionSender,
    stats: FrameStats,
}

impl<C: FrameClassifier> FrameProducer<C> {
    /// Refuses to start without a loaded model
    pub fn new(classifier: C, sender: PredictionSender) -> Result<Self, ClassifierError> {
        if !classifier.is_ready() {
            return Err(ClassifierError::ModelUnavailable("classifier is not loaded".into()));
        }
        Ok(Self {
            classifier,
            sender,
            stats: FrameStats::default(),
        })
    }

    /// Classify and queue one frame. Only a lost model or a closed pipeline
    /// is an error; everything else drops the frame.
    pub fn process(&mut self, frame: &ImageFrame) -> Result<FrameOutcome, PipelineError> {
        match self.classifier.classify(frame) {
            Ok(prediction) => {
                if self.sender.offer(prediction)? {
                    Ok(FrameOutcome::Queued)
                } else {
                    self.stats.dropped += 1;
                    Ok(FrameOutcome::Dropped)
                }
            }
            Err(err) if err.is_frame_local() => {
                log::debug!("Dropping frame: {}", err);
                self.stats.failed += 1;
                Ok(FrameOutcome::Failed(err))
            }
            Err(err) => Err(PipelineError::Classifier(err)),
        }
    }

    /// Failed and dropped frame counts
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}
