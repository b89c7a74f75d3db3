//! Per-session frame counters

/// What happened to the frames of one translation session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Predictions pushed into the smoothing window
    pub ingested: u64,
    /// Frames that arrived while translation was off
    pub ignored: u64,
    /// Frames whose classification failed
    pub failed: u64,
    /// Frames skipped because the next stage was still busy
    pub dropped: u64,
}

impl FrameStats {
    pub fn total(&self) -> u64 {
        self.ingested + self.ignored + self.failed + self.dropped
    }

    /// Fraction of active frames that never reached the window
    pub fn loss_ratio(&self) -> f32 {
        let active = self.ingested + self.failed + self.dropped;
        if active == 0 {
            0.0
        } else {
            (self.failed + self.dropped) as f32 / active as f32
        }
    }

    pub fn merge(&mut self, other: &FrameStats) {
        self.ingested += other.ingested;
        self.ignored += other.ignored;
        self.failed += other.failed;
        self.dropped += other.dropped;
    }
}
