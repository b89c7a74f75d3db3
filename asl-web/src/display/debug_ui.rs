//! Performance metrics for the debug overlay
//!
//! Tracks FPS, inference latency, and frame counters for real-time display.

use crate::session::FrameStats;

/// Weight of a new sample in the moving averages
const EMA_ALPHA: f32 = 0.1;

/// Moving-average timing samples reported by the host page
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DebugMetrics {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub inference_latency_ms: f32,
}

impl DebugMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record frame timing. Returns false if the sample was ignored.
    pub fn record_frame(&mut self, fps: f32, frame_time_ms: f32) -> bool {
        // Sanity check: ignore invalid times (tab backgrounded or first frame)
        if !(1.0..=200.0).contains(&frame_time_ms) {
            return false;
        }
        if !fps.is_finite() || fps < 0.0 {
            return false;
        }
        self.fps = ema(self.fps, fps);
        self.frame_time_ms = ema(self.frame_time_ms, frame_time_ms);
        true
    }

    pub fn record_inference_latency(&mut self, ms: f32) {
        if ms.is_finite() && ms >= 0.0 {
            self.inference_latency_ms = ema(self.inference_latency_ms, ms);
        }
    }

    /// Formatted overlay text (set as HTML text by the page)
    pub fn overlay_text(&self, stats: &FrameStats, window_len: usize, window_size: usize) -> String {
        format!(
            "FPS: {:.0} | Frame: {:.1}ms\n\
             Inference: {:.0}ms\n\
             Window: {}/{}\n\
             Frames: {} ok | {} failed | {} dropped ({:.0}% lost)",
            self.fps,
            self.frame_time_ms,
            self.inference_latency_ms,
            window_len,
            window_size,
            stats.ingested,
            stats.failed,
            stats.dropped,
            stats.loss_ratio() * 100.0,
        )
    }
}

fn ema(current: f32, sample: f32) -> f32 {
    // First sample seeds the average
    if current == 0.0 {
        sample
    } else {
        current * (1.0 - EMA_ALPHA) + sample * EMA_ALPHA
    }
}
