//! Translator configuration
//!
//! Parsed from an optional JSON string handed over by JavaScript, or built
//! directly on native targets. Every field has a default.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of frames to smooth over (~0.3s at 30 fps)
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Predictions waiting for the aggregator stage before frames get dropped
pub const DEFAULT_FRAME_QUEUE_CAPACITY: usize = 2;

/// 10 seconds of frames at 30 fps
pub const MAX_WINDOW_SIZE: usize = 300;

pub const MAX_FRAME_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid translator config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Window size must be between 1 and 300 (got {0})")]
    InvalidWindowSize(usize),
    #[error("Frame queue capacity must be between 1 and 64 (got {0})")]
    InvalidQueueCapacity(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Smoothing buffer capacity. Larger is steadier but slower to react.
    pub window_size: usize,
    /// Bounded queue between the inference stage and the aggregator stage
    pub frame_queue_capacity: usize,
    pub log_level: LevelFilter,
}

impl TranslatorConfig {
    pub fn new(window_size: usize) -> Result<Self, ConfigError> {
        let config = Self {
            window_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_WINDOW_SIZE).contains(&self.window_size) {
            return Err(ConfigError::InvalidWindowSize(self.window_size));
        }
        if !(1..=MAX_FRAME_QUEUE_CAPACITY).contains(&self.frame_queue_capacity) {
            return Err(ConfigError::InvalidQueueCapacity(self.frame_queue_capacity));
        }
        Ok(())
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            frame_queue_capacity: DEFAULT_FRAME_QUEUE_CAPACITY,
            log_level: LevelFilter::Info,
        }
    }
}
