//! Rolling prediction history for the smoothing window
//!
//! Stores the last N raw predictions, oldest first.

use std::collections::VecDeque;

use crate::classifier::RawPrediction;

/// Fixed-capacity FIFO of recent predictions
#[derive(Clone, Debug)]
pub struct PredictionHistory {
    entries: VecDeque<RawPrediction>,
    capacity: usize,
}

impl PredictionHistory {
    /// A capacity of 0 is treated as 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Push a new prediction, returning the evicted oldest entry if the
    /// window was already full
    pub fn push(&mut self, prediction: RawPrediction) -> Option<RawPrediction> {
        self.entries.push_back(prediction);

        if self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &RawPrediction> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
