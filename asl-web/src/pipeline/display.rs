//! Latest-value hand-off from the aggregator stage to the display
//!
//! The display only cares about the newest stabilized prediction, so this is
//! a single slot with a sequence number rather than a queue.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

use crate::smoothing::StabilizedPrediction;

/// A published stabilized value. `sequence` starts at 0 (nothing published)
/// and increases by one per publish.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayUpdate {
    pub sequence: u64,
    pub prediction: StabilizedPrediction,
}

#[derive(Clone)]
pub struct DisplayHandle {
    shared: Arc<(Mutex<DisplayUpdate>, Condvar)>,
}

impl DisplayHandle {
    pub(crate) fn new() -> Self {
        let initial = DisplayUpdate {
            sequence: 0,
            prediction: StabilizedPrediction::empty(),
        };
        Self {
            shared: Arc::new((Mutex::new(initial), Condvar::new())),
        }
    }

    pub(crate) fn publish(&self, prediction: StabilizedPrediction) {
        let (lock, cvar) = &*self.shared;
        let mut slot = lock.lock().unwrap_or_else(PoisonError::into_inner);
        slot.sequence += 1;
        slot.prediction = prediction;
        cvar.notify_all();
    }

    pub fn current(&self) -> DisplayUpdate {
        let (lock, _) = &*self.shared;
        lock.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Block until something newer than `seen` is published, or `timeout`
    /// elapses (returns `None`).
    pub fn wait_for_update(&self, seen: u64, timeout: Duration) -> Option<DisplayUpdate> {
        let (lock, cvar) = &*self.shared;
        let slot = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let (slot, _) = cvar
            .wait_timeout_while(slot, timeout, |update| update.sequence <= seen)
            .unwrap_or_else(PoisonError::into_inner);

        if slot.sequence > seen {
            Some(slot.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_empty_at_sequence_zero() {
        let display = DisplayHandle::new();
        let current = display.current();
        assert_eq!(current.sequence, 0);
        assert!(current.prediction.is_empty());
    }

    #[test]
    fn keeps_only_the_latest_value() {
        let display = DisplayHandle::new();
        for (label, confidence) in [("A", 0.4), ("B", 0.6)] {
            display.publish(StabilizedPrediction {
                label: label.into(),
                confidence,
            });
        }
        let current = display.current();
        assert_eq!(current.sequence, 2);
        assert_eq!(current.prediction.label, "B");
    }

    #[test]
    fn wait_times_out_without_publish() {
        let display = DisplayHandle::new();
        assert!(display.wait_for_update(0, Duration::from_millis(10)).is_none());
    }

    #[test]
    fn wait_wakes_on_publish_from_another_thread() {
        let display = DisplayHandle::new();
        let writer = display.clone();
        let handle = thread::spawn(move || {
            writer.publish(StabilizedPrediction {
                label: "L".into(),
                confidence: 0.9,
            });
        });

        let update = display.wait_for_update(0, Duration::from_secs(5)).unwrap();
        assert_eq!(update.sequence, 1);
        assert_eq!(update.prediction.label, "L");
        handle.join().unwrap();
    }
}
