//! Caller-provided schedule

use serde::Serialize;

use crate::core::time::{Time, TimeWindow};
use crate::schedule::ScheduleError;

/// Schedule emitting exactly the stored times
///
/// Times are kept in stored order with their exact values; they are not
/// sorted or deduplicated here. If delivery needs a global ordering, the
/// consumer merges streams itself.
///
/// # Example
/// ```
/// use neural_sim_core_rs::ExplicitSchedule;
///
/// let schedule = ExplicitSchedule::new(vec![1.0, 2.0, 3.0, 4.5]).unwrap();
/// assert_eq!(schedule.times(), &[1.0, 2.0, 3.0, 4.5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExplicitSchedule {
    times: Vec<Time>,
}

impl ExplicitSchedule {
    /// Create a schedule from a list of event times
    ///
    /// # Errors
    /// Returns [`ScheduleError::ExplicitNegativeTime`] if any element is
    /// negative.
    pub fn new(times: Vec<Time>) -> Result<Self, ScheduleError> {
        let mut schedule = Self::default();
        schedule.set_times(times)?;
        Ok(schedule)
    }

    /// The stored event times, in stored order
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Replace the stored times wholesale
    ///
    /// The previous value is discarded entirely; there is no merging.
    ///
    /// # Errors
    /// Returns [`ScheduleError::ExplicitNegativeTime`] if any element is
    /// negative; the stored times are left unchanged in that case.
    pub fn set_times(&mut self, times: Vec<Time>) -> Result<(), ScheduleError> {
        if times.iter().any(|&t| t < 0.0) {
            return Err(ScheduleError::ExplicitNegativeTime);
        }
        self.times = times;
        Ok(())
    }

    /// Stored times falling inside `window`, in stored order
    pub fn events(&self, window: TimeWindow) -> Vec<Time> {
        self.times
            .iter()
            .copied()
            .filter(|&t| window.contains(t))
            .collect()
    }
}
