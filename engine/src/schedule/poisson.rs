//! Seeded pseudo-random schedule

use serde::Serialize;

use crate::core::time::{Time, TimeWindow};
use crate::rng::SimRng;
use crate::schedule::ScheduleError;

/// Schedule producing a Poisson point process
///
/// Inter-arrival gaps are exponentially distributed with rate `freq`
/// (events per unit time), drawn from a stream seeded by `seed`. The
/// running time starts at `tstart`, so the first event lands at
/// `tstart + gap`. Identical `(tstart, freq, seed)` reproduce identical
/// sequences; the stream is replayed from the seed on every query, so
/// overlapping windows always agree with each other.
///
/// Unlike the fixed-step schedule, an unset `tstart` is resolved to 0 at
/// construction rather than stored; there is no observable unset state.
///
/// # Example
/// ```
/// use neural_sim_core_rs::{PoissonSchedule, TimeWindow};
///
/// let schedule = PoissonSchedule::new(None, 5.0, 42).unwrap();
/// assert_eq!(schedule.freq(), 5.0);
/// assert_eq!(schedule.seed(), 42);
///
/// let replay = PoissonSchedule::new(None, 5.0, 42).unwrap();
/// let window = TimeWindow::new(0.0, 100.0);
/// assert_eq!(schedule.events(window), replay.events(window));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PoissonSchedule {
    /// Earliest possible event time
    tstart: Time,

    /// Expected events per unit time
    freq: f64,

    /// Seed for the generation stream
    seed: u64,
}

impl PoissonSchedule {
    /// Create a schedule from `(tstart, freq, seed)`
    ///
    /// A `None` tstart resolves to 0.
    ///
    /// # Errors
    /// Returns [`ScheduleError`] if `tstart` or `freq` is negative.
    pub fn new(tstart: Option<Time>, freq: f64, seed: u64) -> Result<Self, ScheduleError> {
        let mut schedule = Self::default();
        schedule.set_tstart(tstart)?;
        schedule.set_freq(freq)?;
        schedule.set_seed(seed);
        Ok(schedule)
    }

    /// Earliest possible event time
    pub fn tstart(&self) -> Time {
        self.tstart
    }

    /// Expected events per unit time
    pub fn freq(&self) -> f64 {
        self.freq
    }

    /// Seed for the generation stream
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replace `tstart`, re-running construction validation
    ///
    /// `None` resolves to 0, as at construction.
    pub fn set_tstart(&mut self, tstart: Option<Time>) -> Result<(), ScheduleError> {
        let t = tstart.unwrap_or(0.0);
        if t < 0.0 {
            return Err(ScheduleError::PoissonTstart);
        }
        self.tstart = t;
        Ok(())
    }

    /// Replace `freq`, re-running construction validation
    pub fn set_freq(&mut self, freq: f64) -> Result<(), ScheduleError> {
        if freq < 0.0 {
            return Err(ScheduleError::PoissonFrequency);
        }
        self.freq = freq;
        Ok(())
    }

    /// Replace the seed
    ///
    /// Any `u64` is a valid seed, so this cannot fail.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Event times inside `window`, ascending
    ///
    /// The stream is generated from `tstart` regardless of the window;
    /// events before `window.start()` are consumed but not emitted, so a
    /// clipped window yields exactly the clipped subsequence of the full
    /// stream. A zero rate produces nothing.
    pub fn events(&self, window: TimeWindow) -> Vec<Time> {
        if self.freq <= 0.0 {
            return Vec::new();
        }

        let mut rng = SimRng::new(self.seed);
        let mut t = self.tstart;
        let mut times = Vec::new();
        loop {
            t += rng.exponential(self.freq);
            if t >= window.end() {
                break;
            }
            if t >= window.start() {
                times.push(t);
            }
        }
        times
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_produces_nothing() {
        let schedule = PoissonSchedule::default();
        assert!(schedule.events(TimeWindow::new(0.0, 100.0)).is_empty());
    }

    #[test]
    fn test_events_start_at_or_after_tstart() {
        let schedule = PoissonSchedule::new(Some(5.0), 10.0, 42).unwrap();
        let times = schedule.events(TimeWindow::new(0.0, 50.0));

        assert!(!times.is_empty());
        for &t in &times {
            assert!(t >= 5.0, "event {} precedes tstart", t);
        }
    }

    #[test]
    fn test_clipped_window_matches_full_stream() {
        let schedule = PoissonSchedule::new(None, 10.0, 1234).unwrap();

        let full = schedule.events(TimeWindow::new(0.0, 100.0));
        let clipped = schedule.events(TimeWindow::new(20.0, 60.0));

        let expected: Vec<f64> = full
            .into_iter()
            .filter(|&t| (20.0..60.0).contains(&t))
            .collect();
        assert_eq!(clipped, expected);
    }
}
