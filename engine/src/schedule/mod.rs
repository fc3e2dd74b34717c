//! Event-time schedules
//!
//! A schedule produces an ordered sequence of non-negative event times
//! inside a query window. Three policies are supported:
//!
//! - **Regular**: fixed-step times `tstart, tstart+dt, tstart+2dt, ...`
//! - **Explicit**: a caller-provided list of times, emitted as stored
//! - **Poisson**: pseudo-random times with exponentially distributed
//!   inter-arrival gaps, reproducible per seed
//!
//! # Design Principles
//!
//! 1. **Determinism**: same schedule state (and seed) → same event times
//! 2. **Validation**: time fields are checked on construction and on
//!    every setter, with fixed diagnostic messages
//! 3. **Windowed queries**: production runs against half-open windows
//!    `[start, end)`, so unbounded schedules stay finite per query

mod explicit;
mod poisson;
mod regular;

pub use explicit::ExplicitSchedule;
pub use poisson::PoissonSchedule;
pub use regular::RegularSchedule;

use serde::Serialize;
use thiserror::Error;

use crate::core::time::{Time, TimeWindow};

/// Errors raised when a schedule field violates a domain constraint
///
/// Message strings are load-bearing: callers match on them, so they are
/// fixed per field per schedule kind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// Regular schedule start time before time zero
    #[error("tstart must a non-negative number, or None")]
    RegularTstart,

    /// Regular schedule step below zero
    #[error("dt must be a non-negative number")]
    RegularDt,

    /// Regular schedule stop time before time zero
    #[error("tstop must a non-negative number, or None")]
    RegularTstop,

    /// Explicit schedule given a time before time zero
    #[error("explicit time schedule can not contain negative values")]
    ExplicitNegativeTime,

    /// Poisson schedule start time before time zero
    #[error("tstart must be a non-negative number")]
    PoissonTstart,

    /// Poisson schedule rate below zero
    #[error("frequency must be a non-negative number")]
    PoissonFrequency,
}

/// A closed set of event-time generation policies
///
/// Dispatch is by pattern match; there is no open trait for schedule
/// kinds. Construction goes through the variant constructors (or the
/// shorthands below), which validate every field.
///
/// # Example
/// ```
/// use neural_sim_core_rs::{Schedule, TimeWindow};
///
/// let schedule = Schedule::regular(Some(2.0), 1.0, Some(6.0)).unwrap();
/// let times = schedule.events(TimeWindow::new(0.0, 100.0));
/// assert_eq!(times, vec![2.0, 3.0, 4.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Schedule {
    /// Fixed-step times
    Regular(RegularSchedule),

    /// Caller-provided times
    Explicit(ExplicitSchedule),

    /// Seeded pseudo-random times
    Poisson(PoissonSchedule),
}

impl Schedule {
    /// Fixed-step schedule; see [`RegularSchedule::new`]
    pub fn regular(
        tstart: Option<Time>,
        dt: Time,
        tstop: Option<Time>,
    ) -> Result<Self, ScheduleError> {
        RegularSchedule::new(tstart, dt, tstop).map(Self::Regular)
    }

    /// Explicit-times schedule; see [`ExplicitSchedule::new`]
    pub fn explicit(times: Vec<Time>) -> Result<Self, ScheduleError> {
        ExplicitSchedule::new(times).map(Self::Explicit)
    }

    /// Poisson schedule; see [`PoissonSchedule::new`]
    pub fn poisson(tstart: Option<Time>, freq: f64, seed: u64) -> Result<Self, ScheduleError> {
        PoissonSchedule::new(tstart, freq, seed).map(Self::Poisson)
    }

    /// Event times falling inside `window`, in production order
    pub fn events(&self, window: TimeWindow) -> Vec<Time> {
        match self {
            Schedule::Regular(schedule) => schedule.events(window),
            Schedule::Explicit(schedule) => schedule.events(window),
            Schedule::Poisson(schedule) => schedule.events(window),
        }
    }
}

impl From<RegularSchedule> for Schedule {
    fn from(schedule: RegularSchedule) -> Self {
        Schedule::Regular(schedule)
    }
}

impl From<ExplicitSchedule> for Schedule {
    fn from(schedule: ExplicitSchedule) -> Self {
        Schedule::Explicit(schedule)
    }
}

impl From<PoissonSchedule> for Schedule {
    fn from(schedule: PoissonSchedule) -> Self {
        Schedule::Poisson(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Callers match on these strings; any drift here is a breaking change.
    #[test]
    fn test_diagnostic_messages_are_fixed() {
        assert_eq!(
            ScheduleError::RegularTstart.to_string(),
            "tstart must a non-negative number, or None"
        );
        assert_eq!(
            ScheduleError::RegularDt.to_string(),
            "dt must be a non-negative number"
        );
        assert_eq!(
            ScheduleError::RegularTstop.to_string(),
            "tstop must a non-negative number, or None"
        );
        assert_eq!(
            ScheduleError::ExplicitNegativeTime.to_string(),
            "explicit time schedule can not contain negative values"
        );
        assert_eq!(
            ScheduleError::PoissonTstart.to_string(),
            "tstart must be a non-negative number"
        );
        assert_eq!(
            ScheduleError::PoissonFrequency.to_string(),
            "frequency must be a non-negative number"
        );
    }

    #[test]
    fn test_dispatch_matches_variant() {
        let window = TimeWindow::new(0.0, 10.0);

        let regular = Schedule::regular(Some(0.0), 5.0, None).unwrap();
        assert_eq!(regular.events(window), vec![0.0, 5.0]);

        let explicit = Schedule::explicit(vec![7.0, 1.0]).unwrap();
        assert_eq!(explicit.events(window), vec![7.0, 1.0]);

        let poisson = Schedule::poisson(None, 0.0, 0).unwrap();
        assert!(poisson.events(window).is_empty());
    }
}
