//! Fixed-step schedule

use serde::Serialize;

use crate::core::time::{Time, TimeWindow, TERMINAL_TIME};
use crate::schedule::ScheduleError;

/// Schedule producing events at `tstart + i*dt` for `i = 0, 1, ...`
///
/// Both ends are optional: an unset `tstart` means the sequence starts
/// at time 0, an unset `tstop` leaves it unbounded (queries still clip
/// it to their window).
///
/// # Example
/// ```
/// use neural_sim_core_rs::{RegularSchedule, TimeWindow};
///
/// let schedule = RegularSchedule::new(Some(2.0), 1.0, Some(6.0)).unwrap();
/// assert_eq!(schedule.tstart(), Some(2.0));
///
/// let times = schedule.events(TimeWindow::new(0.0, 100.0));
/// assert_eq!(times, vec![2.0, 3.0, 4.0, 5.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegularSchedule {
    /// First event time; unset means 0
    tstart: Option<Time>,

    /// Step between events
    dt: Time,

    /// Cut-off (exclusive); unset means unbounded
    tstop: Option<Time>,
}

impl RegularSchedule {
    /// Create a schedule from `(tstart, dt, tstop)`
    ///
    /// # Errors
    /// Returns [`ScheduleError`] if any set field is negative.
    pub fn new(
        tstart: Option<Time>,
        dt: Time,
        tstop: Option<Time>,
    ) -> Result<Self, ScheduleError> {
        let mut schedule = Self::default();
        schedule.set_tstart(tstart)?;
        schedule.set_dt(dt)?;
        schedule.set_tstop(tstop)?;
        Ok(schedule)
    }

    /// First event time, if set
    pub fn tstart(&self) -> Option<Time> {
        self.tstart
    }

    /// Step between events
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Cut-off time, if set
    pub fn tstop(&self) -> Option<Time> {
        self.tstop
    }

    /// Replace `tstart`, re-running construction validation
    pub fn set_tstart(&mut self, tstart: Option<Time>) -> Result<(), ScheduleError> {
        if let Some(t) = tstart {
            if t < 0.0 {
                return Err(ScheduleError::RegularTstart);
            }
        }
        self.tstart = tstart;
        Ok(())
    }

    /// Replace `dt`, re-running construction validation
    pub fn set_dt(&mut self, dt: Time) -> Result<(), ScheduleError> {
        if dt < 0.0 {
            return Err(ScheduleError::RegularDt);
        }
        self.dt = dt;
        Ok(())
    }

    /// Replace `tstop`, re-running construction validation
    pub fn set_tstop(&mut self, tstop: Option<Time>) -> Result<(), ScheduleError> {
        if let Some(t) = tstop {
            if t < 0.0 {
                return Err(ScheduleError::RegularTstop);
            }
        }
        self.tstop = tstop;
        Ok(())
    }

    /// Event times inside `window`, ascending
    ///
    /// The sequence is clipped to `[tstart, tstop)` and to the window.
    /// A zero step produces nothing, as does an empty intersection
    /// (including `tstart >= tstop`).
    pub fn events(&self, window: TimeWindow) -> Vec<Time> {
        let tstart = self.tstart.unwrap_or(0.0);
        let tstop = self.tstop.unwrap_or(TERMINAL_TIME);

        if self.dt <= 0.0 {
            return Vec::new();
        }

        let from = window.start().max(tstart);
        let until = window.end().min(tstop);
        if from >= until {
            return Vec::new();
        }

        // Times are multiples of dt from tstart, not accumulated sums,
        // so long sequences do not drift. The starting index is rounded
        // down; the in-loop lower-bound check absorbs the rounding.
        let mut times = Vec::new();
        let mut i = ((from - tstart) / self.dt).floor() as u64;
        loop {
            let t = tstart + i as f64 * self.dt;
            if t >= until {
                break;
            }
            if t >= from {
                times.push(t);
            }
            i += 1;
        }
        times
    }
}
