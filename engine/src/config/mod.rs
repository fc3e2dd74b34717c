//! JSON configuration for schedules and generators
//!
//! Scenario documents describe schedules tagged by `type` and
//! generators as `{target, weight, schedule}` objects. Parsing is
//! two-phase: serde rejects values of the wrong representation (a
//! string where a number belongs, `null` where it is not permitted, a
//! float where an integer seed belongs), then the domain constructors
//! re-check ranges with their fixed diagnostics.
//!
//! The per-variant `null` handling mirrors the constructors: `null` is
//! an accepted "unset" for a regular schedule's `tstart`/`tstop` and
//! resolves to 0 for a poisson schedule's `tstart`, while `dt` and
//! `seed` reject it outright.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{CellMember, EventGenerator};
use crate::schedule::{Schedule, ScheduleError};

/// Errors raised while building values from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field held a value of the wrong representation
    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A field held a well-typed value outside its allowed range
    #[error(transparent)]
    Invalid(#[from] ScheduleError),
}

/// Unvalidated schedule description, as read from a scenario document
///
/// Missing fields take the same defaults as the constructors: unset
/// start/stop times, zero step, zero rate, zero seed.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleConfig {
    /// Fixed-step times
    Regular {
        #[serde(default)]
        tstart: Option<f64>,
        #[serde(default)]
        dt: f64,
        #[serde(default)]
        tstop: Option<f64>,
    },

    /// Caller-provided times
    Explicit {
        #[serde(default)]
        times: Vec<f64>,
    },

    /// Seeded pseudo-random times
    Poisson {
        #[serde(default)]
        tstart: Option<f64>,
        #[serde(default)]
        freq: f64,
        #[serde(default)]
        seed: u64,
    },
}

impl ScheduleConfig {
    /// Build a validated [`Schedule`] from this description
    ///
    /// # Errors
    /// Returns the constructor's [`ScheduleError`] if a field is out of
    /// range.
    pub fn build(self) -> Result<Schedule, ScheduleError> {
        match self {
            ScheduleConfig::Regular { tstart, dt, tstop } => Schedule::regular(tstart, dt, tstop),
            ScheduleConfig::Explicit { times } => Schedule::explicit(times),
            ScheduleConfig::Poisson { tstart, freq, seed } => Schedule::poisson(tstart, freq, seed),
        }
    }
}

/// Unvalidated generator description: target, weight, schedule
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Delivery destination
    pub target: CellMember,

    /// Weight attached to every event; may be negative
    pub weight: f64,

    /// Event-time policy
    pub schedule: ScheduleConfig,
}

impl GeneratorConfig {
    /// Build a validated [`EventGenerator`] from this description
    ///
    /// # Errors
    /// Returns the schedule constructor's [`ScheduleError`] if a field
    /// is out of range.
    pub fn build(self) -> Result<EventGenerator, ScheduleError> {
        Ok(EventGenerator::new(
            self.target,
            self.weight,
            self.schedule.build()?,
        ))
    }
}

/// Parse a single schedule from a JSON document
///
/// # Example
/// ```
/// use neural_sim_core_rs::{schedule_from_json, Schedule};
///
/// let schedule = schedule_from_json(
///     r#"{"type": "regular", "tstart": 2.0, "dt": 1.0, "tstop": 100.0}"#,
/// )
/// .unwrap();
/// assert!(matches!(schedule, Schedule::Regular(_)));
/// ```
///
/// # Errors
/// [`ConfigError::Malformed`] for representation errors,
/// [`ConfigError::Invalid`] for out-of-range fields.
pub fn schedule_from_json(json: &str) -> Result<Schedule, ConfigError> {
    let config: ScheduleConfig = serde_json::from_str(json)?;
    Ok(config.build()?)
}

/// Parse a single generator from a JSON document
///
/// # Errors
/// [`ConfigError::Malformed`] for representation errors,
/// [`ConfigError::Invalid`] for out-of-range fields.
pub fn generator_from_json(json: &str) -> Result<EventGenerator, ConfigError> {
    let config: GeneratorConfig = serde_json::from_str(json)?;
    Ok(config.build()?)
}

/// Parse a list of generators from a JSON array document
///
/// # Errors
/// [`ConfigError::Malformed`] for representation errors,
/// [`ConfigError::Invalid`] for out-of-range fields. The first failing
/// entry aborts the parse.
pub fn generators_from_json(json: &str) -> Result<Vec<EventGenerator>, ConfigError> {
    let configs: Vec<GeneratorConfig> = serde_json::from_str(json)?;
    configs
        .into_iter()
        .map(|config| config.build().map_err(ConfigError::from))
        .collect()
}
