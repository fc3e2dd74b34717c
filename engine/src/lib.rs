//! Neural Simulator Core - Event Generation Engine
//!
//! Schedules and event generators for injecting timed, weighted events
//! into a spiking-network simulation, with deterministic execution.
//!
//! # Architecture
//!
//! - **core**: simulation time and query windows
//! - **schedule**: event-time schedules (regular, explicit, poisson)
//! - **models**: delivery targets, generators, merged event streams
//! - **config**: JSON scenario parsing with two-phase validation
//! - **rng**: deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All event times are non-negative f64
//! 2. All randomness is deterministic (seeded RNG)
//! 3. Schedules are value objects; every constructor and setter
//!    re-runs the same validation

// Module declarations
pub mod config;
pub mod core;
pub mod models;
pub mod rng;
pub mod schedule;

// Re-exports for convenience
pub use config::{
    generator_from_json, generators_from_json, schedule_from_json, ConfigError, GeneratorConfig,
    ScheduleConfig,
};
pub use crate::core::time::{Time, TimeWindow, TERMINAL_TIME};
pub use models::{merge_events, CellMember, EventGenerator, SpikeEvent};
pub use rng::SimRng;
pub use schedule::{
    ExplicitSchedule, PoissonSchedule, RegularSchedule, Schedule, ScheduleError,
};
