//! Event generators
//!
//! An event generator binds a schedule to a delivery target and a
//! synaptic weight. The surrounding simulation queries generators per
//! time window and injects the resulting events into cells.

use serde::Serialize;

use crate::core::time::{Time, TimeWindow};
use crate::models::target::CellMember;
use crate::schedule::Schedule;

/// A timed event bound for a target, carrying a synaptic weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpikeEvent {
    /// Delivery destination
    pub target: CellMember,

    /// Delivery time
    pub time: Time,

    /// Synaptic weight; negative values are inhibitory
    pub weight: f64,
}

/// Binds a [`Schedule`] to a delivery target and weight
///
/// Generators are value objects: constructed once, read via accessors,
/// never mutated. The weight is passed through exactly as given;
/// negative (inhibitory) weights are as valid as positive ones.
///
/// # Example
/// ```
/// use neural_sim_core_rs::{CellMember, EventGenerator, Schedule};
///
/// let schedule = Schedule::regular(Some(2.0), 1.0, Some(100.0)).unwrap();
/// let generator = EventGenerator::new(CellMember::new(42, 3), 3.14, schedule);
///
/// assert_eq!(generator.target().gid, 42);
/// assert_eq!(generator.target().index, 3);
/// assert_eq!(generator.weight(), 3.14);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct EventGenerator {
    /// Unique generator identifier (UUID)
    id: String,

    /// Delivery destination for every event
    target: CellMember,

    /// Weight attached to every event
    weight: f64,

    /// Event-time policy
    schedule: Schedule,
}

impl EventGenerator {
    /// Create a generator delivering `schedule`'s events to `target`
    pub fn new(target: CellMember, weight: f64, schedule: Schedule) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            target,
            weight,
            schedule,
        }
    }

    /// Unique generator identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Delivery destination
    pub fn target(&self) -> CellMember {
        self.target
    }

    /// Weight attached to every event
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The underlying schedule
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Events this generator delivers inside `window`, in schedule order
    pub fn events(&self, window: TimeWindow) -> Vec<SpikeEvent> {
        self.schedule
            .events(window)
            .into_iter()
            .map(|time| SpikeEvent {
                target: self.target,
                time,
                weight: self.weight,
            })
            .collect()
    }
}

/// Merge the event streams of several generators into delivery order
///
/// Events are ordered by time; ties keep generator order (the sort is
/// stable and explicit-schedule times are emitted as stored, so equal
/// times never reorder across generators).
pub fn merge_events(generators: &[EventGenerator], window: TimeWindow) -> Vec<SpikeEvent> {
    let mut events: Vec<SpikeEvent> = generators
        .iter()
        .flat_map(|generator| generator.events(window))
        .collect();
    events.sort_by(|a, b| a.time.total_cmp(&b.time));
    events
}
