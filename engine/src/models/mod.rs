//! Domain models: delivery targets and event generators

pub mod generator;
pub mod target;

// Re-exports
pub use generator::{merge_events, EventGenerator, SpikeEvent};
pub use target::CellMember;
