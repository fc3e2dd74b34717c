//! Core simulation primitives: time and query windows

pub mod time;

pub use time::{Time, TimeWindow, TERMINAL_TIME};
