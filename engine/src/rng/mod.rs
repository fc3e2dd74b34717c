//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, deterministic random number generation.
//! All randomness in the engine MUST go through this module.

mod xorshift;

pub use xorshift::SimRng;
