//! Event delivery addressing

use serde::{Deserialize, Serialize};

/// Address of an event destination: a cell plus a sub-target on it
///
/// `gid` identifies the cell across the whole network; `index` selects
/// the destination local to that cell (e.g. one synapse instance).
/// Plain value semantics: copyable, compared field-by-field, usable as
/// a map key.
///
/// # Example
/// ```
/// use neural_sim_core_rs::CellMember;
///
/// let target = CellMember::new(42, 3);
/// assert_eq!(target.gid, 42);
/// assert_eq!(target.index, 3);
/// assert_eq!(target, CellMember::new(42, 3));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CellMember {
    /// Global cell identifier
    pub gid: u64,

    /// Sub-target index local to the cell
    pub index: u64,
}

impl CellMember {
    /// Create an address from `(gid, index)`
    pub fn new(gid: u64, index: u64) -> Self {
        Self { gid, index }
    }
}
