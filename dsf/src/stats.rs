//! Work counters for [`DisjointSets`](crate::DisjointSets).
use std::fmt;

/// Operation counters maintained by a [`DisjointSets`](crate::DisjointSets).
///
/// `parent_steps` is the number of parent links followed while searching for roots. Together with
/// `finds` it measures how flat the forest is kept.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Calls to `find`, including the ones performed by `union`.
    pub finds: u64,
    /// Parent links followed while ascending to a root.
    pub parent_steps: u64,
    /// Parent entries rewritten by path compression.
    pub compressions: u64,
    /// Calls to `union` with valid arguments.
    pub unions: u64,
    /// Calls to `union` that merged two distinct sets.
    pub merges: u64,
}

impl Stats {
    /// Average number of parent links followed per `find`.
    pub fn steps_per_find(&self) -> f64 {
        if self.finds == 0 {
            0.0
        } else {
            self.parent_steps as f64 / self.finds as f64
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "finds: {} steps: {} ({:.2}/find) compressed: {} unions: {} merges: {}",
            self.finds,
            self.parent_steps,
            self.steps_per_find(),
            self.compressions,
            self.unions,
            self.merges
        )
    }
}
