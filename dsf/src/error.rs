//! Error cases for operations on [`DisjointSets`](crate::DisjointSets).
use thiserror::Error;

/// Error cases for operations on [`DisjointSets`](crate::DisjointSets).
///
/// A failing operation never modifies the structure.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DsfError {
    /// The element is outside the universe or its slot was never initialized.
    #[error("element {element} is not an initialized member of a universe of size {universe_size}")]
    InvalidElement {
        /// The offending element id.
        element: usize,
        /// The universe size at the time of the call.
        universe_size: usize,
    },
    /// A requested universe size does not exceed the current size or is too large to represent.
    #[error("invalid universe size {requested} (current size is {current})")]
    InvalidUniverseSize {
        /// The requested universe size.
        requested: usize,
        /// The universe size at the time of the call.
        current: usize,
    },
    /// `make_set` was called on an element that already shares its set with other elements.
    #[error("element {element} is already part of a non-trivial set")]
    ElementInUse {
        /// The offending element id.
        element: usize,
    },
    /// The total weight of a spanning forest does not fit into the weight type.
    #[error("total weight overflows when adding edge {edge}")]
    WeightOverflow {
        /// Index of the edge whose weight could not be added.
        edge: usize,
    },
}
