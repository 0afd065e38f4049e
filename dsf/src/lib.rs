//! This crate defines a structure [`DisjointSets`] that partitions a universe of element ids into
//! disjoint subsets, and a few classic graph algorithms built on top of it in [`graph`].
#![deny(unsafe_code)]

#[doc(inline)]
pub use disjoint_sets::{DisjointSets, MAX_UNIVERSE_SIZE};
#[doc(inline)]
pub use error::DsfError;
#[doc(inline)]
pub use stats::Stats;

pub mod disjoint_sets;
pub mod error;
pub mod graph;
pub mod stats;
