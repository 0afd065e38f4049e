//! Connectivity algorithms for undirected graphs backed by [`DisjointSets`].
//!
//! Graphs are given as a node count `n` and a slice of [`Edge`]s between nodes in `0..n`.
use crate::{DisjointSets, DsfError};
use num_traits::CheckedAdd;

#[cfg(test)]
#[path = "tests/test_graph.rs"]
mod test_graph;

/// An undirected edge between the nodes `a` and `b`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Edge<W> {
    /// First endpoint.
    pub a: usize,
    /// Second endpoint.
    pub b: usize,
    /// Weight used by [`minimum_spanning_forest`]; ignored by the other algorithms.
    pub weight: W,
}

impl<W> Edge<W> {
    /// Constructs an edge between `a` and `b`.
    pub fn new(a: usize, b: usize, weight: W) -> Self {
        Edge { a, b, weight }
    }
}

/// The connected components of a graph.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Components {
    /// Number of connected components.
    pub count: usize,
    /// For each node, the representative node of its component.
    pub labels: Vec<usize>,
}

/// A minimum spanning forest as computed by [`minimum_spanning_forest`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SpanningForest<W> {
    /// Indices into the input edge slice, in the order the edges were selected.
    pub edges: Vec<usize>,
    /// Sum of the weights of all selected edges.
    pub total_weight: W,
    /// Number of trees in the forest, i.e. the number of connected components.
    pub tree_count: usize,
}

fn check_edges<W>(nodes: usize, edges: &[Edge<W>]) -> Result<(), DsfError> {
    for edge in edges {
        for element in [edge.a, edge.b] {
            if element >= nodes {
                return Err(DsfError::InvalidElement {
                    element,
                    universe_size: nodes,
                });
            }
        }
    }
    Ok(())
}

/// Computes the connected components of a graph.
pub fn connected_components<W>(nodes: usize, edges: &[Edge<W>]) -> Result<Components, DsfError> {
    check_edges(nodes, edges)?;
    let mut sets = DisjointSets::singletons(nodes)?;
    for edge in edges {
        sets.union(edge.a, edge.b)?;
    }
    let labels = (0..nodes)
        .map(|node| sets.find(node))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!(
        "{} components among {nodes} nodes [{}]",
        sets.set_count(),
        sets.stats()
    );
    Ok(Components {
        count: sets.set_count(),
        labels,
    })
}

/// Returns the index of the first edge that closes a cycle, or `None` if the graph is a forest.
///
/// An edge closes a cycle when its endpoints are already connected by earlier edges. Self loops
/// always close a cycle.
pub fn find_cycle<W>(nodes: usize, edges: &[Edge<W>]) -> Result<Option<usize>, DsfError> {
    check_edges(nodes, edges)?;
    let mut sets = DisjointSets::singletons(nodes)?;
    for (index, edge) in edges.iter().enumerate() {
        if !sets.union(edge.a, edge.b)? {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// Edges of equal weight are considered in input order. Fails with [`DsfError::WeightOverflow`]
/// if the total weight of the selected edges cannot be represented by `W`.
pub fn minimum_spanning_forest<W>(
    nodes: usize,
    edges: &[Edge<W>],
) -> Result<SpanningForest<W>, DsfError>
where
    W: Ord + Copy + CheckedAdd + Default,
{
    check_edges(nodes, edges)?;
    let mut order = Vec::from_iter(0..edges.len());
    order.sort_by_key(|&index| edges[index].weight);

    let mut sets = DisjointSets::singletons(nodes)?;
    let mut selected = vec![];
    let mut total_weight = W::default();
    for index in order {
        if sets.set_count() <= 1 {
            break;
        }
        let edge = &edges[index];
        if sets.union(edge.a, edge.b)? {
            selected.push(index);
            total_weight = total_weight
                .checked_add(&edge.weight)
                .ok_or(DsfError::WeightOverflow { edge: index })?;
        }
    }
    log::debug!(
        "spanning forest with {} edges and {} trees [{}]",
        selected.len(),
        sets.set_count(),
        sets.stats()
    );
    Ok(SpanningForest {
        edges: selected,
        total_weight,
        tree_count: sets.set_count(),
    })
}
