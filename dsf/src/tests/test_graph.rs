#![allow(missing_docs)]

use super::*;

fn unweighted(pairs: &[(usize, usize)]) -> Vec<Edge<()>> {
    Vec::from_iter(pairs.iter().map(|&(a, b)| Edge::new(a, b, ())))
}

#[test]
fn components() {
    let edges = unweighted(&[(0, 1), (1, 2), (4, 5)]);
    let components = connected_components(7, &edges).unwrap();
    assert_eq!(components.count, 4);
    let labels = &components.labels;
    assert_eq!(labels[0], labels[1]);
    assert_eq!(labels[1], labels[2]);
    assert_eq!(labels[4], labels[5]);
    assert_ne!(labels[0], labels[4]);
    assert_eq!(labels[3], 3);
    assert_eq!(labels[6], 6);
}

#[test]
fn components_without_edges() {
    let components = connected_components::<()>(3, &[]).unwrap();
    assert_eq!(components.count, 3);
    assert_eq!(components.labels, vec![0, 1, 2]);
}

#[test]
fn cycles() {
    let edges = unweighted(&[(0, 1), (1, 2), (3, 4), (2, 0), (4, 5)]);
    assert_eq!(find_cycle(6, &edges).unwrap(), Some(3));

    let tree = unweighted(&[(0, 1), (1, 2), (1, 3)]);
    assert_eq!(find_cycle(4, &tree).unwrap(), None);

    let self_loop = unweighted(&[(0, 1), (2, 2)]);
    assert_eq!(find_cycle(3, &self_loop).unwrap(), Some(1));
}

#[test]
fn out_of_range_endpoints() {
    let edges = unweighted(&[(0, 1), (1, 5)]);
    let err = DsfError::InvalidElement {
        element: 5,
        universe_size: 3,
    };
    assert_eq!(connected_components(3, &edges), Err(err));
    assert_eq!(find_cycle(3, &edges), Err(err));

    let weighted = [Edge::new(0, 1, 1), Edge::new(7, 0, 2)];
    assert_eq!(
        minimum_spanning_forest(3, &weighted),
        Err(DsfError::InvalidElement {
            element: 7,
            universe_size: 3
        })
    );
}

#[test]
fn kruskal() {
    // 0 - 1 - 2 form a triangle with a heavy chord, 3 - 4 is a separate tree, 5 is isolated.
    let edges = [
        Edge::new(0, 1, 4),
        Edge::new(1, 2, 2),
        Edge::new(0, 2, 9),
        Edge::new(3, 4, -1),
        Edge::new(2, 0, 3),
    ];
    let forest = minimum_spanning_forest(6, &edges).unwrap();
    assert_eq!(forest.edges, vec![3, 1, 4]);
    assert_eq!(forest.total_weight, 4);
    assert_eq!(forest.tree_count, 3);
}

#[test]
fn kruskal_prefers_earlier_edges_on_ties() {
    let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(0, 2, 1)];
    let forest = minimum_spanning_forest(3, &edges).unwrap();
    assert_eq!(forest.edges, vec![0, 1]);
    assert_eq!(forest.total_weight, 2);
    assert_eq!(forest.tree_count, 1);
}

#[test]
fn kruskal_reports_weight_overflow() {
    let edges = [Edge::new(0, 1, i64::MAX), Edge::new(1, 2, i64::MAX)];
    assert_eq!(
        minimum_spanning_forest(3, &edges),
        Err(DsfError::WeightOverflow { edge: 1 })
    );

    let edges = [Edge::new(0, 1, i64::MAX), Edge::new(1, 2, i64::MIN)];
    let forest = minimum_spanning_forest(3, &edges).unwrap();
    assert_eq!(forest.total_weight, -1);
}
