//! End-to-end tests for the weighted network.
//!
//! Covers registry growth, edge overwrite, Dijkstra results and the
//! unreachable sentinel, plus property tests over random graphs.

use labyrinth_graph::{Error, Network, NetworkConfig, UNREACHABLE};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Build a network over `0..n` with the given edges, later edges
/// overwriting earlier ones on the same pair.
fn build(n: usize, edges: &[(usize, usize, u32)]) -> Network<usize> {
    let mut net = Network::with_config(NetworkConfig { initial_capacity: 1 });
    for v in 0..n {
        net.add_vertex(v);
    }
    for &(a, b, w) in edges {
        net.add_edge(&a, &b, f64::from(w)).unwrap();
    }
    net
}

fn graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..10).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0u32..2000);
        (Just(n), prop::collection::vec(edge, 0..24))
    })
}

// ============================================================================
// 1. Scenario: locked shortcut loses to an open detour
// ============================================================================

#[test]
fn test_locked_direct_edge_detour() {
    let mut net = Network::new();
    for v in ["A", "B", "C"] {
        net.add_vertex(v);
    }
    net.add_edge(&"A", &"B", 1.0).unwrap();
    net.add_edge(&"B", &"C", 1.0).unwrap();
    net.add_edge(&"A", &"C", 1000.0).unwrap();

    let path = net.shortest_path(&"A", &"C");
    assert_eq!(path.iter().copied().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(path.weight(), 2.0);
    assert_eq!(net.edge_weight(&"A", &"C"), Some(1000.0));
}

// ============================================================================
// 2. Scenario: locked edge is used when nothing else connects
// ============================================================================

#[test]
fn test_locked_edge_used_as_last_resort() {
    let mut net = Network::new();
    for v in ["A", "B", "C"] {
        net.add_vertex(v);
    }
    net.add_edge(&"A", &"B", 1.0).unwrap();
    net.add_edge(&"B", &"C", 1000.0).unwrap();

    let path = net.shortest_path(&"A", &"C");
    assert_eq!(path.len(), 3);
    assert_eq!(path.weight(), 1001.0);
}

// ============================================================================
// 3. Scenario: disconnected components
// ============================================================================

#[test]
fn test_disconnected_components_consistently_unreachable() {
    let net = build(4, &[(0, 1, 1), (2, 3, 1)]);
    for _ in 0..3 {
        assert_eq!(net.shortest_path_weight(&0, &3), UNREACHABLE);
        assert!(net.shortest_path(&0, &3).is_empty());
        assert!(!net.shortest_path(&0, &3).is_reachable());
    }
    assert!(!net.is_connected());
}

// ============================================================================
// 4. Growth past initial capacity
// ============================================================================

#[test]
fn test_growth_preserves_all_weights() {
    let mut net = Network::with_config(NetworkConfig { initial_capacity: 2 });
    net.add_vertex(0usize);
    net.add_vertex(1);
    net.add_edge(&0, &1, 4.0).unwrap();
    net.add_edge(&1, &1, 9.0).unwrap();

    for v in 2..40 {
        net.add_vertex(v);
        net.add_edge(&(v - 1), &v, v as f64).unwrap();
    }

    assert!(net.capacity() >= net.vertex_count());
    assert_eq!(net.capacity(), 64);
    assert_eq!(net.edge_weight(&0, &1), Some(4.0));
    assert_eq!(net.edge_weight(&1, &1), Some(9.0));
    for v in 2..40 {
        assert_eq!(net.edge_weight(&v, &(v - 1)), Some(v as f64));
    }
}

// ============================================================================
// 5. Errors surface to the caller
// ============================================================================

#[test]
fn test_edge_to_unregistered_vertex() {
    let mut net = build(2, &[]);
    assert_eq!(
        net.add_edge(&0, &5, 1.0),
        Err(Error::VertexNotFound("5".into()))
    );
    assert_eq!(net.remove_edge(&7, &0), Err(Error::VertexNotFound("7".into())));
    assert_eq!(net.edge_count(), 0);
}

// ============================================================================
// 6. Traversals agree with reachability
// ============================================================================

#[test]
fn test_bfs_reaches_exactly_the_reachable_set() {
    let net = build(6, &[(0, 1, 1), (1, 2, 1000), (3, 4, 1)]);
    let reached: Vec<usize> = net.iter_bfs(&0).copied().collect();
    assert_eq!(reached, vec![0, 1, 2]);
    for v in 0..6 {
        assert_eq!(
            reached.contains(&v),
            net.shortest_path_weight(&0, &v) != UNREACHABLE
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn self_distance_is_zero((n, edges) in graph()) {
        let net = build(n, &edges);
        for v in 0..n {
            prop_assert_eq!(net.shortest_path_weight(&v, &v), 0.0);
        }
    }

    #[test]
    fn path_never_exceeds_direct_edge((n, edges) in graph()) {
        let net = build(n, &edges);
        for &(a, b, _) in &edges {
            let direct = net.edge_weight(&a, &b).unwrap();
            prop_assert!(net.shortest_path_weight(&a, &b) <= direct);
        }
    }

    #[test]
    fn path_weight_matches_its_edges((n, edges) in graph()) {
        let net = build(n, &edges);
        for a in 0..n {
            for b in 0..n {
                let path = net.shortest_path(&a, &b);
                let weight = net.shortest_path_weight(&a, &b);
                prop_assert_eq!(path.weight(), weight);
                prop_assert_eq!(path.is_empty(), weight == UNREACHABLE);
                prop_assert_eq!(weight, net.shortest_path_weight(&b, &a));

                if path.is_reachable() {
                    prop_assert_eq!(path.start(), Some(&a));
                    prop_assert_eq!(path.end(), Some(&b));
                    let hops: Vec<&usize> = path.iter().collect();
                    let mut total = 0.0;
                    for pair in hops.windows(2) {
                        total += net.edge_weight(pair[0], pair[1]).unwrap();
                    }
                    prop_assert_eq!(total, weight);
                }
            }
        }
    }

    #[test]
    fn overwrite_leaves_last_weight((n, edges) in graph(), w1 in 0u32..500, w2 in 0u32..500) {
        let mut net = build(n, &edges);
        let (a, b) = (0, n - 1);
        let before = net.edge_count();
        let had_edge = net.edge_weight(&a, &b).is_some();

        net.add_edge(&a, &b, f64::from(w1)).unwrap();
        net.add_edge(&a, &b, f64::from(w2)).unwrap();

        prop_assert_eq!(net.edge_weight(&a, &b), Some(f64::from(w2)));
        prop_assert_eq!(net.edge_weight(&b, &a), Some(f64::from(w2)));
        prop_assert_eq!(net.edge_count(), before + usize::from(!had_edge));
    }

    #[test]
    fn growth_preserves_weights((n, edges) in graph(), extra in 1usize..30) {
        let mut net = build(n, &edges);
        let snapshot: Vec<Option<f64>> = (0..n)
            .flat_map(|a| (0..n).map(move |b| (a, b)))
            .map(|(a, b)| net.edge_weight(&a, &b))
            .collect();

        for v in n..n + extra {
            net.add_vertex(v);
        }

        let after: Vec<Option<f64>> = (0..n)
            .flat_map(|a| (0..n).map(move |b| (a, b)))
            .map(|(a, b)| net.edge_weight(&a, &b))
            .collect();
        prop_assert_eq!(snapshot, after);
        prop_assert!(net.capacity() >= net.vertex_count());
    }
}
