//! Integration coverage for level signatures, graph normalization,
//! dependency flux, and Anderson chunking — the remaining testable
//! properties and worked scenarios from the design notes.

use lal::graph::{Neighbors, UndirectedGraph};
use lal::level::{levels_per_position, mirror_levels, vertex_level};
use lal::linarr::chunking::anderson_chunks;
use lal::linarr::flux::compute_fluxes;
use lal::linarr::LinearArrangement;
use lal::tree::FreeTree;

#[test]
fn inserting_edges_out_of_order_then_normalizing_sorts_every_neighbor_list() {
    let mut g = UndirectedGraph::new(4);
    g.add_edge(2, 1, false);
    g.add_edge(0, 1, false);
    g.add_edge(3, 1, false);
    assert!(!g.is_normalized());
    g.normalize();
    assert!(g.is_normalized());
    assert_eq!(g.neighbors(0), &[1]);
    assert_eq!(g.neighbors(1), &[0, 2, 3]);
    assert_eq!(g.neighbors(2), &[1]);
    assert_eq!(g.neighbors(3), &[1]);
}

#[test]
fn normalizing_twice_is_the_same_as_normalizing_once() {
    let mut g = UndirectedGraph::new(4);
    g.add_edge(2, 1, false);
    g.add_edge(0, 1, false);
    g.normalize();
    let once: Vec<Vec<usize>> = (0..4).map(|u| g.neighbors(u).to_vec()).collect();
    g.normalize();
    let twice: Vec<Vec<usize>> = (0..4).map(|u| g.neighbors(u).to_vec()).collect();
    assert_eq!(once, twice);
}

#[test]
fn mirroring_a_level_signature_twice_is_the_identity() {
    let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    let arr = LinearArrangement::identity(5);
    let levels = levels_per_position(&t, &arr);
    assert_eq!(mirror_levels(&mirror_levels(&levels)), levels);
}

#[test]
fn the_center_of_a_star_has_a_level_equal_to_its_degree() {
    let t = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
    let arr = LinearArrangement::identity(5);
    // no neighbor of the center appears before it in the identity
    // arrangement, so every one of its 4 edges points forward: level 4.
    assert_eq!(vertex_level(&t, &arr, 0), 4);
}

#[test]
fn dependency_fluxes_of_a_path_partition_its_internal_cuts() {
    let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    let arr = LinearArrangement::identity(5);
    let fluxes = compute_fluxes(&t, &arr);
    // one flux per internal cut point (between consecutive positions).
    assert_eq!(fluxes.len(), 4);
    for flux in &fluxes {
        assert_eq!(flux.dependencies.len(), 1);
        assert_eq!(flux.size, 1);
    }
}

#[test]
fn anderson_chunks_of_a_caterpillar_cover_every_vertex_exactly_once() {
    let rt = {
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (1, 3), (1, 4)]).unwrap();
        t.root_at(0)
    };
    let arr = LinearArrangement::identity(5);
    let chunks = anderson_chunks(&rt, &arr);
    let total: usize = chunks.iter().map(|c| c.vertices.len()).sum();
    assert_eq!(total, 5);
}
