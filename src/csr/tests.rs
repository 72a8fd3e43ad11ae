//! Tests for the CSR container.

use super::*;

fn path_graph() -> CsrGraph {
    // 0 - 1 - 2
    CsrGraph::from_parts(vec![0, 1, 3, 4], vec![1, 0, 2, 1])
}

#[test]
fn test_counts_and_slices() {
    let graph = path_graph();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.adjacent(0), &[1]);
    assert_eq!(graph.adjacent(1), &[0, 2]);
    assert_eq!(graph.adjacent(2), &[1]);
    assert_eq!(graph.degree(1), 2);
}

#[test]
fn test_rows_follow_node_order() {
    let graph = path_graph();
    let rows: Vec<&[usize]> = graph.rows().collect();
    assert_eq!(rows, vec![&[1][..], &[0, 2][..], &[1][..]]);
    assert_eq!(graph.rows().len(), 3);
}

#[test]
fn test_empty_graph() {
    let graph = CsrGraph::from_parts(vec![0], vec![]);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.rows().count(), 0);
    assert!(graph.validate().is_ok());

    // A fully empty pair has no node count at all.
    let graph = CsrGraph::default();
    assert_eq!(graph.node_count(), 0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_adjacent_out_of_range_panics() {
    let graph = path_graph();
    let _ = graph.adjacent(3);
}

#[test]
fn test_validate_accepts_well_formed() {
    assert_eq!(path_graph().validate(), Ok(()));
}

#[test]
fn test_validate_rejects_bad_offsets() {
    let cases = [
        (vec![], vec![]),
        (vec![1, 1], vec![0]),
        (vec![0, 2, 1], vec![0, 0]),
        (vec![0, 1], vec![0, 0]),
    ];
    for (offsets, neighbors) in cases {
        let graph = CsrGraph::from_parts(offsets.clone(), neighbors);
        assert!(
            matches!(graph.validate(), Err(CsrError::MalformedOffsets(_))),
            "offsets {offsets:?} should be rejected"
        );
    }
}

#[test]
fn test_validate_reports_first_out_of_bounds_neighbor() {
    let graph = CsrGraph::from_parts(vec![0, 1, 3], vec![1, 5, 2]);
    assert_eq!(
        graph.validate(),
        Err(CsrError::OutOfBoundsNeighbor {
            node: 1,
            neighbor: 5,
            node_count: 2,
        })
    );
}

#[test]
fn test_to_metis_parts() {
    let (xadj, adjncy) = path_graph().to_metis_parts().unwrap();
    assert_eq!(xadj, vec![0, 1, 3, 4]);
    assert_eq!(adjncy, vec![1, 0, 2, 1]);
}

#[test]
fn test_to_metis_parts_overflow() {
    let too_big = i32::MAX as usize + 1;
    let graph = CsrGraph::from_parts(vec![0, 1], vec![too_big]);
    assert_eq!(
        graph.to_metis_parts(),
        Err(CsrError::IndexOverflow { value: too_big })
    );
}

#[test]
fn test_display_prints_two_lists() {
    let graph = CsrGraph::from_parts(vec![0, 1, 2], vec![1, 0]);
    assert_eq!(graph.to_string(), "[0, 1, 2]\n[1, 0]");
}

#[test]
fn test_into_parts_round_trip() {
    let (offsets, neighbors): (Vec<usize>, Vec<usize>) = path_graph().into();
    assert_eq!(offsets, vec![0, 1, 3, 4]);
    assert_eq!(neighbors, vec![1, 0, 2, 1]);
}
