use digraph::DiGraph;
use digraph::alg::DirectedCycle;

#[test]
fn reports_the_search_path_at_the_first_back_edge() {
    let g: DiGraph<u32> = [
        (1, 2),
        (2, 5),
        (5, 1),
        (2, 6),
        (3, 7),
        (4, 3),
        (4, 6),
        (7, 4),
    ]
    .into_iter()
    .collect();

    let dc = DirectedCycle::new(&g);
    assert!(dc.has_cycle());
    assert_eq!(dc.cycle(), Some(&[1, 2, 5][..]));
}

#[test]
fn path_may_include_vertices_leading_into_the_cycle() {
    let g: DiGraph<&str> = [("a", "b"), ("b", "c"), ("c", "d"), ("d", "c")]
        .into_iter()
        .collect();

    let dc = DirectedCycle::new(&g);
    assert_eq!(dc.cycle(), Some(&["a", "b", "c", "d"][..]));
}

#[test]
fn acyclic_graph_has_no_cycle() {
    let g: DiGraph<u32> = [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]
        .into_iter()
        .collect();

    let dc = DirectedCycle::new(&g);
    assert!(!dc.has_cycle());
    assert_eq!(dc.cycle(), None);
}

#[test]
fn cross_edges_into_finished_vertices_are_not_cycles() {
    // 3 -> 1 reaches a vertex that was fully explored from an earlier root.
    let g: DiGraph<u32> = [(1, 2), (3, 1), (3, 2)].into_iter().collect();
    assert!(!DirectedCycle::new(&g).has_cycle());
}

#[test]
fn self_loop_is_a_cycle() {
    let mut g: DiGraph<u32> = DiGraph::new();
    g.add_vertex(0);
    g.add_edge(1, 1);

    let dc = DirectedCycle::new(&g);
    assert_eq!(dc.cycle(), Some(&[1][..]));
}

#[test]
fn cycle_found_from_a_later_root() {
    let g: DiGraph<u32> = [(1, 2), (3, 4), (4, 3)].into_iter().collect();
    let dc = DirectedCycle::new(&g);
    assert_eq!(dc.cycle(), Some(&[3, 4][..]));
}

#[test]
fn empty_graph_has_no_cycle() {
    let g: DiGraph<u32> = DiGraph::new();
    assert!(!DirectedCycle::new(&g).has_cycle());
}
