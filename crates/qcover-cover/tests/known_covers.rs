use qcover_core::Graph;
use qcover_cover::{find_minimum_cover, CliqueCover};
use qcover_graph::{barbell, complete, cycle, empty};

fn assert_is_cover(graph: &dyn Graph, cover: &CliqueCover) {
    for group in cover.groups() {
        for (i, &u) in group.members.iter().enumerate() {
            for &v in &group.members[i + 1..] {
                assert!(graph.has_edge(u, v), "{u} and {v} share slot {}", group.slot);
            }
        }
    }
    for vertex in graph.nodes() {
        assert!(cover.covers(vertex), "vertex {vertex} uncovered");
    }
}

#[test]
fn complete_graph_is_one_clique() {
    for n in [1, 5, 15] {
        let graph = complete(n);
        let (k, cover) = find_minimum_cover(&graph, 3).unwrap().expect("cover");
        assert_eq!(k, 1, "K{n}");
        assert_eq!(cover.num_cliques(), 1);
        assert_is_cover(&graph, &cover);
    }
}

#[test]
fn edgeless_graph_needs_one_clique_per_vertex() {
    let graph = empty(5);
    let (k, cover) = find_minimum_cover(&graph, 5).unwrap().expect("cover");
    assert_eq!(k, 5);
    assert_eq!(cover.num_cliques(), 5);
    assert_is_cover(&graph, &cover);
}

#[test]
fn cycles_need_half_their_length() {
    for n in [5, 6] {
        let graph = cycle(n).unwrap();
        let (k, cover) = find_minimum_cover(&graph, n).unwrap().expect("cover");
        assert_eq!(k, (n + 1) / 2, "C{n}");
        assert_is_cover(&graph, &cover);
    }
}

#[test]
fn barbell_needs_both_bells_and_the_bar() {
    let graph = barbell(4, 2).unwrap();
    let (k, cover) = find_minimum_cover(&graph, 4).unwrap().expect("cover");
    assert_eq!(k, 3);
    assert_is_cover(&graph, &cover);
}

#[test]
fn odd_bridge_needs_an_extra_clique() {
    let graph = barbell(10, 3).unwrap();
    let (k, cover) = find_minimum_cover(&graph, 6).unwrap().expect("cover");
    assert_eq!(k, 4);
    assert_is_cover(&graph, &cover);
}

#[test]
fn larger_fixtures_match_their_cover_numbers() {
    let graph = cycle(10).unwrap();
    let (k, cover) = find_minimum_cover(&graph, 10).unwrap().expect("cover");
    assert_eq!(k, 5);
    assert_is_cover(&graph, &cover);

    let graph = cycle(15).unwrap();
    let (k, cover) = find_minimum_cover(&graph, 15).unwrap().expect("cover");
    assert_eq!(k, 8);
    assert_is_cover(&graph, &cover);

    let graph = empty(15);
    let (k, cover) = find_minimum_cover(&graph, 15).unwrap().expect("cover");
    assert_eq!(k, 15);
    assert_is_cover(&graph, &cover);

    let graph = complete(100);
    let (k, cover) = find_minimum_cover(&graph, 3).unwrap().expect("cover");
    assert_eq!(k, 1);
    assert_eq!(cover.groups()[0].members.len(), 100);
}

#[test]
fn bound_below_cover_number_finds_nothing() {
    let graph = cycle(6).unwrap();
    assert_eq!(find_minimum_cover(&graph, 2).unwrap(), None);
}
