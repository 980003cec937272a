use ccgamr_core::Pos;

use super::{AmrGraph, GraphDump, Node, NodeId};

fn graph(concepts: &[(&str, &str)]) -> (AmrGraph, Vec<NodeId>) {
    let mut g = AmrGraph::new();
    let ids = concepts
        .iter()
        .enumerate()
        .map(|(i, (concept, tag))| {
            let var = concept[..1].to_string();
            g.add_node(Node::new(*concept, var, Pos::new(*tag), i))
        })
        .collect();
    (g, ids)
}

#[test]
fn parallel_edges_are_kept_in_order() {
    let (mut g, n) = graph(&[("eat", "VB"), ("apple", "NN")]);

    g.add_edge(n[0], n[1], ":ARG1");
    g.add_edge(n[0], n[1], ":mod");

    insta::assert_snapshot!(g.dump(), @r"
    e / eat [VB] → :ARG1 a, :mod a
    a / apple [NN] → ∅
    ");
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edge_label(n[0], n[1]), Some(":ARG1"));
}

#[test]
fn remove_edge_drops_all_parallel_edges() {
    let (mut g, n) = graph(&[("eat", "VB"), ("apple", "NN"), ("quickly", "RB")]);
    g.add_edge(n[0], n[1], ":ARG1");
    g.add_edge(n[0], n[2], ":manner");
    g.add_edge(n[0], n[1], ":mod");

    assert_eq!(g.remove_edge(n[0], n[1]), 2);
    assert_eq!(g.remove_edge(n[0], n[1]), 0);
    assert!(g.has_edge(n[0], n[2]));
    assert!(!g.is_target(n[1]));
}

#[test]
fn delete_node_detaches_both_directions() {
    let (mut g, n) = graph(&[("be", "VBZ"), ("dog", "NN"), ("big", "JJ")]);
    g.add_edge(n[0], n[1], ":ANUM1");
    g.add_edge(n[0], n[2], ":ANUM2");
    g.add_edge(n[2], n[0], ":mod");

    let detached = g.delete_node(n[0]);

    assert_eq!(detached.len(), 2);
    assert!(g.is_removed(n[0]));
    assert!(!g.has_edges(n[2]));
    insta::assert_snapshot!(GraphDump::new(&g).show_removed(true).dump(), @r"
    ✗ b / be
    d / dog [NN] → ∅
    b / big [JJ] → ∅
    ");
}

#[test]
fn first_parent_follows_id_order() {
    let (mut g, n) = graph(&[("a", "NN"), ("b", "NN"), ("c", "NN")]);
    g.add_edge(n[1], n[2], ":x");
    g.add_edge(n[0], n[2], ":y");

    assert_eq!(g.first_parent(n[2]), Some(n[0]));
    assert_eq!(g.first_parent(n[0]), None);
}

#[test]
fn target_probe_can_exclude_a_source() {
    let (mut g, n) = graph(&[("with", "IN"), ("saw", "VBD"), ("scope", "NN")]);
    g.add_edge(n[0], n[2], ":ANUM1");

    assert!(g.is_target(n[2]));
    assert!(!g.is_target_excluding(n[0], n[2]));

    g.add_edge(n[1], n[2], ":ARG1");
    assert!(g.is_target_excluding(n[0], n[2]));
}

#[test]
fn iter_skips_deleted_nodes() {
    let (mut g, n) = graph(&[("a", "NN"), ("b", "NN")]);
    g.delete_node(n[0]);

    let live: Vec<_> = g.iter().map(|(id, _)| id).collect();
    assert_eq!(live, vec![n[1]]);
    assert_eq!(g.len(), 2);
}

#[test]
fn nodes_compare_by_variable() {
    let a = Node::new("dog", "d", Pos::new("NN"), 0);
    let b = Node::new("dig", "d", Pos::new("VB"), 3);
    let c = Node::new("dog", "d2", Pos::new("NN"), 0);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
#[should_panic(expected = "refers to a deleted node")]
fn edge_to_deleted_node_panics() {
    let (mut g, n) = graph(&[("a", "NN"), ("b", "NN")]);
    g.delete_node(n[1]);
    g.add_edge(n[0], n[1], ":x");
}
