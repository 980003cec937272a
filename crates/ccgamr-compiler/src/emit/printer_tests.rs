use ccgamr_core::Pos;

use super::AmrPrinter;
use crate::Indent;
use crate::graph::{AmrGraph, Node, NodeId};

fn graph(nodes: &[(&str, &str)]) -> (AmrGraph, Vec<NodeId>) {
    let mut g = AmrGraph::new();
    let ids = nodes
        .iter()
        .enumerate()
        .map(|(i, (var, concept))| g.add_node(Node::new(*concept, *var, Pos::new("NN"), i)))
        .collect();
    (g, ids)
}

#[test]
fn nested_children_indent_by_depth() {
    let (mut g, n) = graph(&[("l", "left"), ("h", "he"), ("a", "after"), ("e", "eating")]);
    g.add_edge(n[0], n[1], ":ARG0");
    g.add_edge(n[0], n[2], ":time");
    g.add_edge(n[2], n[3], ":op1");

    let out = AmrPrinter::new(&g, [n[0]]).dump();

    assert_eq!(
        out,
        "(l / left\n\t:ARG0 (h / he)\n\t:time (a / after\n\t\t:op1 (e / eating)))\n"
    );
}

#[test]
fn reentrant_node_prints_bare_variable() {
    let (mut g, n) = graph(&[("w", "want"), ("b", "boy"), ("g", "go")]);
    g.add_edge(n[0], n[1], ":ARG0");
    g.add_edge(n[0], n[2], ":ARG1");
    g.add_edge(n[2], n[1], ":ARG0");

    let out = AmrPrinter::new(&g, [n[0]]).dump();

    assert_eq!(
        out,
        "(w / want\n\t:ARG0 (b / boy)\n\t:ARG1 (g / go\n\t\t:ARG0 b))\n"
    );
}

#[test]
fn cycles_terminate() {
    let (mut g, n) = graph(&[("a", "x"), ("b", "y")]);
    g.add_edge(n[0], n[1], ":l");
    g.add_edge(n[1], n[0], ":m");

    let out = AmrPrinter::new(&g, [n[0]]).dump();

    assert_eq!(out, "(a / x\n\t:l (b / y\n\t\t:m a))\n");
}

#[test]
fn each_root_on_its_own_line_sharing_visits() {
    let (mut g, n) = graph(&[("r", "run"), ("d", "dog"), ("b", "bark")]);
    g.add_edge(n[0], n[1], ":ARG0");
    g.add_edge(n[2], n[1], ":ARG0");

    let out = AmrPrinter::new(&g, [n[0], n[2]]).dump();

    assert_eq!(out, "(r / run\n\t:ARG0 (d / dog))\n(b / bark\n\t:ARG0 d)\n");
}

#[test]
fn printing_twice_is_stable() {
    let (mut g, n) = graph(&[("r", "run"), ("d", "dog")]);
    g.add_edge(n[0], n[1], ":ARG0");
    let printer = AmrPrinter::new(&g, [n[0]]);

    assert_eq!(printer.dump(), printer.dump());
}

#[test]
fn space_indent() {
    let (mut g, n) = graph(&[("l", "left"), ("a", "after"), ("e", "eating")]);
    g.add_edge(n[0], n[1], ":time");
    g.add_edge(n[1], n[2], ":op1");

    let out = AmrPrinter::new(&g, [n[0]]).indent(Indent::Spaces(2)).dump();

    insta::assert_snapshot!(out, @r"
    (l / left
      :time (a / after
        :op1 (e / eating)))
    ");
}
