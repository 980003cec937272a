use super::number_conjunctions;
use crate::Config;
use crate::test_utils::{Fixture, run_pass};

#[test]
fn operands_numbered_by_position_not_insertion() {
    let f = Fixture::new()
        .leaf("carrots", "NNS", "N")
        .leaf(",", ",", ",")
        .leaf("apples", "NNS", "N")
        .leaf("and", "CC", "conj")
        .leaf("bananas", "NNS", "N")
        .dep(3, 4, "conj", 1)
        .dep(3, 0, "conj", 2)
        .dep(3, 2, "conj", 3);

    let out = run_pass(&f, &Config::new(), number_conjunctions);

    insta::assert_snapshot!(out.dump, @r"
    a / and [CC] → :op3 b, :op1 c, :op2 a2
    b / bananas [NNS] → ∅
    c / carrots [NNS] → ∅
    a2 / apples [NNS] → ∅
    ");
    assert_eq!(out.stats.conjunctions_numbered, 1);
}

#[test]
fn non_conjunction_edges_keep_labels() {
    let f = Fixture::new()
        .leaf("ate", "VBD", r"(S[dcl]\NP)/NP")
        .leaf("pie", "NN", "N")
        .dep(0, 1, r"(S[dcl]\NP)/NP", 2);

    let out = run_pass(&f, &Config::new(), number_conjunctions);

    insta::assert_snapshot!(out.dump, @r"
    a / ate [VBD] → :ANUM2 p
    p / pie [NN] → ∅
    ");
    assert_eq!(out.stats.conjunctions_numbered, 0);
}
