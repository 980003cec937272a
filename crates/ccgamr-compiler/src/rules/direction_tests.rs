use super::{Orientation, RuleCtx, orient};
use crate::test_utils::{Fixture, lemmas, lexicon};
use crate::{Config, DependencyShape};

fn orientations(fixture: &Fixture, config: &Config) -> String {
    let sentence = fixture.sentence();
    let lexicon = lexicon();
    let lemmas = lemmas();
    fixture
        .dependencies()
        .iter()
        .map(|dependency| {
            let ctx = RuleCtx {
                dependency,
                sentence: &sentence,
                lexicon: &lexicon,
                lemmatizer: &lemmas,
                config,
            };
            let (Orientation { from, to, label }, rule) = orient(&ctx);
            format!("{from}→{to} {label} ({rule})")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn role_runs_predicate_to_argument_through_lexicon() {
    let f = Fixture::new()
        .leaf("sat", "VBD", r"S[dcl]\NP")
        .leaf("on", "IN", r"((S\NP)\(S\NP))/NP")
        .leaf("cats", "NNS", "N")
        .role(1, 0, r"((S\NP)\(S\NP))/NP", "ARGM-LOC", (0, 1))
        .role(0, 2, r"S[dcl]\NP", "ARG2", (0, 2));

    insta::assert_snapshot!(orientations(&f, &Config::new()), @r"
    0→1 :location (semantic-role)
    0→2 :ARG2 (semantic-role)
    ");
}

#[test]
fn adjective_heads_are_inverted() {
    let f = Fixture::new()
        .leaf("big", "JJ", "N/N")
        .leaf("broken", "VBN", "N/N")
        .leaf("dog", "NN", "N")
        .dep(0, 2, "N/N", 1)
        .dep(1, 2, "N/N", 1);

    insta::assert_snapshot!(orientations(&f, &Config::new()), @r"
    2→0 :mod (adjective)
    2→1 :mod (adjective)
    ");
}

#[test]
fn modifier_functions_get_word_and_category_label() {
    let f = Fixture::new()
        .leaf("ate", "VBD", r"S[dcl]\NP")
        .leaf("In", "IN", r"((S\NP)\(S\NP))/NP")
        .leaf("park", "NN", "N")
        .dep(1, 2, r"((S\NP)\(S\NP))/NP", 1);

    insta::assert_snapshot!(orientations(&f, &Config::new()), @r"2→1 :in_((S\NP)\(S\NP))/NP (modifier)");
}

#[test]
fn plain_heads_point_at_numbered_argument() {
    let f = Fixture::new()
        .leaf("ate", "VBD", r"(S[dcl]\NP)/NP")
        .leaf("apples", "NNS", "N")
        .dep(0, 1, r"(S[dcl]\NP)/NP", 2);

    insta::assert_snapshot!(orientations(&f, &Config::new()), @"0→1 :ANUM2 (argument)");
}

#[test]
fn preposition_heads_invert_only_without_roles() {
    let f = Fixture::new()
        .leaf("part", "NN", "N/PP")
        .leaf("of", "IN", "PP/NP")
        .leaf("speech", "NN", "N")
        .dep(1, 2, "PP/NP", 1);

    insta::assert_snapshot!(orientations(&f, &Config::new()), @"1→2 :ANUM1 (argument)");
    insta::assert_snapshot!(
        orientations(&f, &Config::new().shape(DependencyShape::Unlabelled)),
        @"2→1 :of_PP/NP (modifier)"
    );
}
