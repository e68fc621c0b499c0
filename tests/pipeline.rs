//! End-to-end pipeline tests: text -> suffix tree -> suffix array -> BWT.

use test_case::test_case;
use ukkonen::{bwt, SuffixTree, TextError};

#[test_case("banana$", &[6, 5, 3, 1, 0, 4, 2], b"annb$aa"; "banana")]
#[test_case("a$", &[1, 0], b"a$"; "single character")]
#[test_case("aaaa$", &[4, 3, 2, 1, 0], b"aaaa$"; "repeated character")]
#[test_case("mississippi$", &[11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2], b"ipssm$pissii"; "mississippi")]
fn pipeline_produces_expected_outputs(text: &str, suffix_array: &[usize], transform: &[u8]) {
    let tree = SuffixTree::build(text).expect("build should succeed");
    let extracted = tree.suffix_array();
    assert_eq!(extracted, suffix_array);

    let emitted = bwt::transform(tree.text(), &extracted);
    assert_eq!(emitted, transform);
    assert_eq!(emitted.len(), text.len());

    assert_eq!(
        bwt::invert(&emitted).expect("inversion should succeed"),
        text.as_bytes()
    );
}

#[test]
fn generate_is_equivalent_to_the_explicit_pipeline() {
    let text = "abracadabra$";
    let tree = SuffixTree::build(text).expect("build should succeed");
    let explicit = bwt::transform(tree.text(), &tree.suffix_array());
    let generated = bwt::generate(text).expect("pipeline should succeed");
    assert_eq!(explicit, generated);
}

#[test]
fn build_reports_precondition_violations() {
    assert_eq!(SuffixTree::build("").unwrap_err(), TextError::Empty);
    assert_eq!(
        SuffixTree::build("no-terminal").unwrap_err(),
        TextError::MissingTerminal
    );
    assert_eq!(
        SuffixTree::build("mid$dle$").unwrap_err(),
        TextError::StrayTerminal { position: 3 }
    );
}

#[test]
fn build_reports_alphabet_violations() {
    let err = SuffixTree::build("tab\there$").unwrap_err();
    assert_eq!(
        err,
        TextError::UnsupportedCharacter {
            ch: '\t',
            position: 3
        }
    );
    // Errors carry a descriptive rendering for callers that log them.
    assert!(err.to_string().contains("position 3"));
}

#[test]
fn full_band_text_survives_the_round_trip() {
    // One of every admissible non-terminal symbol, then the terminal.
    let mut text: Vec<u8> = (37u8..=126).collect();
    text.push(b'$');

    let tree = SuffixTree::build(text.clone()).expect("build should succeed");
    let suffix_array = tree.suffix_array();

    // All symbols are distinct, so sorting offsets by first character is the
    // whole story: terminal first, then ascending byte order.
    assert_eq!(suffix_array[0], text.len() - 1);
    let transform = bwt::transform(tree.text(), &suffix_array);
    assert_eq!(bwt::invert(&transform).expect("inversion should succeed"), text);
}

#[test]
fn tree_exposes_structural_counters() {
    let tree = SuffixTree::build("banana$").expect("build should succeed");
    let stats = tree.stats();
    assert_eq!(stats.leaf_count, 7);
    assert!(stats.node_count <= 2 * stats.text_len);
    assert_eq!(tree.open_end(), 6);
}
