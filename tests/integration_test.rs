//! Integration tests for entitydeps.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use entitydeps::token::{Analysis, DependencyEdge, DependencyEdgeLabel, Sentence, Token};
use entitydeps::tokenize::Record;
use entitydeps::{
    Forest, Frame, Frames, PrecomputedTokenizer, SegmentTokenizer, Source, SourceOptions,
    TokenId, Tree,
};
use test_case::test_case;

fn edge(content: &str, offset: i32, head: i32, label: DependencyEdgeLabel) -> Token {
    Token::new(content, offset).with_edge(DependencyEdge::new(head, label))
}

/// "I prefer the morning flight through Denver." then
/// "Book me the flight through Houston." as one document.
fn document() -> (Vec<Sentence>, Vec<Token>) {
    use DependencyEdgeLabel::{Det, Dobj, Iobj, Nn, Nsubj, P, Pobj, Prep, Root};
    let tokens = vec![
        edge("I", 0, 1, Nsubj),
        edge("prefer", 2, 1, Root),
        edge("the", 9, 4, Det),
        edge("morning", 13, 4, Nn),
        edge("flight", 21, 1, Dobj),
        edge("through", 28, 4, Prep),
        edge("Denver", 36, 5, Pobj),
        edge(".", 42, 1, P),
        edge("Book", 44, 8, Root),
        edge("me", 49, 8, Iobj),
        edge("the", 52, 11, Det),
        edge("flight", 56, 8, Dobj),
        edge("through", 63, 11, Prep),
        edge("Houston", 71, 12, Pobj),
        edge(".", 78, 8, P),
    ];
    let sentences = vec![
        Sentence::new("I prefer the morning flight through Denver.", 0),
        Sentence::new("Book me the flight through Houston.", 44),
    ];
    (sentences, tokens)
}

fn contents<'a>(tokens: impl Iterator<Item = &'a Token>) -> Vec<&'a str> {
    tokens.map(Token::content).collect()
}

fn document_tokenizer() -> PrecomputedTokenizer {
    let (sentences, tokens) = document();
    let text = "I prefer the morning flight through Denver. Book me the flight through Houston.";
    PrecomputedTokenizer::new(vec![Record {
        text: text.to_string(),
        analysis: Analysis {
            sentences,
            tokens,
            sentiment: None,
        },
    }])
}

#[test]
fn test_tree_queries() {
    let (_, tokens) = document();
    let tree = Tree::parse(0, &tokens[..8]).expect("parse failed");

    assert_eq!(tree.root().map(Token::content), Some("prefer"));
    assert_eq!(tree.len(), 8);

    let flight = tree.search(|t| t.content() == "flight").expect("flight");
    assert_eq!(tree.head(flight).map(Token::content), Some("prefer"));
    assert_eq!(
        contents(tree.dependents(flight)),
        ["the", "morning", "through"]
    );
    assert!(!tree.has_dependents(tree.search(|t| t.content() == "Denver").expect("Denver")));
}

#[test]
fn test_forest_from_frame_sentences() {
    let (sentences, tokens) = document();
    let mut frame = Frame::new(sentences, tokens);
    frame.mark_entity(4..5).expect("mark flight");
    frame.mark_entity(11..12).expect("mark flight");

    let forest = Forest::build(&[frame]).expect("build failed");
    assert_eq!(forest.trees().count(), 2);
    assert_eq!(contents(forest.roots()), ["prefer", "Book"]);
    assert_eq!(contents(forest.heads()), ["prefer", "Book"]);
    assert_eq!(
        contents(forest.dependents()),
        ["the", "morning", "through", "the", "through"]
    );
    assert!(forest.is_entity(TokenId::new(0, 11)));
    assert!(!forest.is_entity(TokenId::new(0, 10)));
}

#[test]
fn test_source_to_relationships() {
    let tokenizer = document_tokenizer().with_fallback(SegmentTokenizer::new());
    let texts: Vec<String> = tokenizer.texts().map(str::to_string).collect();
    let source = Source::new(["flight"], texts);

    let frames = source
        .frames(&tokenizer, &SourceOptions::default())
        .expect("frames failed");
    assert_eq!(frames.len(), 1);
    assert_eq!(frames.entities()["flight"].len(), 2);

    let forest = frames.forest().expect("forest failed");
    assert_eq!(
        contents(forest.relationships()),
        ["prefer", "Book", "the", "morning", "through", "the", "through"]
    );
    assert_eq!(frames.forest_builds(), 1);
}

#[test]
fn test_dependencies_cover_every_edge() {
    let (sentences, tokens) = document();
    let count = tokens.len();
    let mut frame = Frame::new(sentences, tokens);
    frame.mark_entity(6..7).expect("mark Denver");
    frame.mark_entity(13..14).expect("mark Houston");
    let frames = Frames::new(vec![frame]);

    let forest = frames.forest().expect("forest failed");
    // Every token but the two roots contributes one edge.
    assert_eq!(forest.dependencies().count(), count - 2);

    let first = forest.dependencies().next().expect("edge");
    assert_eq!(first.head.content(), "prefer");
    assert_eq!(first.dependent.content(), ".");
    assert_eq!(first.label, DependencyEdgeLabel::P);
}

#[test_case("Denver", &["through"], &[] ; "leaf entity")]
#[test_case("through Denver", &["flight"], &[] ; "multi-token entity")]
#[test_case("morning flight", &["prefer"], &["the"] ; "scan ends at entity child")]
fn test_entity_relationships(alias: &str, heads: &[&str], dependents: &[&str]) {
    let tokenizer = document_tokenizer().with_fallback(SegmentTokenizer::new());
    let texts: Vec<String> = tokenizer.texts().map(str::to_string).collect();
    let frames = Source::new([alias], texts)
        .frames(&tokenizer, &SourceOptions::default())
        .expect("frames failed");

    let forest = frames.forest().expect("forest failed");
    assert_eq!(contents(forest.heads()), heads);
    assert_eq!(contents(forest.dependents()), dependents);
}

#[test]
fn test_sentences_without_entities_are_skipped() {
    let (sentences, tokens) = document();
    let mut frame = Frame::new(sentences, tokens);
    frame.mark_entity(13..14).expect("mark Houston");

    let forest = Forest::build(&[frame]).expect("build failed");
    assert_eq!(contents(forest.roots()), ["Book"]);
    assert_eq!(contents(forest.heads()), ["through"]);
}

#[test]
fn test_cycle_surfaces_as_error() {
    let tokens = vec![
        edge("a", 0, 1, DependencyEdgeLabel::Root),
        edge("b", 2, 0, DependencyEdgeLabel::Dobj),
    ];
    let mut frame = Frame::new(Vec::new(), tokens);
    frame.mark_entity(1..2).expect("mark b");
    let frames = Frames::new(vec![frame]);

    let err = frames.forest().expect_err("cycle must fail");
    assert!(err.is_malformed_input());
    // The failure is cached like a success.
    assert!(frames.forest().is_err());
    assert_eq!(frames.forest_builds(), 1);
}

mod property_tests {
    use super::edge;
    use entitydeps::Tree;
    use entitydeps::token::{DependencyEdgeLabel, Token};
    use proptest::prelude::*;

    /// Token 0 is the root; every other token points at an earlier one.
    fn arb_tokens() -> impl Strategy<Value = Vec<Token>> {
        prop::collection::vec(any::<prop::sample::Index>(), 0..40).prop_map(|picks| {
            let mut tokens = vec![edge("t0", 0, 0, DependencyEdgeLabel::Root)];
            for (i, pick) in picks.iter().enumerate() {
                let position = i + 1;
                let head = i32::try_from(pick.index(position)).expect("small");
                let offset = i32::try_from(position * 3).expect("small");
                tokens.push(edge(
                    &format!("t{position}"),
                    offset,
                    head,
                    DependencyEdgeLabel::Dep,
                ));
            }
            tokens
        })
    }

    proptest! {
        #[test]
        fn every_token_reaches_root(tokens in arb_tokens()) {
            let tree = Tree::parse(0, &tokens).expect("acyclic input");
            prop_assert_eq!(tree.len(), tokens.len());

            let root = tree.root_node().expect("root");
            for node in tree.walk_nodes() {
                let mut current = node;
                let mut steps = 0;
                while let Some(head) = tree.head_of(current) {
                    current = head;
                    steps += 1;
                    prop_assert!(steps <= tree.len());
                }
                prop_assert_eq!(current, root);
            }
        }

        #[test]
        fn dependents_are_ascending(tokens in arb_tokens()) {
            let tree = Tree::parse(0, &tokens).expect("acyclic input");
            for token in &tokens {
                let ids: Vec<i32> = tree.dependents(token).map(Token::id).collect();
                prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
            }
        }

        #[test]
        fn walk_is_deterministic(tokens in arb_tokens()) {
            let tree = Tree::parse(0, &tokens).expect("acyclic input");
            let first: Vec<i32> = tree.walk().map(Token::id).collect();
            let second: Vec<i32> = tree.walk().map(Token::id).collect();
            prop_assert_eq!(first.len(), tokens.len());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn cycles_are_rejected(len in 2usize..30) {
            // Each token heads the next; the root closes the loop.
            let last = i32::try_from(len - 1).expect("small");
            let tokens: Vec<Token> = (0..len)
                .map(|i| {
                    let position = i32::try_from(i).expect("small");
                    if i == 0 {
                        edge("r", 0, last, DependencyEdgeLabel::Root)
                    } else {
                        edge("x", position * 2, position - 1, DependencyEdgeLabel::Dep)
                    }
                })
                .collect();
            prop_assert!(Tree::parse(0, &tokens).is_err());
        }
    }
}

mod cli_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const ANALYSES: &str = r#"[
        {"text": "Book the flight.", "analysis": {
            "sentences": [{"text": {"content": "Book the flight.", "begin_offset": 0}}],
            "tokens": [
                {"text": {"content": "Book", "begin_offset": 0}, "dependency_edge": {"head_token_index": 0, "label": "ROOT"}},
                {"text": {"content": "the", "begin_offset": 5}, "dependency_edge": {"head_token_index": 2, "label": "DET"}},
                {"text": {"content": "flight", "begin_offset": 9}, "dependency_edge": {"head_token_index": 0, "label": "DOBJ"}},
                {"text": {"content": ".", "begin_offset": 15}, "dependency_edge": {"head_token_index": 0, "label": "P"}}
            ]
        }}
    ]"#;

    fn input(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("analyses.json");
        std::fs::write(&path, ANALYSES).expect("write input");
        path
    }

    fn entitydeps() -> Command {
        let mut cmd = Command::cargo_bin("entitydeps").expect("binary");
        cmd.env_remove("ENTITYDEPS_INPUT").env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_heads_text() {
        let dir = TempDir::new().expect("temp dir");
        entitydeps()
            .args(["heads", "-e", "flight", "-i"])
            .arg(input(&dir))
            .assert()
            .success()
            .stdout(predicate::str::contains("Heads (1):").and(predicate::str::contains("Book")));
    }

    #[test]
    fn test_dependents_json() {
        let dir = TempDir::new().expect("temp dir");
        entitydeps()
            .args(["--format", "json", "dependents", "-e", "flight", "-i"])
            .arg(input(&dir))
            .assert()
            .success()
            .stdout(predicate::str::contains("\"content\": \"the\""));
    }

    #[test]
    fn test_missing_entity_fails() {
        let dir = TempDir::new().expect("temp dir");
        entitydeps()
            .args(["heads", "-i"])
            .arg(input(&dir))
            .assert()
            .failure()
            .stderr(predicate::str::contains("--entity"));
    }

    #[test]
    fn test_missing_file_json_error() {
        entitydeps()
            .args(["--format", "json", "heads", "-e", "x", "-i", "/nonexistent/analyses.json"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("\"error\""));
    }

    #[test]
    fn test_dot_output() {
        let dir = TempDir::new().expect("temp dir");
        entitydeps()
            .args(["dot", "-e", "flight", "-i"])
            .arg(input(&dir))
            .assert()
            .success()
            .stdout(predicate::str::starts_with("digraph {").and(predicate::str::contains("\"9\" -> \"5\";")));
    }

    #[test]
    fn test_tokenize_inline_text() {
        entitydeps()
            .args(["tokenize", "--text", "Fly to Denver."])
            .assert()
            .success()
            .stdout(predicate::str::contains("Denver"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().expect("temp dir");
        let out = dir.path().join("frames.json");
        entitydeps()
            .args(["export", "-e", "flight", "-i"])
            .arg(input(&dir))
            .arg("-o")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("Exported 1 frames"));
        assert!(out.exists());
    }
}
