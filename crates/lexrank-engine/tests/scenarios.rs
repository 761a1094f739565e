//! Scenario tests: replay stored Russian analyzer output through the engine.
//!
//! The analyzer table lives in `tests/data/ru_table.json`.
//!
//! Run: cargo test -p lexrank-engine --test scenarios

use std::path::PathBuf;

use lexrank_core::{FormTag, Options, StatusCode, StemCandidate};
use lexrank_engine::{CollectingSink, Emission, Engine, TableAnalyzer, TableEntry};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn table_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/ru_table.json")
}

fn load_table() -> TableAnalyzer {
    let path = table_path();
    TableAnalyzer::from_path(&path)
        .unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

fn engine() -> Engine {
    Engine::from_table(load_table())
}

fn run(engine: &Engine, options: Options, word: &str) -> CollectingSink {
    let mut sink = CollectingSink::new();
    engine
        .process_str(&mut sink, options, word)
        .unwrap_or_else(|e| panic!("process({word}) failed: {e}"));
    sink
}

/// (stem, weight) pairs in emission order.
fn stems(sink: &CollectingSink) -> Vec<(String, f32)> {
    sink.stems()
        .map(|e| match e {
            Emission::Stem { stem, weight, .. } => (stem.clone(), *weight),
            _ => unreachable!(),
        })
        .collect()
}

/// (lexeme id, weight) pairs in emission order.
fn lemmas(sink: &CollectingSink) -> Vec<(u32, f32)> {
    sink.lemmas()
        .map(|e| match e {
            Emission::Lemma {
                lexeme_id, weight, ..
            } => (*lexeme_id, *weight),
            _ => unreachable!(),
        })
        .collect()
}

fn stem_texts(sink: &CollectingSink) -> Vec<String> {
    stems(sink).into_iter().map(|(s, _)| s).collect()
}

// ---------------------------------------------------------------------------
// Fuzzy stems
// ---------------------------------------------------------------------------

#[test]
fn sobaka_yields_one_stem() {
    let sink = run(&engine(), Options::FUZZY_STEM, "собака");
    let got = stems(&sink);
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].0, "собак");
    assert!((got[0].1 - 0.92).abs() < 1e-6);
}

#[test]
fn koshka_yields_shorter_then_longer_stem() {
    let sink = run(&engine(), Options::FUZZY_STEM, "кошка");
    assert_eq!(stem_texts(&sink), vec!["кош", "кошк"]);
    for e in sink.emissions() {
        match e {
            Emission::Stem { word, .. } => assert_eq!(word, "кошка"),
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[test]
fn sobravshikhsya_yields_two_stems() {
    let sink = run(&engine(), Options::FUZZY_STEM, "собравшихся");
    assert_eq!(stem_texts(&sink), vec!["собрав", "собравши"]);
}

#[test]
fn uppercase_input_is_lowercased() {
    let sink = run(&engine(), Options::FUZZY_STEM, "СОБАКА");
    match &sink.emissions()[0] {
        Emission::Stem { word, stem, .. } => {
            assert_eq!(word, "собака");
            assert_eq!(stem, "собак");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn non_alphabetic_word_yields_nothing() {
    let e = engine();
    for word in ["!!!", "12-34", "«»", ""] {
        let sink = run(&e, Options::all(), word);
        assert!(sink.is_empty(), "{word:?} emitted {:?}", sink.emissions());
    }
}

#[test]
fn latin_word_yields_nothing() {
    let sink = run(&engine(), Options::all(), "keyboard");
    assert!(sink.is_empty());
}

#[test]
fn mixed_word_yields_suffix_bearing_stem() {
    let sink = run(&engine(), Options::FUZZY_STEM, "QWERTYuiopasdfghjklzxcvbnmКошка");
    assert_eq!(
        stem_texts(&sink),
        vec!["qwertyuiopasdfghjklzxcvbnmкошк".to_string()]
    );
}

#[test]
fn emitted_stem_weights_stay_above_floor() {
    let e = engine();
    for word in ["собака", "кошка", "собравшихся", "стали"] {
        let sink = run(&e, Options::FUZZY_STEM, word);
        assert!(!sink.is_empty());
        assert!(sink.emissions().iter().all(|s| s.weight() > 0.1), "{word}");
    }
}

#[test]
fn stem_forms_are_passed_through_in_order() {
    let sink = run(&engine(), Options::FUZZY_STEM, "собравшихся");
    assert_eq!(sink.emissions()[0].forms(), &[FormTag(41), FormTag(43)]);
}

// ---------------------------------------------------------------------------
// Exact lemmas
// ---------------------------------------------------------------------------

#[test]
fn homonyms_share_weight() {
    let sink = run(&engine(), Options::EXACT_LEMMA, "стали");
    let got = lemmas(&sink);
    let ids: Vec<u32> = got.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![30412, 30977, 30978]);

    let total: f32 = got.iter().map(|(_, w)| w).sum();
    assert!((total - 1.0).abs() < 1e-6);
    assert!(got.iter().all(|(_, w)| *w == 1.0 / 3.0));
}

#[test]
fn unresolved_homonym_is_dropped() {
    let sink = run(&engine(), Options::EXACT_LEMMA, "собравшихся");
    assert_eq!(lemmas(&sink), vec![(20311u32, 1.0f32)]);
    assert_eq!(
        sink.emissions()[0].forms(),
        &[FormTag(41), FormTag(43), FormTag(44)]
    );
}

#[test]
fn all_unresolved_keeps_exactly_one() {
    let sink = run(&engine(), Options::EXACT_LEMMA, "ёжиками");
    assert_eq!(lemmas(&sink), vec![(5120u32, 1.0f32)]);
}

#[test]
fn both_passes_in_one_call() {
    let sink = run(&engine(), Options::all(), "стали");
    assert_eq!(sink.lemmas().count(), 3);
    assert_eq!(stem_texts(&sink), vec!["стал", "ста"]);
    assert!(matches!(sink.emissions()[0], Emission::Lemma { .. }));
}

#[test]
fn stems_only_word_has_no_lemmas() {
    let sink = run(
        &engine(),
        Options::EXACT_LEMMA,
        "qwertyuiopasdfghjklzxcvbnmкошка",
    );
    assert!(sink.is_empty());
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

fn long_word_table(len: usize) -> (TableAnalyzer, String) {
    let word = "я".repeat(len);
    let mut table = TableAnalyzer::new();
    table.insert(
        &word,
        TableEntry {
            lemmas: vec![],
            stems: vec![StemCandidate::new(3, 1, 0.9, vec![FormTag(0)])],
        },
    );
    (table, word)
}

#[test]
fn word_over_lowercase_capacity_overflows() {
    let (table, word) = long_word_table(64);
    let e = Engine::from_table(table);
    let chars: Vec<char> = word.chars().collect();
    let mut sink = CollectingSink::new();
    let status = e.process_status(
        Some(&mut sink),
        Options::FUZZY_STEM,
        Some(&chars),
        chars.len(),
    );
    assert_eq!(status, StatusCode::Overflow);
    assert!(sink.is_empty());
}

#[test]
fn word_at_lowercase_capacity_is_processed() {
    let (table, word) = long_word_table(63);
    let e = Engine::from_table(table);
    let sink = run(&e, Options::FUZZY_STEM, &word);
    assert_eq!(stem_texts(&sink), vec!["яяя"]);
}

#[test]
fn missing_sink_or_word_is_invalid() {
    let e = engine();
    let word: Vec<char> = "кошка".chars().collect();
    assert_eq!(
        e.process_status(None, Options::all(), Some(&word), word.len()),
        StatusCode::InvalidArgument
    );

    let mut sink = CollectingSink::new();
    assert_eq!(
        e.process_status(Some(&mut sink), Options::FUZZY_STEM, None, 5),
        StatusCode::InvalidArgument
    );
    assert!(sink.is_empty());
}
