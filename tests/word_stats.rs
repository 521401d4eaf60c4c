//! WordStatistics tests: counts, ranks, top-k queries, collocations and
//! summaries over the reference fixtures.

use std::path::PathBuf;

use wordstat::{WordFrequency, WordStatConfig, WordStatError, WordStatistics};

// ==================== Helpers ====================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn init_logging() {
    // Info level so construction logs (top word included) are formatted.
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

/// Same characters as `wordstat.txt`, split across two strings.
fn fixture_strings() -> [&'static str; 2] {
    [
        "hello test this is a test and I am testing the wordstat method this is a test hello\n",
        "hello hi test\nyes this, is a test\nthere. hi it's me\ntest test test test tester?\n",
    ]
}

fn both_forms() -> Vec<WordStatistics> {
    init_logging();
    vec![
        WordStatistics::from_file(fixture("wordstat.txt")).unwrap(),
        WordStatistics::from_strings(fixture_strings()),
    ]
}

// ==================== Counts and ranks ====================

#[test]
fn test_word_count() {
    for ws in both_forms() {
        assert_eq!(ws.word_count("test"), 9);
        assert_eq!(ws.word_count("hi"), 2);
        assert_eq!(ws.word_count("hello"), 3);
        assert_eq!(ws.word_count("tester"), 1);
        assert_eq!(ws.word_count("its"), 1);
    }
}

#[test]
fn test_word_count_absent_is_zero() {
    for ws in both_forms() {
        assert_eq!(ws.word_count("absent"), 0);
        assert_eq!(ws.word_count(""), 0);
        // Counting is case sensitive; input is always lowercase.
        assert_eq!(ws.word_count("Test"), 0);
    }
}

#[test]
fn test_word_rank() {
    for ws in both_forms() {
        assert_eq!(ws.word_rank("test").unwrap(), 1);
        assert_eq!(ws.word_rank("hello").unwrap(), 2);
        assert_eq!(ws.word_rank("a").unwrap(), 2);
        assert_eq!(ws.word_rank("hi").unwrap(), 6);
        assert_eq!(ws.word_rank("and").unwrap(), 7);
        assert_eq!(ws.word_rank("i").unwrap(), 7);
        assert_eq!(ws.word_rank("tester").unwrap(), 7);
    }
}

#[test]
fn test_word_rank_absent_is_not_found() {
    let ws = WordStatistics::from_strings(["one two"]);
    let err = ws.word_rank("three").unwrap_err();
    assert!(matches!(err, WordStatError::NotFound(w) if w == "three"));
}

#[test]
fn test_totals() {
    for ws in both_forms() {
        assert_eq!(ws.total_words(), 35);
        assert_eq!(ws.distinct_words(), 18);
        assert_eq!(ws.word_list().len(), 35);
    }
}

// ==================== Top-k ====================

#[test]
fn test_most_common_words() {
    for ws in both_forms() {
        assert_eq!(ws.most_common_words(1)[0], "test");
        assert_eq!(
            ws.most_common_words(6),
            ["test", "hello", "this", "is", "a", "hi"]
        );
    }
}

#[test]
fn test_least_common_words() {
    for ws in both_forms() {
        let least = ws.least_common_words(3);
        assert_eq!(least[0], "and");
        assert_eq!(least[1], "i");
        assert_eq!(least, ["and", "i", "am"]);
    }
}

#[test]
fn test_top_k_clamps_and_zero() {
    for ws in both_forms() {
        assert_eq!(ws.most_common_words(1_000).len(), 18);
        assert_eq!(ws.least_common_words(1_000).len(), 18);
        assert!(ws.most_common_words(0).is_empty());
        assert!(ws.least_common_words(0).is_empty());
    }
}

#[test]
fn test_least_common_full_list_ends_with_most_frequent() {
    let ws = WordStatistics::from_file(fixture("wordstat.txt")).unwrap();
    let least = ws.least_common_words(18);
    assert_eq!(least.last().map(String::as_str), Some("test"));
    assert_eq!(&least[12..], ["hi", "hello", "this", "is", "a", "test"]);
}

#[test]
fn test_checked_k() {
    assert_eq!(WordStatistics::checked_k(3).unwrap(), 3);
    assert_eq!(WordStatistics::checked_k(0).unwrap(), 0);
    assert!(matches!(
        WordStatistics::checked_k(-1),
        Err(WordStatError::InvalidArgument(_))
    ));
}

#[test]
fn test_frequencies_descending() {
    let ws = WordStatistics::from_strings(["b a b c c c"]);
    assert_eq!(
        ws.frequencies(),
        vec![
            WordFrequency { word: "c".into(), count: 3 },
            WordFrequency { word: "b".into(), count: 2 },
            WordFrequency { word: "a".into(), count: 1 },
        ]
    );
}

#[test]
fn test_empty_input() {
    init_logging();
    let ws = WordStatistics::from_strings(["... 42 !!!"]);
    assert_eq!(ws.total_words(), 0);
    assert_eq!(ws.distinct_words(), 0);
    assert!(ws.most_common_words(5).is_empty());
    assert!(ws.least_common_words(5).is_empty());
    assert!(ws.most_common_collocations(5, "x", true).is_empty());
    assert!(ws.word_rank("x").unwrap_err().is_not_found());
}

#[test]
fn test_large_input_counts_survive_table_growth() {
    // Well past the default capacity of 500 puts.
    let text = "alpha beta beta gamma gamma gamma ".repeat(400);
    let ws = WordStatistics::from_strings([text]);
    assert_eq!(ws.word_count("alpha"), 400);
    assert_eq!(ws.word_count("beta"), 800);
    assert_eq!(ws.word_count("gamma"), 1_200);
    assert_eq!(ws.most_common_words(3), ["gamma", "beta", "alpha"]);
}

#[test]
fn test_queries_are_repeatable() {
    let ws = WordStatistics::from_file(fixture("wordstat.txt")).unwrap();
    let first = (
        ws.most_common_words(5),
        ws.least_common_words(5),
        ws.most_common_collocations(3, "hi", false),
    );
    for _ in 0..10 {
        assert_eq!(ws.most_common_words(5), first.0);
        assert_eq!(ws.least_common_words(5), first.1);
        assert_eq!(ws.most_common_collocations(3, "hi", false), first.2);
    }
}

// ==================== Collocations ====================

#[test]
fn test_collocations_following() {
    for ws in both_forms() {
        assert_eq!(ws.most_common_collocations(1, "me", false)[0], "test");
        assert_eq!(ws.most_common_collocations(5, "me", false), ["test", "tester"]);
    }
}

#[test]
fn test_collocations_preceding() {
    for ws in both_forms() {
        assert_eq!(ws.most_common_collocations(1, "and", true)[0], "test");
        assert_eq!(
            ws.most_common_collocations(10, "and", true),
            ["test", "hello", "this", "is", "a"]
        );
    }
}

#[test]
fn test_collocation_window_excludes_base_word() {
    let ws = WordStatistics::from_file(fixture("wordstat.txt")).unwrap();
    assert_eq!(ws.collocation_window("and", true), ["hello", "test", "this", "is", "a", "test"]);
    assert!(!ws.collocation_window("hello", false).is_empty());
    // First occurrence only: later "hello"s stay inside the window.
    assert!(ws.collocation_window("hello", false).contains(&"hello".to_string()));
    assert!(ws.collocation_window("hello", true).is_empty());
}

#[test]
fn test_collocations_absent_base_word() {
    let ws = WordStatistics::from_file(fixture("wordstat.txt")).unwrap();
    assert!(ws.most_common_collocations(3, "absent", false).is_empty());
    assert_eq!(
        ws.most_common_collocations(3, "absent", true),
        ws.most_common_words(3)
    );
}

#[test]
fn test_collocations_clamp_and_zero() {
    let ws = WordStatistics::from_strings(["x y y z"]);
    assert_eq!(ws.most_common_collocations(10, "x", false), ["y", "z"]);
    assert!(ws.most_common_collocations(0, "x", false).is_empty());
    assert!(ws.most_common_collocations(3, "z", false).is_empty());
}

#[test]
fn test_collocation_frequencies_are_window_local() {
    // "b" dominates overall but "a" dominates after the first "x".
    let ws = WordStatistics::from_strings(["b b b b x a a b"]);
    assert_eq!(ws.most_common_words(1), ["b"]);
    assert_eq!(ws.most_common_collocations(2, "x", false), ["a", "b"]);
}

// ==================== Config and summary ====================

#[test]
fn test_segment_boundary_config_changes_words() {
    let config = WordStatConfig::from_toml_str("[tokenizer]\nsegment_boundary = true\n").unwrap();
    let joined = WordStatistics::from_strings(["ab", "cd"]);
    let split = WordStatistics::from_strings_with_config(["ab", "cd"], &config).unwrap();
    assert_eq!(joined.word_count("abcd"), 1);
    assert_eq!(split.word_count("ab"), 1);
    assert_eq!(split.word_count("cd"), 1);
}

#[test]
fn test_small_table_capacity_config() {
    let config = WordStatConfig::from_toml_str("[table]\ndefault_capacity = 0\n").unwrap();
    let ws = WordStatistics::from_file_with_config(fixture("wordstat.txt"), &config).unwrap();
    assert_eq!(ws.word_count("test"), 9);
    assert_eq!(ws.word_rank("and").unwrap(), 7);
    assert_eq!(ws.most_common_collocations(1, "me", false), ["test"]);
}

#[test]
fn test_from_file_missing_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WordStatistics::from_file(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, WordStatError::Io(_)));
}

#[test]
fn test_summary() {
    let ws = WordStatistics::from_file(fixture("wordstat.txt")).unwrap();
    let summary = ws.summary(2);
    assert_eq!(summary.total_words, 35);
    assert_eq!(summary.distinct_words, 18);
    assert_eq!(
        summary.most_common,
        vec![
            WordFrequency { word: "test".into(), count: 9 },
            WordFrequency { word: "hello".into(), count: 3 },
        ]
    );
    assert_eq!(summary.least_common[0].word, "and");
    assert_eq!(summary.least_common[0].count, 1);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total_words"], 35);
    assert_eq!(json["most_common"][0]["word"], "test");
}
