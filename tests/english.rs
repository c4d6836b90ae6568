//! Tests de integración del analizador para inglés.
//!
//! Usan un subconjunto del léxico VADER en tests/data.
//! Ejecutar solo estos tests:  cargo test --test english

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use vader::{Polarity, SentimentAnalyzer, SentimentScores};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn create_test_analyzer() -> SentimentAnalyzer {
    SentimentAnalyzer::from_files(
        data_path("vader_lexicon_subset.txt"),
        data_path("emoji_lexicon_subset.txt"),
    )
    .expect("Failed to create analyzer")
}

fn assert_scores(actual: SentimentScores, neg: f64, neu: f64, pos: f64, compound: f64) {
    let expected = SentimentScores {
        negative: neg,
        neutral: neu,
        positive: pos,
        compound,
    };
    assert_eq!(actual, expected, "Puntuaciones inesperadas: {}", actual);
}

#[test]
fn test_smart_handsome_funny() {
    let analyzer = create_test_analyzer();
    let scores = analyzer.polarity_scores("VADER is smart, handsome, and funny.");
    assert_scores(scores, 0.0, 0.254, 0.746, 0.8316);
}

#[test]
fn test_kind_of_good() {
    let analyzer = create_test_analyzer();
    let scores = analyzer.polarity_scores("The book was kind of good.");
    assert_scores(scores, 0.0, 0.657, 0.343, 0.3832);
}

#[test]
fn test_good_but_uncompelling() {
    let analyzer = create_test_analyzer();
    let scores = analyzer.polarity_scores(
        "The plot was good, but the characters are uncompelling and the dialog is not great.",
    );
    assert_scores(scores, 0.327, 0.579, 0.094, -0.7042);
    assert_eq!(scores.polarity(), Polarity::Negative);
}

#[test]
fn test_very_clean_no_problem() {
    let analyzer = create_test_analyzer();
    let scores = analyzer.polarity_scores("Very clean, no problem");
    assert_scores(scores, 0.0, 0.128, 0.872, 0.6997);
}

#[test]
fn test_not_bad_ignores_case() {
    let analyzer = create_test_analyzer();
    assert_scores(analyzer.polarity_scores("not bad"), 0.0, 0.26, 0.74, 0.431);
    assert_scores(analyzer.polarity_scores("Not bad"), 0.0, 0.26, 0.74, 0.431);
}

#[test]
fn test_booster_increases_compound() {
    let analyzer = create_test_analyzer();
    let good = analyzer.polarity_scores("good");
    let very_good = analyzer.polarity_scores("very good");
    assert_eq!(good.compound, 0.4404);
    assert_eq!(very_good.compound, 0.4927);
    assert!(very_good.compound > good.compound);

    let bad = analyzer.polarity_scores("bad");
    let very_bad = analyzer.polarity_scores("very bad");
    assert!(very_bad.compound < bad.compound);
}

#[test]
fn test_but_weights_second_clause() {
    let analyzer = create_test_analyzer();
    // love (3.2) * 0.5 + sad (-2.1) * 1.5 = -1.55
    let scores = analyzer.polarity_scores("I love it but the ending is sad");
    assert_scores(scores, 0.353, 0.426, 0.221, -0.3716);

    let without_but = analyzer.polarity_scores("I love it and the ending is sad");
    assert!(without_but.compound > 0.0);
}

#[test]
fn test_question_marks_amplify() {
    let analyzer = create_test_analyzer();
    let scores = analyzer.polarity_scores("What a great day??");
    assert_scores(scores, 0.0, 0.31, 0.69, 0.6662);
}

#[test]
fn test_negative_sentence_with_emoticon() {
    let analyzer = create_test_analyzer();
    let scores = analyzer.polarity_scores("I hate this horrible, horrible day :(");
    assert_scores(scores, 0.872, 0.128, 0.0, -0.9274);
}

#[test]
fn test_emoji_substitution() {
    let analyzer = create_test_analyzer();
    // 💋 -> "kiss mark", 😁 -> "beaming face with smiling eyes"
    let scores = analyzer.polarity_scores("Catch utf-8 emoji such as 💘 and 💋 and 😁");
    assert_scores(scores, 0.0, 0.735, 0.265, 0.6597);

    let plain = analyzer.polarity_scores("Catch utf-8 emoji such as");
    assert_scores(plain, 0.0, 1.0, 0.0, 0.0);
}

#[test]
fn test_no_signal_is_fully_neutral() {
    let analyzer = create_test_analyzer();
    assert_scores(analyzer.polarity_scores("the a of"), 0.0, 1.0, 0.0, 0.0);
    assert_scores(analyzer.polarity_scores(""), 0.0, 0.0, 0.0, 0.0);
}

const SENTENCES: &[&str] = &[
    "VADER is smart, handsome, and funny!",
    "VADER is VERY SMART, handsome, and FUNNY!!!",
    "The book was good.",
    "At least it isn't a horrible book.",
    "Today SUX!",
    "Make sure you :) or :D today!",
    "Not bad at all",
    "I hate this horrible, horrible day :( ??????",
    "happy happy happy happy happy happy happy happy!!!!",
    "It was the shit, yeah right, but no problem 😢",
];

#[test]
fn test_proportions_sum_to_one_and_compound_is_bounded() {
    let analyzer = create_test_analyzer();
    for sentence in SENTENCES {
        let s = analyzer.polarity_scores(sentence);
        let total = s.negative + s.neutral + s.positive;
        assert!(
            (total - 1.0).abs() <= 0.002,
            "Las proporciones de '{}' suman {}",
            sentence,
            total
        );
        assert!(
            (-1.0..=1.0).contains(&s.compound),
            "Compuesto fuera de rango en '{}': {}",
            sentence,
            s.compound
        );
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let analyzer = create_test_analyzer();
    for sentence in SENTENCES {
        let first = analyzer.polarity_scores(sentence);
        let second = analyzer.polarity_scores(sentence);
        assert_eq!(first.compound.to_bits(), second.compound.to_bits());
        assert_eq!(first, second);
    }
}

#[test]
fn test_shared_analyzer_across_threads() {
    let analyzer = Arc::new(create_test_analyzer());
    let expected: Vec<SentimentScores> =
        SENTENCES.iter().map(|s| analyzer.polarity_scores(s)).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            thread::spawn(move || {
                SENTENCES
                    .iter()
                    .map(|s| analyzer.polarity_scores(s))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
