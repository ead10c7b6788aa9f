use std::sync::Arc;

use simscore::analysis::{Preprocessor, SimpleStemmer, StopWordSet};
use simscore::similarity::{
    HybridScorer, SimilarityOptions, compute_similarity, containment_similarity,
    ngram_cosine_similarity, word_cosine_similarity,
};
use simscore::{SimScoreError, levenshtein_distance};

const TEXTS: [&str; 6] = [
    "hello world",
    "the quick brown fox",
    "Bonjour le monde",
    "hallo welt",
    "",
    "日本語 テキスト",
];

#[test]
fn levenshtein_properties() {
    for a in TEXTS {
        assert_eq!(levenshtein_distance(a, a), 0);
        assert_eq!(levenshtein_distance("", a), a.chars().count());
        for b in TEXTS {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
}

#[test]
fn self_similarity_saturates_default_weights() {
    let options = SimilarityOptions::default();
    for text in TEXTS.iter().filter(|t| !t.is_empty()) {
        let score = compute_similarity(text, text, &options).unwrap();
        assert!((score - 1.0).abs() < 1e-9, "{text}: {score}");
    }
}

#[test]
fn hybrid_score_is_symmetric() {
    let options = SimilarityOptions::new().with_ngram_size(2);
    for a in TEXTS {
        for b in TEXTS {
            let ab = compute_similarity(a, b, &options).unwrap();
            let ba = compute_similarity(b, a, &options).unwrap();
            assert!((ab - ba).abs() < 1e-12, "({a}, {b}): {ab} vs {ba}");
        }
    }
}

#[test]
fn disjoint_texts_score_exactly_zero() {
    assert_eq!(word_cosine_similarity("alpha beta", "xylophone quartz"), 0.0);
    assert_eq!(
        ngram_cosine_similarity("alpha beta", "xylophone quartz", 3).unwrap(),
        0.0
    );
    assert_eq!(containment_similarity("alpha beta", "xylophone quartz"), 0.0);

    let score = compute_similarity("", "", &SimilarityOptions::default()).unwrap();
    assert!(!score.is_nan());
    assert_eq!(score, 0.0);
}

#[test]
fn ngram_examples() {
    assert_eq!(ngram_cosine_similarity("night", "night", 2).unwrap(), 1.0);
    assert_eq!(ngram_cosine_similarity("night", "nacht", 2).unwrap(), 0.25);
}

#[test]
fn zero_ngram_size_is_a_config_error() {
    let options = SimilarityOptions::new().with_ngram_size(0);
    let err = compute_similarity("a", "b", &options).unwrap_err();
    assert!(matches!(err, SimScoreError::Config(_)));
}

#[test]
fn custom_stop_words_make_greetings_irrelevant() {
    let options = SimilarityOptions::new().with_custom_stop_words(["Bonjour", "Salut"]);
    let score = compute_similarity("Bonjour le monde", "Salut le monde", &options).unwrap();
    assert!((score - 1.0).abs() < 1e-9, "got {score}");

    let plain = compute_similarity(
        "Bonjour le monde",
        "Salut le monde",
        &SimilarityOptions::default(),
    )
    .unwrap();
    assert!(plain < score);
}

#[test]
fn injected_preprocessor_normalizes_inflections() {
    let preprocessor = Preprocessor::new()
        .with_stop_words(Arc::new(StopWordSet::english()))
        .with_stemmer(Arc::new(SimpleStemmer::new()));
    let scorer = HybridScorer::new(SimilarityOptions::default())
        .unwrap()
        .with_preprocessor(preprocessor);

    let raw = compute_similarity(
        "the dogs are barking",
        "a dog barking",
        &SimilarityOptions::default(),
    )
    .unwrap();
    let cleaned = scorer.score("the dogs are barking", "a dog barking").unwrap();
    assert!((cleaned - 1.0).abs() < 1e-9, "got {cleaned}");
    assert!(cleaned > raw);
}

#[test]
fn score_breakdown_matches_total() {
    let options = SimilarityOptions::new()
        .with_word_weight(0.2)
        .with_ngram_weight(0.2)
        .with_containment_weight(0.6);
    let scorer = HybridScorer::new(options).unwrap();
    let breakdown = scorer
        .score_breakdown("fuzzy search engine", "fuzzy serch engines")
        .unwrap();

    let expected =
        0.2 * breakdown.word + 0.2 * breakdown.ngram + 0.6 * breakdown.containment;
    assert!((breakdown.total - expected).abs() < 1e-12);
    assert_eq!(
        breakdown.total,
        scorer
            .score("fuzzy search engine", "fuzzy serch engines")
            .unwrap()
    );
}
