//! Cosine similarity over count vectors.
//!
//! Two flavors are provided:
//!
//! - **Fuzzy word cosine** ([`word_cosine_similarity`]): token pairs whose
//!   edit distance is at most [`FUZZY_MATCH_THRESHOLD`] count as equal when
//!   accumulating the dot product. Matching is many-to-many, so a token
//!   with several near-duplicates contributes several times while the
//!   magnitudes still come from exact counts. The result is therefore not
//!   bounded by 1.0 and is returned unclamped. Every token of one text is
//!   compared with every token of the other, which costs
//!   `O(|V1| * |V2| * edit distance)` and limits this measure to short
//!   texts.
//! - **N-gram cosine** ([`ngram_cosine_similarity`]): exact-key dot product
//!   over character n-gram vectors, always within `[0, 1]`.
//!
//! Both return exactly `0.0` when either vector has zero magnitude.

use crate::error::Result;
use crate::util::levenshtein::levenshtein_distance_threshold;
use crate::vector::{CountVector, FrequencyVector, NgramVector};

/// Maximum edit distance at which two tokens are treated as the same word.
pub const FUZZY_MATCH_THRESHOLD: usize = 2;

/// `dot / (magnitude1 * magnitude2)`, or zero when the denominator vanishes.
fn cosine(dot: f64, magnitude1: f64, magnitude2: f64) -> f64 {
    let magnitude = magnitude1 * magnitude2;
    if magnitude == 0.0 {
        0.0
    } else {
        dot / magnitude
    }
}

/// Exact cosine similarity between two prebuilt count vectors.
pub fn cosine_from_vectors<V: CountVector>(v1: &V, v2: &V) -> f64 {
    cosine(v1.dot(v2) as f64, v1.magnitude(), v2.magnitude())
}

/// Fuzzy cosine between two prebuilt frequency vectors.
///
/// Every pair of tokens within [`FUZZY_MATCH_THRESHOLD`] edits adds
/// `count1 * count2` to the dot product.
pub fn fuzzy_cosine(v1: &FrequencyVector, v2: &FrequencyVector) -> f64 {
    let mut dot = 0usize;
    for (token1, count1) in v1.iter() {
        for (token2, count2) in v2.iter() {
            if levenshtein_distance_threshold(token1, token2, FUZZY_MATCH_THRESHOLD).is_some() {
                dot += count1 * count2;
            }
        }
    }

    cosine(dot as f64, v1.magnitude(), v2.magnitude())
}

/// Fuzzy word cosine similarity between two texts.
///
/// # Examples
///
/// ```
/// use simscore::similarity::word_cosine_similarity;
///
/// let sim = word_cosine_similarity("hello world", "hello");
/// assert!((sim - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
///
/// // "hallo" is one edit away from "hello".
/// assert!(word_cosine_similarity("hello", "hallo") > 0.99);
/// assert_eq!(word_cosine_similarity("hello world", "foo bar"), 0.0);
/// ```
pub fn word_cosine_similarity(text1: &str, text2: &str) -> f64 {
    fuzzy_cosine(
        &FrequencyVector::from_text(text1),
        &FrequencyVector::from_text(text2),
    )
}

/// Character n-gram cosine similarity between two texts.
///
/// # Errors
///
/// [`SimScoreError::Config`](crate::error::SimScoreError::Config) if `n`
/// is zero.
///
/// # Examples
///
/// ```
/// use simscore::similarity::ngram_cosine_similarity;
///
/// assert_eq!(ngram_cosine_similarity("night", "night", 2).unwrap(), 1.0);
/// assert_eq!(ngram_cosine_similarity("night", "nacht", 2).unwrap(), 0.25);
/// ```
pub fn ngram_cosine_similarity(text1: &str, text2: &str, n: usize) -> Result<f64> {
    let v1 = NgramVector::from_text(text1, n)?;
    let v2 = NgramVector::from_text(text2, n)?;
    Ok(cosine_from_vectors(&v1, &v2))
}
