//! Token containment similarity.
//!
//! Both texts are reduced to sets of lowercased whitespace tokens `A` and
//! `B`, and the score is `|A ∩ B| / min(|A|, |B|)`: the share of the smaller
//! vocabulary that also appears in the larger one. Tokens must match
//! exactly. The score lies in `[0, 1]`, is symmetric, and is `0.0` when
//! either text has no tokens. Repeated tokens count once.

use ahash::AHashSet;

use crate::analysis::tokenizer::tokenize;

/// Containment similarity between two texts.
///
/// # Examples
///
/// ```
/// use simscore::similarity::containment_similarity;
///
/// assert_eq!(containment_similarity("hello world", "world"), 1.0);
/// assert_eq!(containment_similarity("hello world", "hello there"), 0.5);
/// assert_eq!(containment_similarity("hello", "hi"), 0.0);
/// ```
pub fn containment_similarity(text1: &str, text2: &str) -> f64 {
    let tokens1: AHashSet<String> = tokenize(text1).collect();
    let tokens2: AHashSet<String> = tokenize(text2).collect();

    if tokens1.is_empty() || tokens2.is_empty() {
        return 0.0;
    }

    let (smaller, larger) = if tokens1.len() <= tokens2.len() {
        (&tokens1, &tokens2)
    } else {
        (&tokens2, &tokens1)
    };
    let shared = smaller
        .iter()
        .filter(|token| larger.contains(*token))
        .count();

    shared as f64 / smaller.len() as f64
}
