//! Similarity measures and their weighted combination.
//!
//! - [`cosine`]: fuzzy word cosine and exact n-gram cosine
//! - [`containment`]: token-set containment
//! - [`hybrid`]: the weighted blend used for ranking
//! - [`options`]: configuration with explicit "unset" fields

pub mod containment;
pub mod cosine;
pub mod hybrid;
pub mod options;

pub use containment::containment_similarity;
pub use cosine::{
    FUZZY_MATCH_THRESHOLD, cosine_from_vectors, fuzzy_cosine, ngram_cosine_similarity,
    word_cosine_similarity,
};
pub use hybrid::{HybridScorer, ScoreBreakdown, compute_similarity};
pub use options::SimilarityOptions;
