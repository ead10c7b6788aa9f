//! # simscore
//!
//! Hybrid textual similarity scoring and top-N ranking.
//!
//! A pair of texts is scored by blending three measures:
//!
//! - a fuzzy word cosine that treats tokens within two edits as equal
//! - a character n-gram cosine
//! - token-set containment
//!
//! The blended score ranks candidate texts against a target with a bounded
//! heap. Stop-word removal and stemming are optional and injected through
//! [`analysis::Preprocessor`].
//!
//! ```
//! use simscore::{SimilarityOptions, best_match, compute_similarity};
//!
//! let options = SimilarityOptions::default();
//! let score = compute_similarity("hello world", "hello world", &options).unwrap();
//! assert!((score - 1.0).abs() < 1e-9);
//!
//! let best = best_match("hello world", &["hola mundo", "hallo welt"], &options)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(best.text, "hallo welt");
//! ```

pub mod analysis;
pub mod error;
pub mod ranking;
pub mod similarity;
pub mod util;
pub mod vector;

pub use error::{Result, SimScoreError};
pub use ranking::{Match, best_match, par_top_n_matches, top_n_matches};
pub use similarity::{HybridScorer, ScoreBreakdown, SimilarityOptions, compute_similarity};
pub use util::levenshtein::levenshtein_distance;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
