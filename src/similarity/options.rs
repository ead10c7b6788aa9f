//! Configuration for hybrid similarity scoring.
//!
//! Every tunable is optional. An unset field resolves to its documented
//! default, while an explicit value, zero included, always wins. Options
//! can be built in code or loaded from JSON.
//!
//! # Examples
//!
//! ```
//! use simscore::similarity::options::{DEFAULT_NGRAM_WEIGHT, SimilarityOptions};
//!
//! let options = SimilarityOptions::new()
//!     .with_ngram_size(2)
//!     .with_word_weight(0.0);
//!
//! assert_eq!(options.ngram_size(), 2);
//! assert_eq!(options.word_weight(), 0.0);
//! assert_eq!(options.ngram_weight(), DEFAULT_NGRAM_WEIGHT);
//!
//! let loaded = SimilarityOptions::from_json(r#"{"ngram_size": 4}"#).unwrap();
//! assert_eq!(loaded.ngram_size(), 4);
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimScoreError};

/// Default character n-gram window.
pub const DEFAULT_NGRAM_SIZE: usize = 3;
/// Default weight of the fuzzy word cosine.
pub const DEFAULT_WORD_WEIGHT: f64 = 0.5;
/// Default weight of the n-gram cosine.
pub const DEFAULT_NGRAM_WEIGHT: f64 = 0.3;
/// Default weight of the containment score.
pub const DEFAULT_CONTAINMENT_WEIGHT: f64 = 0.2;

/// Immutable settings for [`HybridScorer`](crate::similarity::HybridScorer).
///
/// The default weights sum to 1.0, so identical texts score about 1.0.
/// Custom weights are not normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimilarityOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    ngram_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    word_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ngram_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    containment_weight: Option<f64>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    custom_stop_words: BTreeSet<String>,
}

impl SimilarityOptions {
    /// Options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character n-gram window size.
    pub fn with_ngram_size(mut self, n: usize) -> Self {
        self.ngram_size = Some(n);
        self
    }

    /// Set the weight of the fuzzy word cosine.
    pub fn with_word_weight(mut self, weight: f64) -> Self {
        self.word_weight = Some(weight);
        self
    }

    /// Set the weight of the n-gram cosine.
    pub fn with_ngram_weight(mut self, weight: f64) -> Self {
        self.ngram_weight = Some(weight);
        self
    }

    /// Set the weight of the containment score.
    pub fn with_containment_weight(mut self, weight: f64) -> Self {
        self.containment_weight = Some(weight);
        self
    }

    /// Add stop words removed from both texts before scoring.
    ///
    /// Words are trimmed and lowercased; blank entries are ignored. Calling
    /// this more than once accumulates words.
    pub fn with_custom_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.custom_stop_words.extend(words.into_iter().filter_map(|word| {
            let normalized = word.as_ref().trim().to_lowercase();
            (!normalized.is_empty()).then_some(normalized)
        }));
        self
    }

    /// Resolved n-gram window size.
    pub fn ngram_size(&self) -> usize {
        self.ngram_size.unwrap_or(DEFAULT_NGRAM_SIZE)
    }

    /// Resolved word cosine weight.
    pub fn word_weight(&self) -> f64 {
        self.word_weight.unwrap_or(DEFAULT_WORD_WEIGHT)
    }

    /// Resolved n-gram cosine weight.
    pub fn ngram_weight(&self) -> f64 {
        self.ngram_weight.unwrap_or(DEFAULT_NGRAM_WEIGHT)
    }

    /// Resolved containment weight.
    pub fn containment_weight(&self) -> f64 {
        self.containment_weight.unwrap_or(DEFAULT_CONTAINMENT_WEIGHT)
    }

    /// Normalized custom stop words.
    pub fn custom_stop_words(&self) -> &BTreeSet<String> {
        &self.custom_stop_words
    }

    /// Check that the options describe a computable score.
    ///
    /// # Errors
    ///
    /// [`SimScoreError::Config`] if the n-gram size is zero or a weight is
    /// negative, NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if self.ngram_size == Some(0) {
            return Err(SimScoreError::config("ngram_size must be at least 1"));
        }

        for (name, weight) in [
            ("word_weight", self.word_weight),
            ("ngram_weight", self.ngram_weight),
            ("containment_weight", self.containment_weight),
        ] {
            if let Some(weight) = weight {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(SimScoreError::config(format!(
                        "{name} must be a finite non-negative number, got {weight}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Parse and validate options from a JSON document.
    ///
    /// Missing fields stay unset. Unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut options: SimilarityOptions = serde_json::from_str(json)?;
        let stop_words = std::mem::take(&mut options.custom_stop_words);
        options = options.with_custom_stop_words(stop_words);
        options.validate()?;
        Ok(options)
    }

    /// Read, parse and validate options from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the options, omitting unset fields.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
