//! Weighted hybrid similarity.
//!
//! The hybrid score blends the three measures:
//!
//! ```text
//! score = word_weight * word_cosine
//!       + ngram_weight * ngram_cosine
//!       + containment_weight * containment
//! ```
//!
//! No normalization is applied. With the default weights (0.5 / 0.3 / 0.2)
//! identical texts score about 1.0, but fuzzy word matching can push a
//! score above that, and custom weights are used as given.

use std::borrow::Cow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::analysis::preprocessor::Preprocessor;
use crate::analysis::stop::{StopWordSet, strip_stop_words};
use crate::error::Result;
use crate::similarity::containment::containment_similarity;
use crate::similarity::cosine::{cosine_from_vectors, fuzzy_cosine};
use crate::similarity::options::SimilarityOptions;
use crate::vector::{FrequencyVector, NgramVector};

/// The individual measures behind one hybrid score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Fuzzy word cosine.
    pub word: f64,
    /// Character n-gram cosine.
    pub ngram: f64,
    /// Token containment.
    pub containment: f64,
    /// Weighted sum of the three.
    pub total: f64,
}

/// Scores text pairs with a fixed, validated set of options.
///
/// Building a scorer once and reusing it avoids re-validating options and
/// rebuilding stop-word sets for every pair.
///
/// # Examples
///
/// ```
/// use simscore::similarity::{HybridScorer, SimilarityOptions};
///
/// let scorer = HybridScorer::new(SimilarityOptions::default()).unwrap();
/// let score = scorer.score("hello world", "hello world").unwrap();
/// assert!((score - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct HybridScorer {
    options: SimilarityOptions,
    stop_words: Option<StopWordSet>,
    preprocessor: Option<Preprocessor>,
}

impl HybridScorer {
    /// Create a scorer from `options`.
    ///
    /// Custom stop words in the options are removed from both texts before
    /// scoring. Nothing else about the texts changes: surviving tokens keep
    /// their case and spacing, so a list that matches no token leaves every
    /// score as it was.
    ///
    /// # Errors
    ///
    /// Fails if the options do not pass [`SimilarityOptions::validate`].
    pub fn new(options: SimilarityOptions) -> Result<Self> {
        options.validate()?;

        let stop_words = custom_stop_words(&options);

        debug!(
            ngram_size = options.ngram_size(),
            word_weight = options.word_weight(),
            ngram_weight = options.ngram_weight(),
            containment_weight = options.containment_weight(),
            custom_stop_words = options.custom_stop_words().len(),
            "created hybrid scorer"
        );

        Ok(HybridScorer {
            options,
            stop_words,
            preprocessor: None,
        })
    }

    /// Clean both texts with `preprocessor` before scoring.
    ///
    /// Custom stop words from the options are added to the preprocessor's
    /// own stop-word sets.
    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        let preprocessor = match &self.stop_words {
            Some(stop_words) => preprocessor.with_stop_words(Arc::new(stop_words.clone())),
            None => preprocessor,
        };
        self.preprocessor = Some(preprocessor);
        self
    }

    /// The options this scorer was built with.
    pub fn options(&self) -> &SimilarityOptions {
        &self.options
    }

    /// The preprocessor applied to texts, if any.
    pub fn preprocessor(&self) -> Option<&Preprocessor> {
        self.preprocessor.as_ref()
    }

    /// Run the preprocessor on `text`, or only drop custom stop words when
    /// no preprocessor is set.
    pub(crate) fn prepare<'a>(&self, text: &'a str) -> Result<Cow<'a, str>> {
        match (&self.preprocessor, &self.stop_words) {
            (Some(preprocessor), _) => Ok(Cow::Owned(preprocessor.process(text)?)),
            (None, Some(stop_words)) => Ok(strip_stop_words(text, stop_words)),
            (None, None) => Ok(Cow::Borrowed(text)),
        }
    }

    /// Score two texts that already went through [`Self::prepare`].
    pub(crate) fn breakdown_prepared(&self, text1: &str, text2: &str) -> Result<ScoreBreakdown> {
        let n = self.options.ngram_size();

        let word = fuzzy_cosine(
            &FrequencyVector::from_text(text1),
            &FrequencyVector::from_text(text2),
        );
        let ngram = cosine_from_vectors(
            &NgramVector::from_text(text1, n)?,
            &NgramVector::from_text(text2, n)?,
        );
        let containment = containment_similarity(text1, text2);

        let total = self.options.word_weight() * word
            + self.options.ngram_weight() * ngram
            + self.options.containment_weight() * containment;

        trace!(word, ngram, containment, total, "scored text pair");

        Ok(ScoreBreakdown {
            word,
            ngram,
            containment,
            total,
        })
    }

    /// Score two texts and return every component.
    ///
    /// # Errors
    ///
    /// Propagates preprocessing failures such as a stemmer error.
    pub fn score_breakdown(&self, text1: &str, text2: &str) -> Result<ScoreBreakdown> {
        let text1 = self.prepare(text1)?;
        let text2 = self.prepare(text2)?;
        self.breakdown_prepared(&text1, &text2)
    }

    /// The hybrid similarity of two texts.
    pub fn score(&self, text1: &str, text2: &str) -> Result<f64> {
        Ok(self.score_breakdown(text1, text2)?.total)
    }
}

fn custom_stop_words(options: &SimilarityOptions) -> Option<StopWordSet> {
    let words = options.custom_stop_words();
    (!words.is_empty()).then(|| StopWordSet::from_words(words))
}

/// Hybrid similarity of two texts under `options`.
///
/// Convenience wrapper that builds a [`HybridScorer`] for a single pair.
///
/// # Examples
///
/// ```
/// use simscore::{SimilarityOptions, compute_similarity};
///
/// let options = SimilarityOptions::default();
/// let same = compute_similarity("hello world", "hello world", &options).unwrap();
/// let other = compute_similarity("hello world", "hola mundo", &options).unwrap();
/// assert!(same > other);
/// ```
pub fn compute_similarity(text1: &str, text2: &str, options: &SimilarityOptions) -> Result<f64> {
    HybridScorer::new(options.clone())?.score(text1, text2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stemmer::SimpleStemmer;
    use crate::error::SimScoreError;

    #[test]
    fn test_self_similarity_with_defaults() {
        let options = SimilarityOptions::default();
        for text in ["hello world", "Bonjour le monde", "the quick brown fox"] {
            let score = compute_similarity(text, text, &options).unwrap();
            assert!((score - 1.0).abs() < 1e-9, "{text}: {score}");
        }
    }

    #[test]
    fn test_self_similarity_with_bigrams() {
        let options = SimilarityOptions::new().with_ngram_size(2);
        let score = compute_similarity("Bonjour le monde", "Bonjour le monde", &options).unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_components() {
        let scorer = HybridScorer::new(SimilarityOptions::default()).unwrap();
        let breakdown = scorer.score_breakdown("hello world", "hello").unwrap();

        assert!((breakdown.word - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        // 3 shared trigrams out of 9 and 3
        assert!((breakdown.ngram - 3.0 / (3.0 * 3f64.sqrt())).abs() < 1e-12);
        assert_eq!(breakdown.containment, 1.0);

        let expected = 0.5 * breakdown.word + 0.3 * breakdown.ngram + 0.2;
        assert!((breakdown.total - expected).abs() < 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let scorer = HybridScorer::new(SimilarityOptions::default()).unwrap();
        let pairs = [
            ("hello world", "hallo welt"),
            ("the quick brown fox", "a quick brown dog"),
            ("", "something"),
        ];
        for (text1, text2) in pairs {
            let ab = scorer.score(text1, text2).unwrap();
            let ba = scorer.score(text2, text1).unwrap();
            assert!((ab - ba).abs() < 1e-12, "{text1} / {text2}");
        }
    }

    #[test]
    fn test_no_overlap_is_zero_not_nan() {
        let scorer = HybridScorer::new(SimilarityOptions::default()).unwrap();
        let breakdown = scorer.score_breakdown("abc", "xyz").unwrap();
        assert_eq!(breakdown.word, 0.0);
        assert_eq!(breakdown.ngram, 0.0);
        assert_eq!(breakdown.containment, 0.0);
        assert_eq!(breakdown.total, 0.0);

        let empty = scorer.score("", "").unwrap();
        assert_eq!(empty, 0.0);
    }

    #[test]
    fn test_zero_weights_are_respected() {
        let options = SimilarityOptions::new()
            .with_word_weight(0.0)
            .with_ngram_weight(0.0)
            .with_containment_weight(1.0);
        let score = compute_similarity("hello world", "hello there", &options).unwrap();
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_custom_stop_words() {
        let options = SimilarityOptions::new().with_custom_stop_words(["Bonjour", "Salut"]);
        let score = compute_similarity("Bonjour le monde", "Salut le monde", &options).unwrap();
        assert!((score - 1.0).abs() < 1e-9, "got {score}");

        let unrelated = SimilarityOptions::new().with_custom_stop_words(["stage", "custom"]);
        let score = compute_similarity("Bonjour le monde", "Salut le monde", &unrelated).unwrap();
        assert!(score < 0.9, "got {score}");
    }

    #[test]
    fn test_unmatched_stop_words_leave_scores_unchanged() {
        let plain = SimilarityOptions::default();
        let with_stop_words = SimilarityOptions::new().with_custom_stop_words(["zzz"]);
        let pairs = [
            ("Hello World", "hello world"),
            ("hello   world", "hello world"),
            ("Night  Train", "night train"),
        ];
        for (text1, text2) in pairs {
            assert_eq!(
                compute_similarity(text1, text2, &plain).unwrap(),
                compute_similarity(text1, text2, &with_stop_words).unwrap(),
                "{text1:?} / {text2:?}"
            );
        }

        // Case differences still cost n-gram overlap.
        assert!(compute_similarity("Hello World", "hello world", &with_stop_words).unwrap() < 0.9);
    }

    #[test]
    fn test_stop_words_only_remove_tokens() {
        let scorer =
            HybridScorer::new(SimilarityOptions::new().with_custom_stop_words(["le"])).unwrap();
        assert_eq!(
            scorer.prepare("Bonjour  le Monde").unwrap(),
            "Bonjour Monde"
        );
        assert!(scorer.preprocessor().is_none());
    }

    #[test]
    fn test_with_preprocessor_merges_custom_stop_words() {
        let options = SimilarityOptions::new().with_custom_stop_words(["salut"]);
        let scorer = HybridScorer::new(options)
            .unwrap()
            .with_preprocessor(Preprocessor::new().with_stemmer(Arc::new(SimpleStemmer::new())));

        // "salut" is dropped and "dogs" stems to "dog".
        let score = scorer.score("Salut dogs", "dog").unwrap();
        assert!((score - 1.0).abs() < 1e-9, "got {score}");
        assert_eq!(
            scorer.preprocessor().map(Preprocessor::stemmer_name),
            Some("simple")
        );
    }

    #[test]
    fn test_invalid_options_rejected() {
        let err = HybridScorer::new(SimilarityOptions::new().with_ngram_size(0)).unwrap_err();
        assert!(err.is_config());
        assert!(compute_similarity("a", "b", &SimilarityOptions::new().with_word_weight(-1.0)).is_err());
    }

    #[test]
    fn test_stemmer_failure_propagates() {
        let failing = |_: &str| -> Result<String> { Err(SimScoreError::other("offline")) };
        let scorer = HybridScorer::new(SimilarityOptions::default())
            .unwrap()
            .with_preprocessor(Preprocessor::new().with_stemmer(Arc::new(failing)));

        assert!(matches!(
            scorer.score("hello", "world"),
            Err(SimScoreError::Analysis(_))
        ));
    }
}
