//! Optional text cleaning applied before scoring.
//!
//! A [`Preprocessor`] tokenizes text the same way the scorers do, drops
//! tokens found in any registered stop-word set, stems what is left, and
//! joins the result back with single spaces. The scorers accept its output
//! like any other text.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use simscore::analysis::{Preprocessor, SimpleStemmer, StopWordSet};
//!
//! let preprocessor = Preprocessor::new()
//!     .with_stop_words(Arc::new(StopWordSet::english()))
//!     .with_stemmer(Arc::new(SimpleStemmer::new()));
//!
//! assert_eq!(
//!     preprocessor.process("The dogs are running").unwrap(),
//!     "dog runn"
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::analysis::stemmer::{IdentityStemmer, Stemmer};
use crate::analysis::stop::StopWords;
use crate::analysis::tokenizer::tokenize;
use crate::error::{Result, SimScoreError};

/// Stop-word removal followed by stemming.
#[derive(Clone)]
pub struct Preprocessor {
    stop_words: Vec<Arc<dyn StopWords>>,
    stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preprocessor")
            .field("stop_word_sets", &self.stop_words.len())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor {
    /// A preprocessor with no stop words and the identity stemmer.
    pub fn new() -> Self {
        Preprocessor {
            stop_words: Vec::new(),
            stemmer: Arc::new(IdentityStemmer),
        }
    }

    /// Register another stop-word set. A token is dropped if any set
    /// contains it.
    pub fn with_stop_words(mut self, stop_words: Arc<dyn StopWords>) -> Self {
        self.stop_words.push(stop_words);
        self
    }

    /// Replace the stemmer.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Name of the configured stemmer.
    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }

    fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.iter().any(|set| set.is_stop_word(token))
    }

    /// Clean `text` into a list of lowercased, stemmed, non-stop tokens.
    ///
    /// # Errors
    ///
    /// Returns [`SimScoreError::Analysis`] naming the stemmer and the token
    /// if stemming fails.
    pub fn tokens(&self, text: &str) -> Result<Vec<String>> {
        tokenize(text)
            .filter(|token| !self.is_stop_word(token))
            .map(|token| {
                self.stemmer.stem(&token).map_err(|e| {
                    SimScoreError::analysis(format!(
                        "stemmer '{}' failed on token '{}': {}",
                        self.stemmer.name(),
                        token,
                        e
                    ))
                })
            })
            .filter(|stemmed| !matches!(stemmed, Ok(s) if s.is_empty()))
            .collect()
    }

    /// Clean `text` and join the surviving tokens with single spaces.
    pub fn process(&self, text: &str) -> Result<String> {
        let processed = self.tokens(text)?.join(" ");
        trace!(original = text, processed = %processed, "preprocessed text");
        Ok(processed)
    }
}
