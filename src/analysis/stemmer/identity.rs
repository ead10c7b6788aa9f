//! Identity stemmer implementation.

use crate::analysis::stemmer::Stemmer;
use crate::error::Result;

/// Stemmer that returns words unchanged.
///
/// Used when only stop-word removal is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> Result<String> {
        Ok(word.to_string())
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
