//! Suffix-stripping stemmer.

use std::cmp::Reverse;

use super::Stemmer;
use crate::error::Result;

const DEFAULT_SUFFIXES: &[&str] = &[
    "ing", "ed", "er", "est", "ly", "s", "es", "ies", "ied", "tion", "sion", "able", "ible",
    "ment", "ness", "ful",
];

/// Minimum number of characters a stem must keep.
const MIN_STEM_CHARS: usize = 3;

/// Stemmer that strips the longest matching suffix from a fixed list.
///
/// Words of three characters or fewer are returned unchanged, and a suffix
/// is only removed when at least [`MIN_STEM_CHARS`] characters remain.
#[derive(Debug, Clone)]
pub struct SimpleStemmer {
    /// Suffixes, longest first.
    suffixes: Vec<String>,
}

impl SimpleStemmer {
    /// Create a stemmer with the default English suffix list.
    pub fn new() -> Self {
        Self::with_suffixes(DEFAULT_SUFFIXES.iter().map(|s| s.to_string()))
    }

    /// Create a stemmer with custom suffixes.
    pub fn with_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut suffixes: Vec<String> = suffixes.into_iter().map(Into::into).collect();
        suffixes.sort_by_key(|suffix| Reverse(suffix.chars().count()));
        SimpleStemmer { suffixes }
    }
}

impl Default for SimpleStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SimpleStemmer {
    fn stem(&self, word: &str) -> Result<String> {
        let word = word.to_lowercase();
        let word_chars = word.chars().count();

        if word_chars <= MIN_STEM_CHARS {
            return Ok(word);
        }

        for suffix in &self.suffixes {
            if word_chars >= suffix.chars().count() + MIN_STEM_CHARS {
                if let Some(stem) = word.strip_suffix(suffix.as_str()) {
                    return Ok(stem.to_string());
                }
            }
        }

        Ok(word)
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
