//! Stemming capability for the preprocessor.
//!
//! A [`Stemmer`] maps a lowercased token to its root form. Stemming is
//! allowed to fail: the preprocessor reports the failure as a typed error
//! instead of scoring an emptied text.

use crate::error::Result;

pub mod identity;
pub mod simple;

pub use identity::IdentityStemmer;
pub use simple::SimpleStemmer;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> Result<String>;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Any thread-safe closure can act as a stemmer, which keeps adapters to
/// external stemming libraries short.
///
/// ```
/// use simscore::analysis::stemmer::Stemmer;
/// use simscore::error::Result;
///
/// let strip_plural = |word: &str| -> Result<String> {
///     Ok(word.strip_suffix('s').unwrap_or(word).to_string())
/// };
/// assert_eq!(strip_plural.stem("cats").unwrap(), "cat");
/// assert_eq!(strip_plural.name(), "custom");
/// ```
impl<F> Stemmer for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn stem(&self, word: &str) -> Result<String> {
        self(word)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}
