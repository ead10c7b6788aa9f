//! Stop-word lookup.
//!
//! Stop words are common words ("the", "is", "at") that add noise to token
//! overlap measures. They are supplied to the preprocessor through the
//! [`StopWords`] capability instead of a process-wide table, so callers can
//! swap languages or dictionaries per scorer.
//!
//! # Examples
//!
//! ```
//! use simscore::analysis::stop::{StopWordSet, StopWords};
//!
//! let english = StopWordSet::english();
//! assert!(english.is_stop_word("the"));
//! assert!(!english.is_stop_word("hello"));
//!
//! let custom = StopWordSet::from_words(["  Bonjour ", "SALUT"]);
//! assert!(custom.is_stop_word("bonjour"));
//! assert!(custom.is_stop_word("salut"));
//! ```

use std::borrow::Cow;
use std::collections::HashSet;
use std::hash::BuildHasher;
use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

/// Read-only stop-word capability.
///
/// Implementations receive tokens that are already lowercased.
pub trait StopWords: Send + Sync {
    /// Whether `word` should be dropped before scoring.
    fn is_stop_word(&self, word: &str) -> bool;
}

const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_ENGLISH_STOP_WORDS
            .iter()
            .map(|&s| s.to_string())
            .collect(),
    )
});

/// An immutable, cheaply clonable set of stop words.
#[derive(Clone, Debug, Default)]
pub struct StopWordSet {
    words: Arc<HashSet<String>>,
}

impl StopWordSet {
    /// The built-in English list (33 articles, prepositions and conjunctions).
    pub fn english() -> Self {
        StopWordSet {
            words: Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET),
        }
    }

    /// Build a set from arbitrary words.
    ///
    /// Each word is trimmed and lowercased so it matches tokenizer output.
    /// Words that are empty after trimming are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let normalized = word.as_ref().trim().to_lowercase();
                (!normalized.is_empty()).then_some(normalized)
            })
            .collect();

        StopWordSet {
            words: Arc::new(words),
        }
    }

    /// Number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopWords for StopWordSet {
    fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl<S> StopWords for HashSet<String, S>
where
    S: BuildHasher + Send + Sync,
{
    fn is_stop_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl StopWords for AHashSet<String> {
    fn is_stop_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Remove stop-word tokens from `text` and leave everything else as is.
///
/// Tokens are matched in lowercase, but surviving tokens keep their case
/// and the whitespace in front of them. A removed token takes the
/// whitespace before it along, and so does the first surviving token when
/// everything before it was removed. Text without stop words is returned
/// borrowed and byte-for-byte unchanged.
///
/// ```
/// use simscore::analysis::stop::{StopWordSet, strip_stop_words};
///
/// let stop_words = StopWordSet::from_words(["bonjour"]);
/// assert_eq!(strip_stop_words("Bonjour  le Monde", &stop_words), "le Monde");
/// assert_eq!(strip_stop_words("Hello   World", &stop_words), "Hello   World");
/// ```
pub fn strip_stop_words<'a>(text: &'a str, stop_words: &dyn StopWords) -> Cow<'a, str> {
    let mut kept = String::with_capacity(text.len());
    let mut removed = false;
    let mut rest = text;

    while !rest.is_empty() {
        let token_start = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        let (space, tail) = rest.split_at(token_start);
        let token_end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (token, tail) = tail.split_at(token_end);
        rest = tail;

        if !token.is_empty() && stop_words.is_stop_word(&token.to_lowercase()) {
            removed = true;
            continue;
        }
        if !(removed && kept.is_empty()) {
            kept.push_str(space);
        }
        kept.push_str(token);
    }

    if removed {
        Cow::Owned(kept)
    } else {
        Cow::Borrowed(text)
    }
}
