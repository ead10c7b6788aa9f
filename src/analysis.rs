//! Text analysis for similarity scoring.
//!
//! The scorers only need whitespace tokenization with simple lowercasing,
//! which lives in [`tokenizer`]. Linguistic resources are never global:
//! stop-word lists ([`stop`]) and stemmers ([`stemmer`]) are injected into a
//! [`preprocessor::Preprocessor`] that cleans text before it is scored.

pub mod preprocessor;
pub mod stemmer;
pub mod stop;
pub mod tokenizer;

pub use preprocessor::Preprocessor;
pub use stemmer::{IdentityStemmer, SimpleStemmer, Stemmer};
pub use stop::{StopWordSet, StopWords, strip_stop_words};
pub use tokenizer::tokenize;
