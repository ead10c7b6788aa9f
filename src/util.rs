//! Shared utility modules used across simscore components.

pub mod levenshtein;
