// src/fuzzy/mod.rs
pub mod levenshtein;
pub mod scorer;

pub use levenshtein::levenshtein;
pub use scorer::{distance, Scorer};
