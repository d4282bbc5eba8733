// File: src/fuzzy/scorer.rs
use crate::fuzzy::levenshtein::levenshtein_chars;
use serde::{Deserialize, Serialize};

/// Characters that separate words when no configuration overrides them.
pub const DEFAULT_WORD_DELIMITERS: [char; 3] = [' ', '_', '-'];

const PHRASE_LENGTH_RELIEF: f64 = 0.8;
const LOWER_WEIGHT: f64 = 0.8;
const UPPER_WEIGHT: f64 = 0.2;

/// Fuzzy phrase/word dissimilarity between two strings. Lower means closer,
/// identical strings (ignoring case) score 0. The value is not normalized;
/// only its ordering across candidates for one query is meaningful.
///
/// The scorer is stateless apart from its delimiter set, so a single
/// instance can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorer {
    delimiters: Vec<char>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_WORD_DELIMITERS.to_vec(),
        }
    }
}

impl Scorer {
    pub fn with_delimiters(delimiters: impl IntoIterator<Item = char>) -> Self {
        Self {
            delimiters: delimiters.into_iter().collect(),
        }
    }

    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    /// Scores `a` against `b`.
    ///
    /// The phrase term is the whole-string edit distance, relieved by 0.8 per
    /// char of length difference so that fragments of a longer text stay
    /// competitive. The word term sums, for each word, the distance to the
    /// best matching word on the other side, averaged over both directions.
    /// The smaller of the two terms weighs 80%, the larger 20%.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.to_lowercase().chars().collect();
        let b: Vec<char> = b.to_lowercase().chars().collect();

        let length_gap = a.len().abs_diff(b.len()) as f64;
        let phrase_value = levenshtein_chars(&a, &b) as f64 - PHRASE_LENGTH_RELIEF * length_gap;

        let words_a = self.split_words(&a);
        let words_b = self.split_words(&b);
        let forward = directional_word_value(&words_a, &words_b, b.len());
        let backward = directional_word_value(&words_b, &words_a, a.len());
        let word_value = (forward + backward) as f64 / 2.0;

        let lower = word_value.min(phrase_value);
        let upper = word_value.max(phrase_value);
        lower * LOWER_WEIGHT + upper * UPPER_WEIGHT
    }

    /// Splits on every delimiter, keeping empty segments: `""` yields one
    /// empty word and doubled delimiters yield an empty word between them.
    fn split_words<'a>(&self, chars: &'a [char]) -> Vec<&'a [char]> {
        chars
            .split(|c| self.delimiters.contains(c))
            .collect()
    }
}

/// Sum over `from` of the smallest edit distance to any word of `to`.
/// The running best starts at the length of the whole `to` text.
fn directional_word_value(from: &[&[char]], to: &[&[char]], to_len: usize) -> usize {
    let mut total = 0;
    for word in from {
        let mut best = to_len;
        for other in to {
            let d = levenshtein_chars(word, other);
            if d < best {
                best = d;
            }
            if d == 0 {
                break;
            }
        }
        total += best;
    }
    total
}

/// [`Scorer::distance`] with the default delimiters.
pub fn distance(a: &str, b: &str) -> f64 {
    Scorer::default().distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn identical_strings_score_zero() {
        assert_eq!(distance("", ""), 0.0);
        assert_eq!(distance("abcd efgh", "abcd efgh"), 0.0);
        assert_eq!(distance("Save file", "Save file"), 0.0);
    }

    #[test]
    fn casing_is_ignored() {
        assert_eq!(distance("Hello", "hello"), 0.0);
        assert_eq!(distance("ZAŻÓŁĆ", "zażółć"), 0.0);
    }

    #[test]
    fn near_match_beats_scramble() {
        let near = distance("abcd efgh", "abcdefgh");
        let scramble = distance("abcd efgh", "grasdcbue");
        assert!(close(near, 1.36), "near = {near}");
        assert!(close(scramble, 9.5), "scramble = {scramble}");
        assert!(near < scramble);
    }

    #[test]
    fn delimiters_are_interchangeable() {
        assert!(close(distance("hello_world", "hello world"), 0.2));
        assert!(close(distance("hello-world", "hello world"), 0.2));
    }

    #[test]
    fn symmetric_for_uneven_word_counts() {
        let pairs = [
            ("x y", "x"),
            ("x", "yyy"),
            ("Save file", "Save the file"),
            ("Open", "Open file"),
            ("", "abc"),
            ("abcd efgh", "grasdcbue"),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn pinned_scores() {
        assert!(close(distance("", "abc"), 0.78));
        assert!(close(distance("x y", "x"), 0.42));
        assert!(close(distance("Save file", "Save the file"), 0.94));
        assert!(close(distance("Save file", "Open file"), 3.6));
        assert!(close(distance("Open", "Open file"), 1.2));
        assert!(close(distance("cat", "dog"), 3.0));
    }

    #[test]
    fn inserted_word_ranks_above_replaced_word() {
        assert!(distance("Save file", "Save the file") < distance("Save file", "Open file"));
        assert!(distance("Save file", "Open file") < distance("Save file", "Cancel"));
    }

    #[test]
    fn never_negative() {
        let pairs = [("a", "a very long sentence indeed"), ("", "x"), ("ab", "ba")];
        for (a, b) in pairs {
            assert!(distance(a, b) >= 0.0);
        }
    }

    #[test]
    fn custom_delimiters_change_word_split() {
        let dots = Scorer::with_delimiters(['.', ' ']);
        assert_eq!(dots.delimiters(), &['.', ' ']);
        assert!(close(dots.distance("menu.file", "menu file"), 0.2));
        assert!(close(distance("menu.file", "menu file"), 2.3));
    }
}
