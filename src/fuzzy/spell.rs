//! Nearest-neighbor spelling correction over the engine dictionary.

use std::collections::BTreeSet;

use strsim::levenshtein;

/// Dictionary-backed corrector.
///
/// The vocabulary lives in a `BTreeSet` so scans visit words in
/// lexicographic order; together with first-minimum selection that
/// makes equal-distance ties deterministic. The dictionary is supplied
/// at construction and never mutated.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: BTreeSet<String>,
}

impl SpellChecker {
    pub fn new(dictionary: BTreeSet<String>) -> Self {
        Self { dictionary }
    }

    /// Exact membership test on the raw token. Callers normalize
    /// beforehand if they want normalized matching.
    pub fn is_known(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Returns `word` unchanged when it is in the dictionary, otherwise
    /// the dictionary word with minimum edit distance to it. Ties go to
    /// the lexicographically first candidate.
    ///
    /// This is a full scan: O(dictionary size) distance computations
    /// per unknown word. Callers budget for that cost per query word.
    pub fn correct(&self, word: &str) -> String {
        if self.is_known(word) {
            return word.to_string();
        }
        self.dictionary
            .iter()
            .min_by_key(|candidate| levenshtein(word, candidate))
            .cloned()
            .unwrap_or_else(|| word.to_string())
    }

    /// Corrects every whitespace-delimited word of `text`. Returns the
    /// corrected words and whether any of them changed.
    pub fn correct_words(&self, text: &str) -> (Vec<String>, bool) {
        let mut changed = false;
        let corrected = text
            .split_whitespace()
            .map(|word| {
                let fixed = self.correct(word);
                if fixed != word {
                    changed = true;
                }
                fixed
            })
            .collect();
        (corrected, changed)
    }
}
