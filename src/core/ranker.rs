//! Closest-question search: weighted Jaccard similarity over word n-grams.
//!
//! Stop words contribute reduced weight to both the intersection and
//! the union, so a candidate sharing only function words with the
//! query scores well below one sharing content words.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::core::normalize::normalize;
use crate::core::types::{CorpusEntry, RankedMatch};

/// Window size for word n-grams.
pub const NGRAM_SIZE: usize = 3;

/// How many candidates a ranking pass returns at most.
pub const MAX_MATCHES: usize = 10;

/// Weight a stop word contributes to the intersection and union sums;
/// content words contribute 1.0.
const STOP_WORD_WEIGHT: f64 = 0.3;

/// Fixed, closed list of high-frequency Arabic function words.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ما", "هو", "اذكر", "هي", "في", "من", "إلى", "على", "عن", "أن",
        "إن", "قد", "هل", "ل", "التي", "الذي", "الذين", "اللاتي", "اللائي",
        "هم",
    ]
    .into_iter()
    .collect()
});

fn token_weight(token: &str) -> f64 {
    if STOP_WORDS.contains(token) {
        STOP_WORD_WEIGHT
    } else {
        1.0
    }
}

/// Weighted Jaccard similarity between two token sets.
///
/// Sum of weights over the intersection divided by the sum over the
/// union. Two empty sets have an empty union; that case is defined as
/// 0 rather than a division by zero.
pub fn weighted_jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union_weight: f64 = a.union(b).map(|token| token_weight(token)).sum();
    if union_weight == 0.0 {
        return 0.0;
    }
    let intersection_weight: f64 = a.intersection(b).map(|token| token_weight(token)).sum();
    intersection_weight / union_weight
}

/// Contiguous windows of `n` whitespace-delimited words, each joined
/// back into a single token. Text with fewer than `n` words yields the
/// empty set.
pub fn word_ngrams(text: &str, n: usize) -> HashSet<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    words.windows(n).map(|window| window.join(" ")).collect()
}

fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Scores `query` against every corpus question and returns the top
/// matches, best first.
///
/// The query picks the comparison mode: with at least [`NGRAM_SIZE`]
/// normalized words both sides are tokenized into n-grams, otherwise
/// both sides are compared as whole-string word sets. The sort is
/// stable, so equal scores keep corpus order.
pub fn rank(query: &str, corpus: &[CorpusEntry]) -> Vec<RankedMatch> {
    let query_norm = normalize(query);
    let ngram_mode = query_norm.split_whitespace().count() >= NGRAM_SIZE;
    let query_tokens = if ngram_mode {
        word_ngrams(&query_norm, NGRAM_SIZE)
    } else {
        word_set(&query_norm)
    };

    let mut scored: Vec<(usize, f64)> = corpus
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let question_norm = normalize(&entry.question);
            let question_tokens = if ngram_mode {
                word_ngrams(&question_norm, NGRAM_SIZE)
            } else {
                word_set(&question_norm)
            };
            (position, weighted_jaccard(&query_tokens, &question_tokens))
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(MAX_MATCHES);

    scored
        .into_iter()
        .map(|(position, score)| RankedMatch {
            question: corpus[position].question.clone(),
            answer: corpus[position].answer.clone(),
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> HashSet<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn entry(question: &str, answer: &str) -> CorpusEntry {
        CorpusEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn identical_sets_score_one() {
        let a = set(&["ما", "معني", "الصلاه"]);
        assert_eq!(weighted_jaccard(&a, &a), 1.0);
    }

    #[test]
    fn disjoint_sets_score_zero() {
        let a = set(&["الصلاه"]);
        let b = set(&["الزكاه"]);
        assert_eq!(weighted_jaccard(&a, &b), 0.0);
    }

    #[test]
    fn empty_union_scores_zero() {
        let empty = HashSet::new();
        assert_eq!(weighted_jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn content_overlap_beats_stop_word_overlap() {
        let query = set(&["في", "الزكاه"]);
        // Shares only the stop word with the query.
        let stop_only = set(&["في", "الصلاه"]);
        // Shares the content word; its own extra word is a stop word.
        let content = set(&["هل", "الزكاه"]);

        let low = weighted_jaccard(&query, &stop_only);
        let high = weighted_jaccard(&query, &content);
        assert!(high > low, "expected {high} > {low}");
    }

    #[test]
    fn ngram_windows_join_words() {
        let grams = word_ngrams("ما معني الصلاه في الاسلام", 3);
        assert!(grams.contains("ما معني الصلاه"));
        assert!(grams.contains("معني الصلاه في"));
        assert!(grams.contains("الصلاه في الاسلام"));
        assert_eq!(grams.len(), 3);
    }

    #[test]
    fn short_text_has_no_ngrams() {
        assert!(word_ngrams("ما معني", 3).is_empty());
    }

    #[test]
    fn exact_question_ranks_first_with_full_score() {
        let corpus = vec![
            entry("ما معنى الصلاة", "أداء العبادة"),
            entry("ما معنى الزكاة", "إخراج المال"),
        ];
        let ranked = rank("ما معنى الصلاة", &corpus);
        assert_eq!(ranked[0].question, "ما معنى الصلاة");
        assert_eq!(ranked[0].score, 1.0);
        assert!(ranked[1].score < 1.0);
    }

    #[test]
    fn short_query_falls_back_to_word_sets() {
        let corpus = vec![
            entry("ما معنى الصلاة", "أداء العبادة"),
            entry("ما معنى الزكاة", "إخراج المال"),
        ];
        // One word: no n-grams possible, still matches through words.
        let ranked = rank("الزكاة", &corpus);
        assert_eq!(ranked[0].question, "ما معنى الزكاة");
        assert!(ranked[0].score > 0.0);
    }

    #[test]
    fn ngram_mode_scores_short_questions_zero() {
        let corpus = vec![entry("الصلاة", "عبادة")];
        let ranked = rank("ما معنى الصلاة في الاسلام", &corpus);
        assert_eq!(ranked[0].score, 0.0);
    }

    #[test]
    fn equal_scores_keep_corpus_order() {
        let corpus = vec![
            entry("كم عدد الصلوات", "خمس"),
            entry("كم عدد صلوات اليوم", "خمس"),
        ];
        // Matches neither: all scores 0, corpus order preserved.
        let ranked = rank("الحج", &corpus);
        assert_eq!(ranked[0].question, "كم عدد الصلوات");
        assert_eq!(ranked[1].question, "كم عدد صلوات اليوم");
    }

    #[test]
    fn returns_at_most_ten() {
        let corpus: Vec<CorpusEntry> = (0..15)
            .map(|i| entry(&format!("سؤال رقم {i}"), "جواب"))
            .collect();
        assert_eq!(rank("سؤال", &corpus).len(), MAX_MATCHES);
    }

    #[test]
    fn diacritics_do_not_affect_scores() {
        let corpus = vec![entry("ما معنى الصلاة", "أداء العبادة")];
        let plain = rank("ما معنى الصلاة", &corpus);
        let marked = rank("مَا مَعْنَى الصَّلَاةُ", &corpus);
        assert_eq!(plain[0].score, marked[0].score);
    }
}
