use serde::{Deserialize, Serialize};

/// A single question/answer row of the corpus.
///
/// Rows are supplied fully materialized by upstream ingestion (which
/// also deduplicates questions) and are read-only for the lifetime of
/// an engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub question: String,
    pub answer: String,
}

/// A corpus entry paired with the similarity score it earned during
/// one ranking pass. Scores ride on these per-query copies; the shared
/// corpus rows are never written at query time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    pub question: String,
    pub answer: String,
    /// Weighted Jaccard similarity in [0, 1].
    pub score: f64,
}

/// Outcome of submitting a full question.
///
/// Empty input and no-match are ordinary variants, not errors; callers
/// branch on content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SubmitResult {
    /// The input was empty or all whitespace.
    EmptyPrompt,
    /// Ranking produced no candidates.
    NoMatch,
    /// The closest stored question, its answer, and the full ranked list
    /// (which includes the best match at position 0).
    Match {
        best_question: String,
        answer: String,
        matches: Vec<RankedMatch>,
    },
}

/// Outcome of a live keystroke query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SuggestOutcome {
    /// Ranked autocomplete candidates, at most ten.
    Suggestions(Vec<String>),
    /// A `Did you mean: ...?` hint for a finished, misspelled word.
    Correction(String),
    /// Nothing to offer for this input.
    Empty,
}
