use std::collections::BTreeSet;

use log::debug;

use crate::core::freq_index::FrequencyIndex;
use crate::core::normalize::normalize;
use crate::core::ranker;
use crate::core::types::{CorpusEntry, SubmitResult, SuggestOutcome};
use crate::error::EngineError;
use crate::fuzzy::spell::SpellChecker;

const HINT_PREFIX: &str = "Did you mean: ";
const MAX_SUGGESTIONS: usize = 10;

/// The matching engine: owns the corpus, the prefix-frequency index and
/// the spell checker, and composes them into the two user-facing
/// operations, submitting a question and suggesting while typing.
///
/// Everything is built once in [`QaEngine::new`] and read-only
/// afterwards, so one instance can serve any number of concurrent
/// queries without locking. Rebuilding means constructing a new engine.
#[derive(Debug)]
pub struct QaEngine {
    corpus: Vec<CorpusEntry>,
    index: FrequencyIndex,
    spell: SpellChecker,
}

impl QaEngine {
    /// Builds an engine over a materialized corpus and word dictionary.
    pub fn new(
        corpus: Vec<CorpusEntry>,
        dictionary: BTreeSet<String>,
    ) -> Result<Self, EngineError> {
        if corpus.is_empty() {
            return Err(EngineError::InvalidCorpus);
        }
        if dictionary.is_empty() {
            return Err(EngineError::InvalidDictionary);
        }

        let index = FrequencyIndex::build(&corpus);
        debug!(
            "engine ready: {} corpus entries, {} index keys, {} dictionary words",
            corpus.len(),
            index.len(),
            dictionary.len()
        );

        Ok(Self {
            corpus,
            index,
            spell: SpellChecker::new(dictionary),
        })
    }

    pub fn corpus(&self) -> &[CorpusEntry] {
        &self.corpus
    }

    /// Answers a submitted question with the closest stored one.
    ///
    /// The raw text is ranked as typed, with no spell correction on
    /// this path, matching what the suggestion ranking would have shown.
    pub fn submit(&self, text: &str) -> SubmitResult {
        if text.trim().is_empty() {
            return SubmitResult::EmptyPrompt;
        }

        let matches = ranker::rank(text, &self.corpus);
        if matches.is_empty() {
            return SubmitResult::NoMatch;
        }

        let best = matches[0].clone();
        SubmitResult::Match {
            best_question: best.question,
            answer: best.answer,
            matches,
        }
    }

    /// Reacts to the input as it stands after a keystroke.
    ///
    /// A trailing whitespace means the user just finished a word, so
    /// the engine checks spelling and may offer a correction hint.
    /// Otherwise the user is mid-word and gets autocomplete
    /// suggestions.
    pub fn live_suggest(&self, text: &str) -> SuggestOutcome {
        if text.ends_with(char::is_whitespace) {
            self.suggest_correction(text)
        } else {
            self.suggest_completions(text)
        }
    }

    /// Undoes the hint formatting: strips the literal prefix and any
    /// trailing punctuation, returning the bare corrected text. A pure
    /// string transform; anything that is not a hint passes through.
    pub fn accept_correction(&self, hint: &str) -> String {
        match hint.strip_prefix(HINT_PREFIX) {
            Some(rest) => rest
                .trim_end_matches(|c| matches!(c, '?' | '!' | '.'))
                .to_string(),
            None => hint.to_string(),
        }
    }

    fn suggest_correction(&self, text: &str) -> SuggestOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SuggestOutcome::Empty;
        }

        let (corrected, changed) = self.spell.correct_words(trimmed);
        if changed {
            SuggestOutcome::Correction(format!("{}{}?", HINT_PREFIX, corrected.join(" ")))
        } else {
            SuggestOutcome::Empty
        }
    }

    fn suggest_completions(&self, text: &str) -> SuggestOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SuggestOutcome::Empty;
        }

        let original_words: Vec<&str> = trimmed.split_whitespace().collect();
        let (mut corrected_words, _) = self.spell.correct_words(trimmed);
        let fully_corrected = corrected_words.join(" ");

        // The last word is still being typed; put it back as typed so
        // an in-progress word is not corrected away mid-keystroke.
        if let (Some(last), Some(original_last)) =
            (corrected_words.last_mut(), original_words.last())
        {
            *last = (*original_last).to_string();
        }
        let partially_corrected = corrected_words.join(" ");

        let mut suggestions: Vec<String> = Vec::new();
        self.append_completions(&fully_corrected, &mut suggestions);
        self.append_completions(&partially_corrected, &mut suggestions);

        if suggestions.len() < MAX_SUGGESTIONS {
            for matched in ranker::rank(&partially_corrected, &self.corpus) {
                if suggestions.len() >= MAX_SUGGESTIONS {
                    break;
                }
                if !suggestions.contains(&matched.question) {
                    suggestions.push(matched.question);
                }
            }
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        debug!("combined suggestions: {suggestions:?}");

        if suggestions.is_empty() {
            SuggestOutcome::Empty
        } else {
            SuggestOutcome::Suggestions(suggestions)
        }
    }

    /// Prefix-index completions for `text`, most frequent first (ties
    /// by first insertion into the index), appended without duplicates.
    fn append_completions(&self, text: &str, out: &mut Vec<String>) {
        let prefix = normalize(text);
        let mut hits = self.index.prefix_lookup(&prefix);
        debug!("autocomplete prefix {prefix:?}: {} keys", hits.len());

        hits.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.ordinal.cmp(&b.1.ordinal))
        });
        for (key, _) in hits {
            if !out.iter().any(|existing| existing == key) {
                out.push(key.to_string());
            }
        }
    }
}

/// The normalized word set over every question and answer in the
/// corpus, which is the vocabulary the engine dictionary is meant to
/// be derived from by upstream code.
pub fn vocabulary(corpus: &[CorpusEntry]) -> BTreeSet<String> {
    corpus
        .iter()
        .flat_map(|entry| [entry.question.as_str(), entry.answer.as_str()])
        .flat_map(|text| {
            normalize(text)
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
