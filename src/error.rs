use thiserror::Error;

/// Construction-time failures.
///
/// Queries never fail once an engine exists; empty input and no-match
/// conditions are modeled as result variants instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("corpus must contain at least one entry")]
    InvalidCorpus,
    #[error("dictionary must contain at least one word")]
    InvalidDictionary,
}
