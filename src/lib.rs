pub mod core;
pub mod error;
pub mod fuzzy;

pub use crate::core::engine::{vocabulary, QaEngine};
pub use crate::core::types::{CorpusEntry, RankedMatch, SubmitResult, SuggestOutcome};
pub use crate::error::EngineError;
