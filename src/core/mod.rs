pub mod engine;
pub mod freq_index;
pub mod normalize;
pub mod ranker;
pub mod types;
