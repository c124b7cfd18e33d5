// Matching engine: scoring strategies, ranking, normalization, explanations.
// Pure in-memory computation over validated records; no I/O here.

pub mod explain;
pub mod normalize;
pub mod pipeline;
pub mod recommender;
pub mod scorer;
pub mod scores;

pub use pipeline::run_matching;
pub use scorer::ScoringMode;
pub use scores::{RankedCareer, ScoreMap};
