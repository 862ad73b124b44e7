//! Duet Algo - music-taste pair matching engine for the Duet meetup app
//!
//! This library pairs every member of a population with the member whose
//! artist affinities resemble theirs most, as one global assignment rather
//! than greedy nearest neighbours: sparse profile vectors, pairwise cosine
//! similarity, and a maximum-cardinality maximum-weight matching over the
//! resulting graph (blossom algorithm).

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{cosine_similarity, match_score, maximum_weight_matching, Matcher};
pub use error::MatchError;
pub use models::{
    GraphOptions, MatchOutcome, MatchRecord, Participant, RankTriple, RecordOrder, ScoreCurve,
    Snapshot, TieBreak,
};
