// Model exports
pub mod domain;

pub use domain::{
    GraphOptions, MatchOutcome, MatchRecord, Participant, RankTriple, RecordOrder, ScoreCurve,
    Snapshot, TieBreak,
};
