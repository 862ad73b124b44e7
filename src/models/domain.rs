use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Participant identity and contact data, carried through to match results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Participant {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One (participant, artist, rank) affinity triple from the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankTriple {
    #[serde(rename = "participantId")]
    pub participant_id: String,
    #[serde(rename = "artistKey")]
    pub artist_key: String,
    pub rank: u32,
}

/// Input snapshot consumed once per run
///
/// The `artists` catalog maps artist keys to display names for
/// shared-artist reporting; it may be empty, in which case raw keys
/// are reported instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub participants: Vec<Participant>,
    pub rankings: Vec<RankTriple>,
    #[serde(default)]
    pub artists: HashMap<String, String>,
}

/// One matched pair with its similarity, derived score and shared artists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "participantA")]
    pub participant_a: Participant,
    #[serde(rename = "participantB")]
    pub participant_b: Participant,
    pub similarity: f64,
    pub score: u8,
    #[serde(rename = "sharedArtists")]
    pub shared_artists: Vec<String>,
}

/// Complete result set of one matching run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub records: Vec<MatchRecord>,
    /// Participants not covered by any matched pair (odd population,
    /// or isolated by an edge threshold). Expected, not an error.
    pub unmatched: Vec<String>,
    #[serde(rename = "totalParticipants")]
    pub total_participants: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Vertex numbering order fed to the solver
///
/// Fixes the tie-break between equally good matchings: identical input
/// always yields the identical result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    Ascending,
    Descending,
}

/// Output record ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordOrder {
    /// Strongest matches first (default)
    ScoreDescending,
    /// Ordered by the first participant's id
    IdentityAscending,
}

/// Graph construction options
#[derive(Debug, Clone, Copy)]
pub struct GraphOptions {
    /// Minimum similarity for an edge to enter the graph; `None` keeps
    /// the graph dense (zero-weight edges included)
    pub min_weight: Option<f64>,
    pub tie_break: TieBreak,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            min_weight: None,
            tie_break: TieBreak::Ascending,
        }
    }
}

/// Logistic score curve parameters
#[derive(Debug, Clone, Copy)]
pub struct ScoreCurve {
    /// Controls how steep the curve is
    pub steepness: f64,
    /// Similarity that maps to a score of 50
    pub midpoint: f64,
}

impl Default for ScoreCurve {
    fn default() -> Self {
        Self {
            steepness: 15.0,
            midpoint: 0.15,
        }
    }
}
