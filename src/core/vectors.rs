use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::error::MatchError;
use crate::models::RankTriple;

/// Sparse per-participant affinity profile: artist key -> rank
///
/// Entries are kept ordered by artist key so two profiles can be
/// merge-walked in linear time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileVector {
    ranks: BTreeMap<String, u32>,
}

impl ProfileVector {
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn rank(&self, artist_key: &str) -> Option<u32> {
        self.ranks.get(artist_key).copied()
    }

    /// Entries in ascending artist-key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.ranks.iter().map(|(key, rank)| (key.as_str(), *rank))
    }

    /// Euclidean norm of the rank vector; 0.0 for an empty profile
    pub fn norm(&self) -> f64 {
        self.ranks
            .values()
            .map(|&rank| (rank as f64) * (rank as f64))
            .sum::<f64>()
            .sqrt()
    }

    /// Build a vector directly from (artist, rank) entries
    pub fn from_entries(entries: &[(&str, u32)]) -> Self {
        let mut vector = Self::default();
        for (key, rank) in entries {
            vector.insert((*key).to_string(), *rank);
        }
        vector
    }

    fn insert(&mut self, artist_key: String, rank: u32) -> Option<u32> {
        self.ranks.insert(artist_key, rank)
    }
}

/// All profile vectors for one run, keyed by participant id
///
/// Built once from the snapshot's rank triples and read-only afterwards.
/// A participant without any triples simply has no entry here; callers
/// treat that as an empty profile.
#[derive(Debug, Clone, Default)]
pub struct VectorStore {
    vectors: HashMap<String, ProfileVector>,
}

impl VectorStore {
    /// Build one profile vector per participant from rank triples.
    ///
    /// A rank must be a positive integer; a zero rank is malformed input.
    /// A duplicate (participant, artist) pair with a conflicting rank keeps
    /// the last value seen and is logged as a data-quality signal.
    pub fn from_triples<I>(triples: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = RankTriple>,
    {
        let mut vectors: HashMap<String, ProfileVector> = HashMap::new();

        for triple in triples {
            if triple.rank == 0 {
                return Err(MatchError::Data(format!(
                    "rank must be positive: participant {} artist {}",
                    triple.participant_id, triple.artist_key
                )));
            }

            let vector = vectors.entry(triple.participant_id.clone()).or_default();
            if let Some(previous) = vector.insert(triple.artist_key.clone(), triple.rank) {
                if previous != triple.rank {
                    warn!(
                        "Conflicting rank for participant {} artist {}: {} replaced by {}",
                        triple.participant_id, triple.artist_key, previous, triple.rank
                    );
                }
            }
        }

        Ok(Self { vectors })
    }

    pub fn get(&self, participant_id: &str) -> Option<&ProfileVector> {
        self.vectors.get(participant_id)
    }

    /// Number of participants with at least one ranked artist
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
