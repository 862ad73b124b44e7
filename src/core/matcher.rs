use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::core::blossom::{maximum_weight_matching, WeightedEdge};
use crate::core::graph::SimilarityGraph;
use crate::core::scoring::match_score;
use crate::core::similarity::shared_artists;
use crate::core::vectors::{ProfileVector, VectorStore};
use crate::error::MatchError;
use crate::models::{
    GraphOptions, MatchOutcome, MatchRecord, Participant, RankTriple, RecordOrder, ScoreCurve,
};

/// Similarities are scaled to integers before the solver so dual-variable
/// arithmetic is exact; the scale is monotone, so it preserves the optimum
/// up to ties below 1e-9, which the fixed vertex order then breaks.
const WEIGHT_SCALE: f64 = 1e9;

/// Batch matching pipeline
///
/// # Pipeline stages
/// 1. Profile vectors from rank triples
/// 2. Pairwise cosine similarity and graph construction
/// 3. Maximum-cardinality maximum-weight matching
/// 4. Record assembly: identity join, shared artists, score transform
#[derive(Debug, Clone)]
pub struct Matcher {
    graph: GraphOptions,
    curve: ScoreCurve,
    record_order: RecordOrder,
}

impl Matcher {
    pub fn new(graph: GraphOptions, curve: ScoreCurve, record_order: RecordOrder) -> Self {
        Self {
            graph,
            curve,
            record_order,
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            graph: GraphOptions::default(),
            curve: ScoreCurve::default(),
            record_order: RecordOrder::ScoreDescending,
        }
    }

    /// Run the full pipeline over one snapshot of participant data.
    ///
    /// Returns the complete result set for the run: one record per matched
    /// pair plus the ids left uncovered (odd populations and thresholded-out
    /// participants are expected, not errors).
    pub fn run(
        &self,
        participants: Vec<Participant>,
        triples: Vec<RankTriple>,
        artists: &HashMap<String, String>,
    ) -> Result<MatchOutcome, MatchError> {
        let total_participants = participants.len();

        let mut identities: HashMap<String, Participant> =
            HashMap::with_capacity(participants.len());
        for participant in participants {
            if identities
                .insert(participant.id.clone(), participant)
                .is_some()
            {
                return Err(MatchError::Data(
                    "duplicate participant id in snapshot".to_string(),
                ));
            }
        }

        // Triples for unknown participants cannot be joined back to an
        // identity; drop them loudly rather than silently.
        let mut orphaned = 0usize;
        let triples: Vec<RankTriple> = triples
            .into_iter()
            .filter(|triple| {
                let known = identities.contains_key(&triple.participant_id);
                if !known {
                    orphaned += 1;
                }
                known
            })
            .collect();
        if orphaned > 0 {
            warn!(
                "Dropped {} rank triples referencing unknown participants",
                orphaned
            );
        }

        let store = VectorStore::from_triples(triples)?;

        let ids: Vec<String> = identities.keys().cloned().collect();
        let graph = SimilarityGraph::build(&ids, &store, &self.graph)?;
        info!(
            "Similarity graph: {} participants, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let solver_edges: Vec<WeightedEdge> = graph
            .edges()
            .iter()
            .map(|edge| WeightedEdge {
                u: edge.a,
                v: edge.b,
                weight: (edge.weight * WEIGHT_SCALE).round() as i64,
            })
            .collect();
        let mate = maximum_weight_matching(graph.vertex_count(), &solver_edges, true);

        let similarities: HashMap<(usize, usize), f64> = graph
            .edges()
            .iter()
            .map(|edge| ((edge.a, edge.b), edge.weight))
            .collect();

        let empty = ProfileVector::default();
        let mut records = Vec::new();
        let mut unmatched = Vec::new();
        for (a, partner) in mate.iter().enumerate() {
            match partner {
                None => unmatched.push(graph.vertex_id(a).to_string()),
                Some(&b) if a < b => {
                    let id_a = graph.vertex_id(a);
                    let id_b = graph.vertex_id(b);
                    let similarity = similarities.get(&(a, b)).copied().unwrap_or(0.0);

                    let vector_a = store.get(id_a).unwrap_or(&empty);
                    let vector_b = store.get(id_b).unwrap_or(&empty);
                    let mut shared: Vec<String> = shared_artists(vector_a, vector_b)
                        .into_iter()
                        .map(|key| artists.get(&key).cloned().unwrap_or(key))
                        .collect();
                    shared.sort_unstable();

                    let record = MatchRecord {
                        participant_a: identities[id_a].clone(),
                        participant_b: identities[id_b].clone(),
                        similarity,
                        score: match_score(similarity, &self.curve),
                        shared_artists: shared,
                    };
                    debug!(
                        "Matched {} and {} (similarity {:.4}, score {}/100, {} shared artists)",
                        record.participant_a.display_name(),
                        record.participant_b.display_name(),
                        record.similarity,
                        record.score,
                        record.shared_artists.len()
                    );
                    records.push(record);
                }
                Some(_) => {}
            }
        }

        sort_records(&mut records, self.record_order);
        info!(
            "Matching complete: {} pairs, {} unmatched",
            records.len(),
            unmatched.len()
        );

        unmatched.sort_unstable();
        Ok(MatchOutcome {
            records,
            unmatched,
            total_participants,
            generated_at: Utc::now(),
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Presentation ordering only; the solver makes no ordering promises.
fn sort_records(records: &mut [MatchRecord], order: RecordOrder) {
    match order {
        RecordOrder::ScoreDescending => {
            records.sort_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then_with(|| {
                        b.similarity
                            .partial_cmp(&a.similarity)
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
                    .then_with(|| a.participant_a.id.cmp(&b.participant_a.id))
            });
        }
        RecordOrder::IdentityAscending => {
            records.sort_by(|a, b| a.participant_a.id.cmp(&b.participant_a.id));
        }
    }
}
