use rayon::prelude::*;
use tracing::debug;

use crate::core::similarity::cosine_similarity;
use crate::core::vectors::{ProfileVector, VectorStore};
use crate::error::MatchError;
use crate::models::{GraphOptions, TieBreak};

/// One undirected similarity edge between two vertex indices (a < b)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityEdge {
    pub a: usize,
    pub b: usize,
    pub weight: f64,
}

/// Weighted undirected graph over the participant population.
///
/// Vertices are numbered in the configured identity-key order; that
/// numbering is the deterministic tie-break the solver inherits, so an
/// identical snapshot always produces an identical matching. Symmetric
/// by construction, no self-loops, not necessarily complete.
#[derive(Debug, Clone)]
pub struct SimilarityGraph {
    vertices: Vec<String>,
    edges: Vec<SimilarityEdge>,
}

impl SimilarityGraph {
    /// Build the similarity graph for a participant population.
    ///
    /// Every unordered pair gets an edge weighted by profile cosine
    /// similarity, unless `options.min_weight` is set, in which case
    /// lighter edges are omitted from the solver's search space (the
    /// weights of retained edges are never altered).
    ///
    /// Pairwise similarities are independent, so the O(N^2) stage fans
    /// out across the rayon thread pool; the edge list is assembled in
    /// (a, b) index order afterwards, independent of scheduling.
    pub fn build(
        participant_ids: &[String],
        store: &VectorStore,
        options: &GraphOptions,
    ) -> Result<Self, MatchError> {
        if participant_ids.len() < 2 {
            return Err(MatchError::Config(format!(
                "at least 2 participants are required to form a matching, got {}",
                participant_ids.len()
            )));
        }
        if let Some(threshold) = options.min_weight {
            if !threshold.is_finite() {
                return Err(MatchError::Config(format!(
                    "minimum edge weight must be finite, got {}",
                    threshold
                )));
            }
        }

        let mut vertices = participant_ids.to_vec();
        vertices.sort_unstable();
        match options.tie_break {
            TieBreak::Ascending => {}
            TieBreak::Descending => vertices.reverse(),
        }

        let pairs: Vec<(usize, usize)> = (0..vertices.len())
            .flat_map(|a| ((a + 1)..vertices.len()).map(move |b| (a, b)))
            .collect();

        let empty = ProfileVector::default();
        let weights: Vec<f64> = pairs
            .par_iter()
            .map(|&(a, b)| {
                let vector_a = store.get(&vertices[a]).unwrap_or(&empty);
                let vector_b = store.get(&vertices[b]).unwrap_or(&empty);
                cosine_similarity(vector_a, vector_b)
            })
            .collect();

        let edges: Vec<SimilarityEdge> = pairs
            .into_iter()
            .zip(weights)
            .filter(|&(_, weight)| options.min_weight.map_or(true, |t| weight >= t))
            .map(|((a, b), weight)| SimilarityEdge { a, b, weight })
            .collect();

        debug!(
            "Similarity graph built: {} vertices, {} edges",
            vertices.len(),
            edges.len()
        );

        Ok(Self { vertices, edges })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Participant ids in vertex-index order
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn vertex_id(&self, index: usize) -> &str {
        &self.vertices[index]
    }

    pub fn edges(&self) -> &[SimilarityEdge] {
        &self.edges
    }
}
