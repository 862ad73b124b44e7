// Core algorithm exports
pub mod blossom;
pub mod graph;
pub mod matcher;
pub mod scoring;
pub mod similarity;
pub mod vectors;

pub use blossom::{maximum_weight_matching, WeightedEdge};
pub use graph::{SimilarityEdge, SimilarityGraph};
pub use matcher::Matcher;
pub use scoring::match_score;
pub use similarity::{cosine_similarity, shared_artists};
pub use vectors::{ProfileVector, VectorStore};
