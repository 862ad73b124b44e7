// Unit tests for Duet Algo

use duet_algo::core::blossom::{maximum_weight_matching, WeightedEdge};
use duet_algo::core::similarity::{cosine_similarity, shared_artists};
use duet_algo::core::vectors::{ProfileVector, VectorStore};
use duet_algo::core::{match_score, SimilarityGraph};
use duet_algo::models::{GraphOptions, RankTriple, ScoreCurve};

fn triple(participant: &str, artist: &str, rank: u32) -> RankTriple {
    RankTriple {
        participant_id: participant.to_string(),
        artist_key: artist.to_string(),
        rank,
    }
}

fn edge(u: usize, v: usize, weight: i64) -> WeightedEdge {
    WeightedEdge { u, v, weight }
}

#[test]
fn test_cosine_identical_profiles() {
    let store = VectorStore::from_triples(vec![
        triple("a", "radiohead", 1),
        triple("a", "bjork", 2),
        triple("b", "radiohead", 1),
        triple("b", "bjork", 2),
    ])
    .unwrap();

    let sim = cosine_similarity(store.get("a").unwrap(), store.get("b").unwrap());
    assert!((sim - 1.0).abs() < 1e-12);
}

#[test]
fn test_cosine_scale_invariance() {
    // Cosine compares direction, not magnitude, so doubling every rank
    // leaves the similarity unchanged.
    let store = VectorStore::from_triples(vec![
        triple("a", "x", 1),
        triple("a", "y", 2),
        triple("b", "x", 2),
        triple("b", "y", 4),
    ])
    .unwrap();

    let sim = cosine_similarity(store.get("a").unwrap(), store.get("b").unwrap());
    assert!((sim - 1.0).abs() < 1e-12);
}

#[test]
fn test_cosine_zero_vector_fallback() {
    let full = ProfileVector::from_entries(&[("radiohead", 1)]);
    let sim = cosine_similarity(&full, &ProfileVector::default());
    assert_eq!(sim, 0.0);
    assert!(!sim.is_nan());
}

#[test]
fn test_shared_artists_intersection() {
    let a = ProfileVector::from_entries(&[("bjork", 1), ("can", 2), ("neu", 3)]);
    let b = ProfileVector::from_entries(&[("can", 1), ("faust", 2), ("neu", 3)]);
    assert_eq!(shared_artists(&a, &b), vec!["can", "neu"]);
}

#[test]
fn test_score_bounds_and_floor() {
    let curve = ScoreCurve::default();
    assert_eq!(match_score(0.0, &curve), 10);
    assert_eq!(match_score(1.0, &curve), 100);
    for step in 0..=100 {
        let score = match_score(step as f64 / 100.0, &curve);
        assert!(score <= 100);
    }
}

#[test]
fn test_score_monotonicity() {
    let curve = ScoreCurve::default();
    let mut previous = 0;
    for step in 0..=100 {
        let score = match_score(step as f64 / 100.0, &curve);
        assert!(score >= previous);
        previous = score;
    }
}

#[test]
fn test_graph_rejects_tiny_population() {
    let store = VectorStore::from_triples(vec![triple("a", "x", 1)]).unwrap();
    let result = SimilarityGraph::build(
        &["a".to_string()],
        &store,
        &GraphOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_matching_disjointness() {
    // Complete graph on 6 vertices with assorted weights; every vertex
    // may appear in at most one matched edge.
    let mut edges = Vec::new();
    for u in 0..6usize {
        for v in (u + 1)..6 {
            edges.push(edge(u, v, ((u * 7 + v * 13) % 20) as i64));
        }
    }
    let mate = maximum_weight_matching(6, &edges, true);

    for (v, partner) in mate.iter().enumerate() {
        if let Some(u) = partner {
            assert_eq!(mate[*u], Some(v));
        }
    }
    assert_eq!(mate.iter().flatten().count(), 6);
}

#[test]
fn test_matching_max_cardinality_over_heavy_edge() {
    // One heavy edge loses to two lighter edges that cover everyone.
    let edges = [edge(0, 1, 99), edge(0, 2, 50), edge(1, 3, 50)];
    let mate = maximum_weight_matching(4, &edges, true);
    assert_eq!(mate, vec![Some(2), Some(3), Some(0), Some(1)]);
}

#[test]
fn test_matching_odd_cycle() {
    let edges = [edge(0, 1, 6), edge(1, 2, 6), edge(2, 0, 6)];
    let mate = maximum_weight_matching(3, &edges, true);
    assert_eq!(mate.iter().flatten().count(), 2);
}
