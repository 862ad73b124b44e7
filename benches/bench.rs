// Criterion benchmarks for Duet Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use duet_algo::core::blossom::{maximum_weight_matching, WeightedEdge};
use duet_algo::core::vectors::{ProfileVector, VectorStore};
use duet_algo::core::{cosine_similarity, SimilarityGraph};
use duet_algo::models::{GraphOptions, RankTriple};

/// Deterministic synthetic population: `n` participants ranking a slice
/// of a 200-artist universe, with overlapping taste clusters.
fn synthetic_triples(n: usize) -> Vec<RankTriple> {
    let mut triples = Vec::new();
    for p in 0..n {
        for slot in 0..10usize {
            let artist = (p * 7 + slot * 13) % 200;
            triples.push(RankTriple {
                participant_id: format!("participant-{:04}", p),
                artist_key: format!("artist-{:03}", artist),
                rank: (slot + 1) as u32,
            });
        }
    }
    triples
}

fn participant_ids(n: usize) -> Vec<String> {
    (0..n).map(|p| format!("participant-{:04}", p)).collect()
}

fn bench_cosine_similarity(c: &mut Criterion) {
    let a = ProfileVector::from_entries(&[
        ("artist-001", 1),
        ("artist-014", 2),
        ("artist-027", 3),
        ("artist-040", 4),
        ("artist-053", 5),
    ]);
    let b = ProfileVector::from_entries(&[
        ("artist-014", 1),
        ("artist-027", 2),
        ("artist-066", 3),
        ("artist-079", 4),
        ("artist-092", 5),
    ]);

    c.bench_function("cosine_similarity", |bencher| {
        bencher.iter(|| cosine_similarity(black_box(&a), black_box(&b)));
    });
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    for n in [50usize, 100, 200] {
        let store = VectorStore::from_triples(synthetic_triples(n)).unwrap();
        let ids = participant_ids(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bencher, _| {
            bencher.iter(|| {
                SimilarityGraph::build(
                    black_box(&ids),
                    black_box(&store),
                    &GraphOptions::default(),
                )
            });
        });
    }
    group.finish();
}

fn bench_matching_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching_solver");
    for n in [20usize, 50, 100] {
        // Complete graph with deterministic pseudo-random weights.
        let mut edges = Vec::new();
        let mut state = 0x9e37_79b9_7f4a_7c15u64;
        for u in 0..n {
            for v in (u + 1)..n {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                edges.push(WeightedEdge {
                    u,
                    v,
                    weight: (state % 1_000_000_000) as i64,
                });
            }
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bencher, _| {
            bencher.iter(|| maximum_weight_matching(black_box(n), black_box(&edges), true));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_cosine_similarity,
    bench_graph_build,
    bench_matching_solver
);
criterion_main!(benches);
