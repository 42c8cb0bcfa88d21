use criterion::{criterion_group, criterion_main, Criterion};

use lexalign_clustering::pipeline::phase4_transitive_merge::merge_components;
use lexalign_clustering::pipeline::phase6_disjointness::enforce_disjointness;
use lexalign_core::Cluster;

/// ~10K overlapping clusters over 20K members, chained so components are large.
fn build_overlapping_clusters(count: usize) -> Vec<Cluster> {
    (0..count)
        .map(|i| {
            let base = i * 2;
            Cluster::new([
                format!("s{base}"),
                format!("s{}", base + 1),
                format!("s{}", (base + 7) % (count * 2)),
            ])
        })
        .collect()
}

fn bench_transitive_merge_10k(c: &mut Criterion) {
    let clusters = build_overlapping_clusters(10_000);
    c.bench_function("transitive_merge_10k_clusters", |b| {
        b.iter(|| merge_components(&clusters));
    });
}

fn bench_disjointness_10k(c: &mut Criterion) {
    let clusters = build_overlapping_clusters(10_000);
    c.bench_function("global_disjointness_10k_clusters", |b| {
        b.iter(|| enforce_disjointness(clusters.clone()));
    });
}

criterion_group!(benches, bench_transitive_merge_10k, bench_disjointness_10k);
criterion_main!(benches);
