use criterion::*;
use rand::prelude::*;

use partition_distances::{algebraic, gmd::Unit, metrics, GeneralizedMergeDistance, Partition};

/// Shuffles `0..cardinality` and cuts it into clusters of random sizes.
fn random_partition(cardinality: usize, max_cluster_size: usize, rng: &mut StdRng) -> Partition<usize> {
    let mut tokens = (0..cardinality).collect::<Vec<_>>();
    tokens.shuffle(rng);

    let mut clusters = Vec::new();
    let mut start = 0;
    while start < cardinality {
        let size = rng.gen_range(1..=max_cluster_size).min(cardinality - start);
        clusters.push(tokens[start..start + size].to_vec());
        start += size;
    }

    Partition::new(clusters)
}

fn merge_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("MergeDistance");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    let engine = GeneralizedMergeDistance::new(Unit, Unit);

    for e in 2..=5 {
        let cardinality = 10_usize.pow(e);
        let mut rng = StdRng::seed_from_u64(u64::from(e));
        let standard = random_partition(cardinality, 20, &mut rng);
        let result = random_partition(cardinality, 20, &mut rng);

        let id = BenchmarkId::new("bmd", cardinality);
        group.bench_with_input(id, &cardinality, |b, _| {
            b.iter(|| black_box(engine.distance::<_, f64>(&result, &standard)))
        });

        let id = BenchmarkId::new("f1", cardinality);
        group.bench_with_input(id, &cardinality, |b, _| {
            b.iter(|| black_box(metrics::pairwise_f1::<_, f64>(&result, &standard)))
        });

        let id = BenchmarkId::new("vi", cardinality);
        group.bench_with_input(id, &cardinality, |b, _| {
            b.iter(|| black_box(metrics::variation_of_information::<_, f64>(&result, &standard)))
        });

        let id = BenchmarkId::new("ari", cardinality);
        group.bench_with_input(id, &cardinality, |b, _| {
            b.iter(|| black_box(algebraic::adjusted_rand_index::<_, f64>(&result, &standard)))
        });
    }

    group.finish();
}

criterion_group!(benches, merge_distance);
criterion_main!(benches);
