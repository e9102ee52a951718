use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array1;
use sparkle_prox::helpers::test_helpers::fill_random_vector;
use sparkle_prox::{Prox, ProximalOperator};

fn bench_prox(c: &mut Criterion) {
    let mut group = c.benchmark_group("prox_l1");

    for size in [100, 10_000, 1_000_000] {
        for positive in [false, true] {
            let x = Array1::from_vec(fill_random_vector(size, 42));

            let mut prox = Prox::l1(positive);
            prox.set_penalty_constant(0.1).unwrap();
            prox.set_application_range(0, size).unwrap();

            let config_string = format!("{}, {}", size, positive);
            group.bench_with_input(BenchmarkId::new("apply", config_string), &x, |b, x| {
                b.iter(|| prox.apply(x.view(), 0.5).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_prox);
criterion_main!(benches);
