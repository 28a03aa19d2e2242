use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use blxga::{
    bounds::Bounds,
    breeding::{BlxGaussianStrategy, BreedStrategy},
    evolution::{EvolutionLauncher, EvolutionOptions},
    individual::Individual,
    rng::RandomNumberGenerator,
};

fn negative_rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    -(10.0 * n
        + x.iter()
            .map(|v| v * v - 10.0 * (2.0 * std::f64::consts::PI * v).cos())
            .sum::<f64>())
}

// Stands in for a fitness function that is costly enough to parallelize.
fn expensive_rastrigin(x: &[f64]) -> f64 {
    (0..200).fold(0.0, |acc, i| acc + negative_rastrigin(x) / (i as f64 + 1.0))
}

fn bench_breeding(c: &mut Criterion) {
    let bounds = Bounds::uniform(-5.12, 5.12, 10).unwrap();
    let strategy = BlxGaussianStrategy::from_options(&EvolutionOptions::default()).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(1);
    let parent1 = Individual::from_genes(vec![1.0; 10]);
    let parent2 = Individual::from_genes(vec![-1.0; 10]);

    c.bench_function("blx_gaussian_breed_10d", |b| {
        b.iter(|| {
            strategy
                .breed(
                    black_box(&parent1),
                    black_box(&parent2),
                    black_box(&bounds),
                    &mut rng,
                )
                .unwrap()
        })
    });
}

fn bench_evaluation(c: &mut Criterion) {
    let bounds = Bounds::uniform(-5.12, 5.12, 10).unwrap();
    let launcher = EvolutionLauncher::new(bounds, expensive_rastrigin);

    let mut group = c.benchmark_group("evolve_expensive_fitness");
    group.sample_size(10);

    for size in [50, 200, 1000].iter() {
        let sequential = EvolutionOptions::builder()
            .population_size(*size)
            .num_generations(10)
            .parallel_threshold(usize::MAX)
            .build();
        let parallel = EvolutionOptions::builder()
            .population_size(*size)
            .num_generations(10)
            .parallel_threshold(0)
            .build();

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| {
                let mut rng = RandomNumberGenerator::from_seed(7);
                launcher.evolve(black_box(&sequential), &mut rng).unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| {
                let mut rng = RandomNumberGenerator::from_seed(7);
                launcher.evolve(black_box(&parallel), &mut rng).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_breeding, bench_evaluation);
criterion_main!(benches);
