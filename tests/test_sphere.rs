use blxga::{
    bounds::Bounds,
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel},
    rng::RandomNumberGenerator,
};

fn negative_sphere(x: &[f64]) -> f64 {
    -x.iter().map(|v| v * v).sum::<f64>()
}

fn sphere_options() -> EvolutionOptions {
    EvolutionOptions::builder()
        .population_size(20)
        .num_generations(50)
        .tournament_size(3)
        .crossover_rate(0.9)
        .mutation_rate(0.2)
        .mutation_sigma(0.1)
        .elitism(1)
        .blx_alpha(0.5)
        .build()
}

#[test]
fn test_sphere_converges_to_origin() {
    let bounds = Bounds::uniform(-5.0, 5.0, 2).unwrap();
    let launcher = EvolutionLauncher::new(bounds, negative_sphere);
    let mut rng = RandomNumberGenerator::from_seed(42);

    let history = launcher.evolve(&sphere_options(), &mut rng).unwrap();

    assert_eq!(history.len(), 50);
    for (expected, record) in history.iter().enumerate() {
        assert_eq!(record.generation, expected);
    }

    let last = history.last().unwrap();
    assert!(
        last.best_fitness > -1e-2,
        "best fitness {} is not close to 0",
        last.best_fitness
    );
    for &x in last.best_individual.genes() {
        assert!(x.abs() < 0.1, "component {} is not close to 0", x);
    }
}

#[test]
fn test_sphere_converges_for_several_seeds() {
    let bounds = Bounds::uniform(-5.0, 5.0, 2).unwrap();
    let launcher = EvolutionLauncher::new(bounds, negative_sphere);

    for seed in [1, 7, 123, 2024] {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let history = launcher.evolve(&sphere_options(), &mut rng).unwrap();
        let best = history.best().unwrap();
        assert!(best.best_fitness > -1e-2, "seed {}: {}", seed, best.best_fitness);
    }
}

#[test]
fn test_sphere_with_minimal_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let bounds = Bounds::uniform(-5.0, 5.0, 5).unwrap();
    let launcher = EvolutionLauncher::new(bounds, negative_sphere);
    let options = EvolutionOptions::builder()
        .num_generations(30)
        .log_level(LogLevel::Minimal)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(3);

    let history = launcher.evolve(&options, &mut rng).unwrap();
    assert_eq!(history.len(), 30);
}

#[test]
fn test_verbose_logging_runs() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let bounds = Bounds::uniform(-1.0, 1.0, 2).unwrap();
    let launcher = EvolutionLauncher::new(bounds, negative_sphere);
    let options = EvolutionOptions::builder()
        .population_size(6)
        .num_generations(3)
        .log_level(LogLevel::Verbose)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(3);

    assert_eq!(launcher.evolve(&options, &mut rng).unwrap().len(), 3);
}
