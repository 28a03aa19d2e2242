use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use super::{
    challenge::Challenge,
    history::{GenerationRecord, History},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    bounds::Bounds,
    breeding::{BlxGaussianStrategy, BreedStrategy},
    error::{EvaluationStage, FitnessError, GeneticError, OptionExt, Result},
    individual::Individual,
    rng::RandomNumberGenerator,
    selection::{best_index, ElitistSelection, SelectionStrategy, TournamentSelection},
};

/// Runs the genetic algorithm over a search domain against a challenge.
///
/// # Example
///
/// ```rust
/// use blxga::bounds::Bounds;
/// use blxga::evolution::{EvolutionLauncher, EvolutionOptions};
/// use blxga::rng::RandomNumberGenerator;
///
/// let bounds = Bounds::uniform(-5.0, 5.0, 2).unwrap();
/// let sphere = |x: &[f64]| -x.iter().map(|v| v * v).sum::<f64>();
/// let launcher = EvolutionLauncher::new(bounds, sphere);
///
/// let options = EvolutionOptions::builder()
///     .population_size(20)
///     .num_generations(30)
///     .build();
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let history = launcher.evolve(&options, &mut rng).unwrap();
/// assert_eq!(history.len(), 30);
/// assert!(history.last().unwrap().best_fitness <= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Chall>
where
    Chall: Challenge,
{
    bounds: Bounds,
    challenge: Chall,
    cancellation: Option<Arc<AtomicBool>>,
}

impl<Chall> EvolutionLauncher<Chall>
where
    Chall: Challenge + Send + Sync,
{
    pub fn new(bounds: Bounds, challenge: Chall) -> Self {
        Self {
            bounds,
            challenge,
            cancellation: None,
        }
    }

    /// Installs a cancellation flag, checked before every generation.
    ///
    /// Once the flag reads `true` the run stops with
    /// [`GeneticError::Cancelled`], which carries the generations completed so far.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancellation = Some(flag);
        self
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Runs every generation and returns the best-per-generation history.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid for the bounds (nothing is run in that case)
    /// - The challenge fails or returns a non-finite score
    /// - The run is cancelled
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<History> {
        let span = info_span!(
            "evolve",
            population_size = options.get_population_size(),
            generations = options.get_num_generations(),
            dimension = self.bounds.dimension(),
        );
        let _enter = span.enter();

        let mut evolution = self.start(options, rng)?;
        while !evolution.is_finished() {
            evolution.step()?;
        }

        let history = evolution.into_history();
        if let Some(best) = history.best() {
            info!(
                generation = best.generation,
                best_fitness = best.best_fitness,
                "Evolution finished"
            );
        }
        Ok(history)
    }

    /// Validates the options, then builds and scores the initial population.
    ///
    /// The returned [`Evolution`] has not run any generation yet; drive it
    /// with [`Evolution::step`].
    pub fn start<'a>(
        &'a self,
        options: &EvolutionOptions,
        rng: &'a mut RandomNumberGenerator,
    ) -> Result<Evolution<'a, Chall>> {
        options.validate(&self.bounds)?;

        let breeder = BlxGaussianStrategy::from_options(options)?;
        let tournament = TournamentSelection::new(options.get_tournament_size())?;

        let population = (0..options.get_population_size())
            .map(|_| self.bounds.random_individual(rng))
            .collect::<Result<Vec<_>>>()?;
        let fitness = self.evaluate(&population, EvaluationStage::Initial, options)?;

        debug!(
            population_size = population.len(),
            "Initial population evaluated"
        );

        Ok(Evolution {
            launcher: self,
            options: options.clone(),
            rng,
            breeder,
            tournament,
            population,
            fitness,
            generation: 0,
            history: Vec::with_capacity(options.get_num_generations()),
        })
    }

    /// Scores the whole population, in parallel once it reaches the threshold.
    ///
    /// Scores come back in population order either way, and a failure is
    /// reported for the lowest failing index.
    fn evaluate(
        &self,
        population: &[Individual],
        stage: EvaluationStage,
        options: &EvolutionOptions,
    ) -> Result<Vec<f64>> {
        if population.len() >= options.get_parallel_threshold() {
            let scores: Vec<std::result::Result<f64, FitnessError>> = population
                .par_iter()
                .map(|individual| self.challenge.score(individual))
                .collect();

            scores
                .into_iter()
                .enumerate()
                .map(|(index, score)| check_score(stage, index, &population[index], score))
                .collect()
        } else {
            population
                .iter()
                .enumerate()
                .map(|(index, individual)| {
                    check_score(stage, index, individual, self.challenge.score(individual))
                })
                .collect()
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

fn check_score(
    stage: EvaluationStage,
    index: usize,
    individual: &Individual,
    score: std::result::Result<f64, FitnessError>,
) -> Result<f64> {
    match score {
        Ok(score) if score.is_finite() => Ok(score),
        Ok(score) => Err(GeneticError::NonFiniteFitness {
            stage,
            index,
            individual: individual.genes().to_vec(),
            score,
        }),
        Err(source) => Err(GeneticError::FitnessEvaluation {
            stage,
            index,
            individual: individual.genes().to_vec(),
            source,
        }),
    }
}

/// A run in progress.
///
/// Holds the current population with its fitness, and the history so far.
/// Each [`step`](Evolution::step) replaces the population with a newly bred
/// one: elites first, then offspring until the population is full again.
#[derive(Debug)]
pub struct Evolution<'a, Chall>
where
    Chall: Challenge,
{
    launcher: &'a EvolutionLauncher<Chall>,
    options: EvolutionOptions,
    rng: &'a mut RandomNumberGenerator,
    breeder: BlxGaussianStrategy,
    tournament: TournamentSelection,
    population: Vec<Individual>,
    fitness: Vec<f64>,
    generation: usize,
    history: Vec<GenerationRecord>,
}

impl<'a, Chall> Evolution<'a, Chall>
where
    Chall: Challenge + Send + Sync,
{
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Fitness of the current population, index for index.
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Number of generations run so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.generation >= self.options.get_num_generations()
    }

    pub fn history(&self) -> &[GenerationRecord] {
        &self.history
    }

    pub fn into_history(self) -> History {
        History::new(self.history)
    }

    /// Runs one generation and returns its record.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Evolution` if every generation has already run,
    /// `GeneticError::Cancelled` if the cancellation flag is raised, and any
    /// fitness error raised while scoring the new population.
    pub fn step(&mut self) -> Result<&GenerationRecord> {
        let generation = self.generation;
        let num_generations = self.options.get_num_generations();

        if self.is_finished() {
            return Err(GeneticError::Evolution(format!(
                "All {} generations have already run",
                num_generations
            )));
        }

        if self.launcher.is_cancelled() {
            warn!(generation, "Evolution cancelled");
            return Err(GeneticError::Cancelled {
                generation,
                history: self.history.clone(),
            });
        }

        let population_size = self.options.get_population_size();
        let bounds = self.launcher.bounds();

        let mut next = ElitistSelection.select(
            &self.population,
            &self.fitness,
            self.options.get_elitism(),
            self.rng,
        )?;

        while next.len() < population_size {
            let parent1 = self
                .tournament
                .select_one(&self.population, &self.fitness, self.rng)?;
            let parent2 = self
                .tournament
                .select_one(&self.population, &self.fitness, self.rng)?;

            let (child1, child2) = self.breeder.breed(&parent1, &parent2, bounds, self.rng)?;

            next.push(child1);
            if next.len() < population_size {
                next.push(child2);
            }
        }

        let fitness =
            self.launcher
                .evaluate(&next, EvaluationStage::Generation(generation), &self.options)?;
        self.population = next;
        self.fitness = fitness;

        let best = best_index(&self.fitness).ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let record = GenerationRecord {
            generation,
            best_fitness: self.fitness[best],
            best_individual: self.population[best].clone(),
        };

        self.log_generation(&record);

        self.generation += 1;
        self.history.push(record);
        Ok(&self.history[self.history.len() - 1])
    }

    fn log_generation(&self, record: &GenerationRecord) {
        let num_generations = self.options.get_num_generations();

        match self.options.get_log_level() {
            LogLevel::Minimal => {
                let every = (num_generations / 10).max(1);
                if record.generation % every == 0 || record.generation + 1 == num_generations {
                    info!(
                        generation = record.generation,
                        best_fitness = record.best_fitness,
                        best_individual = ?record.best_individual.genes(),
                        "Generation complete"
                    );
                }
            }
            LogLevel::Verbose => {
                info!(
                    generation = record.generation,
                    best_fitness = record.best_fitness,
                    best_individual = ?record.best_individual.genes(),
                    "Generation complete"
                );
                for (index, (individual, score)) in
                    self.population.iter().zip(&self.fitness).enumerate()
                {
                    debug!(
                        generation = record.generation,
                        index,
                        score,
                        genes = ?individual.genes(),
                        "Individual scored"
                    );
                }
            }
            LogLevel::None => {}
        }
    }
}
