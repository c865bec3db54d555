use std::collections::HashSet;

use tracing::{debug, info};

use super::{
    challenge::Challenge,
    history::{GenerationObserver, GenerationStats, NoopObserver, RunHistory},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    rng::RandomNumberGenerator,
    selection::{best_index, worst_index, TournamentSelection},
    solution::Solution,
    strategy::{BreedStrategy, PairedBreeding},
};

/// Lifecycle of an [`EvolutionEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No population exists yet.
    Uninitialized,
    /// The population exists and generations remain to be run.
    Evolving,
    /// Every configured generation has run. Only `initialize()` restarts.
    Terminal,
}

/// Drives a population of candidate solutions through the generation loop.
///
/// Each generation runs, in order:
///
/// 1. **selection**: `population_size` binary tournaments over the population
///    pick the parents;
/// 2. **crossover**: the breed strategy turns the parents into as many offspring;
/// 3. **mutation**: every offspring is mutated with the configured rate;
/// 4. **survival**: the old population and the offspring are pooled, the
///    fittest member of the pool is set aside, `population_size` tournaments
///    over the rest of the pool form the new population, and the set-aside
///    elite replaces the new population's worst member.
///
/// The population size never changes during a run.
#[derive(Debug)]
pub struct EvolutionEngine<C, B = PairedBreeding>
where
    C: Challenge,
    B: BreedStrategy<C::Solution>,
{
    challenge: C,
    strategy: B,
    selection: TournamentSelection,
    options: EvolutionOptions,
    rng: RandomNumberGenerator,
    population: Vec<C::Solution>,
    generation: usize,
    state: EngineState,
}

impl<C, B> EvolutionEngine<C, B>
where
    C: Challenge,
    B: BreedStrategy<C::Solution>,
{
    /// Creates an engine in the `Uninitialized` state.
    ///
    /// The options are used as given; see
    /// [`EvolutionEngineBuilder`](super::builder::EvolutionEngineBuilder) for a
    /// validating constructor.
    pub fn new(
        challenge: C,
        strategy: B,
        options: EvolutionOptions,
        rng: RandomNumberGenerator,
    ) -> Self {
        Self {
            challenge,
            strategy,
            selection: TournamentSelection::default(),
            options,
            rng,
            population: Vec::new(),
            generation: 0,
            state: EngineState::Uninitialized,
        }
    }

    /// Replaces the default binary tournament.
    pub fn with_selection(mut self, selection: TournamentSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn challenge(&self) -> &C {
        &self.challenge
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of generations run since the last `initialize()`.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[C::Solution] {
        &self.population
    }

    /// Replaces the population with `population_size` random solutions and
    /// resets the generation counter.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the population size is zero.
    pub fn initialize(&mut self) -> Result<()> {
        let population_size = self.options.get_population_size();
        if population_size < 1 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        self.population = (0..population_size)
            .map(|_| self.challenge.random_solution(&mut self.rng))
            .collect();
        self.generation = 0;
        self.state = if self.options.get_num_generations() == 0 {
            EngineState::Terminal
        } else {
            EngineState::Evolving
        };

        debug!(population_size, "population initialized");
        Ok(())
    }

    /// Runs one generation: selection, crossover, mutation and survival.
    ///
    /// # Errors
    ///
    /// Returns an evolution error if the engine has not been initialized or
    /// has already run every configured generation.
    pub fn run_generation(&mut self) -> Result<()> {
        match self.state {
            EngineState::Uninitialized => {
                return Err(GeneticError::Evolution(
                    "Population has not been initialized".to_string(),
                ))
            }
            EngineState::Terminal => {
                return Err(GeneticError::Evolution(format!(
                    "All {} generations have run; initialize the engine to start again",
                    self.options.get_num_generations()
                )))
            }
            EngineState::Evolving => {}
        }

        let parents = self.select_parents()?;
        let mut offspring = self.breed(&parents)?;
        self.mutate(&mut offspring);
        self.survive(offspring)?;

        self.generation += 1;
        if self.generation >= self.options.get_num_generations() {
            self.state = EngineState::Terminal;
            debug!(generations = self.generation, "evolution finished");
        }
        Ok(())
    }

    /// Best fitness, average fitness and, when testing data exists, the best
    /// solution's test accuracy for the current population.
    pub fn snapshot(&self) -> Result<GenerationStats> {
        let fitness = self.fitness_values();
        let best = best_index(&fitness).ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let average = fitness.iter().sum::<f64>() / fitness.len() as f64;
        let test_accuracy = if self.challenge.can_test() {
            Some(self.challenge.test_accuracy(&self.population[best])?)
        } else {
            None
        };

        Ok(GenerationStats {
            generation: self.generation,
            best_fitness: fitness[best],
            average_fitness: average,
            test_accuracy,
        })
    }

    /// The fittest solution of the current population, first occurrence on ties.
    pub fn best_solution(&self) -> Result<&C::Solution> {
        crate::selection::best_solution(&self.population)
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// Accuracy percentage of the current best solution on the testing data.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::UnsupportedOperation` when the challenge has no
    /// testing data, and `GeneticError::EmptyPopulation` before initialization.
    pub fn test(&self) -> Result<f64> {
        if !self.challenge.can_test() {
            return Err(GeneticError::UnsupportedOperation(
                "No testing data was supplied".to_string(),
            ));
        }
        self.challenge.test_accuracy(self.best_solution()?)
    }

    /// Initializes the population and runs every configured generation,
    /// recording generations `0..=num_generations`.
    pub fn run_algorithm(&mut self) -> Result<RunHistory> {
        self.run_algorithm_with(&mut NoopObserver)
    }

    /// Like [`run_algorithm`](Self::run_algorithm), reporting each recorded
    /// generation to `observer`.
    pub fn run_algorithm_with<O>(&mut self, observer: &mut O) -> Result<RunHistory>
    where
        O: GenerationObserver + ?Sized,
    {
        let mut history = RunHistory::with_capacity(
            self.options.get_num_generations(),
            self.challenge.can_test(),
        );

        self.initialize()?;
        self.record(&mut history, observer)?;

        while self.state == EngineState::Evolving {
            self.run_generation()?;
            self.record(&mut history, observer)?;
        }

        Ok(history)
    }

    fn record<O>(&self, history: &mut RunHistory, observer: &mut O) -> Result<()>
    where
        O: GenerationObserver + ?Sized,
    {
        let stats = self.snapshot()?;

        match self.options.get_log_level() {
            LogLevel::None => {}
            LogLevel::Minimal => self.log_stats(&stats),
            LogLevel::Verbose => {
                self.log_stats(&stats);
                debug!(generation = stats.generation, best = %self.best_solution()?, "best solution");
            }
        }

        history.record(&stats);
        observer.on_generation(&stats);
        Ok(())
    }

    fn log_stats(&self, stats: &GenerationStats) {
        match stats.test_accuracy {
            Some(accuracy) => info!(
                generation = stats.generation,
                best = stats.best_fitness,
                average = stats.average_fitness,
                test_accuracy = accuracy,
                "generation complete"
            ),
            None => info!(
                generation = stats.generation,
                best = stats.best_fitness,
                average = stats.average_fitness,
                "generation complete"
            ),
        }
    }

    fn fitness_values(&self) -> Vec<f64> {
        self.population.iter().map(Solution::fitness).collect()
    }

    fn select_parents(&mut self) -> Result<Vec<C::Solution>> {
        let population_size = self.options.get_population_size();
        self.selection
            .select(&self.population, population_size, &mut self.rng)
    }

    fn breed(&mut self, parents: &[C::Solution]) -> Result<Vec<C::Solution>> {
        let offspring = self.strategy.breed(parents, &mut self.rng).map_err(|e| {
            GeneticError::Evolution(format!(
                "Failed to breed offspring in generation {}: {}",
                self.generation + 1,
                e
            ))
        })?;

        if offspring.len() != parents.len() {
            return Err(GeneticError::Evolution(format!(
                "Breed strategy produced {} offspring from {} parents",
                offspring.len(),
                parents.len()
            )));
        }
        Ok(offspring)
    }

    fn mutate(&mut self, offspring: &mut [C::Solution]) {
        let mutation_rate = self.options.get_mutation_rate();
        for child in offspring.iter_mut() {
            child.mutate(mutation_rate, &mut self.rng);
        }
    }

    fn survive(&mut self, offspring: Vec<C::Solution>) -> Result<()> {
        let population_size = self.options.get_population_size();

        let mut pool = std::mem::take(&mut self.population);
        pool.extend(offspring);
        let fitness: Vec<f64> = pool.iter().map(Solution::fitness).collect();

        let elite = best_index(&fitness).ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let excluded: HashSet<usize> = std::iter::once(elite).collect();

        let winners = self.selection.select_indices_excluding(
            &fitness,
            population_size,
            &mut self.rng,
            &excluded,
        )?;
        let winner_fitness: Vec<f64> = winners.iter().map(|&i| fitness[i]).collect();
        let worst =
            worst_index(&winner_fitness).ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        let mut next: Vec<C::Solution> = winners.iter().map(|&i| pool[i].clone()).collect();
        next[worst] = pool.swap_remove(elite);

        self.population = next;
        Ok(())
    }
}
