use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
    strategy::{BreedStrategy, PairedBreeding},
};

use super::{Challenge, EvolutionEngine, EvolutionOptions};

/// Assembles an [`EvolutionEngine`], validating the options on `build()`.
///
/// When `with_options` is not called, the options the challenge carries are
/// used.
///
/// The breed strategy defaults to [`PairedBreeding`] and the random number
/// generator to one seeded from system entropy.
///
/// ```rust
/// use rulegen::binary::{BinaryChallenge, BinaryClassificationConfig};
/// use rulegen::dataset::BinaryDataSet;
/// use rulegen::evolution::{EvolutionEngineBuilder, EvolutionOptions};
///
/// let training = vec![
///     BinaryDataSet::new(vec![0, 0], 0),
///     BinaryDataSet::new(vec![1, 1], 1),
/// ];
/// let options = EvolutionOptions::builder()
///     .num_generations(5)
///     .population_size(8)
///     .build()
///     .unwrap();
/// let config = BinaryClassificationConfig::new(options, 2, true).unwrap();
/// let challenge = BinaryChallenge::new(config, training, None).unwrap();
///
/// // The challenge's options drive the run.
/// let mut engine = EvolutionEngineBuilder::new()
///     .with_challenge(challenge)
///     .with_seed(42)
///     .build()
///     .unwrap();
///
/// let history = engine.run_algorithm().unwrap();
/// assert_eq!(history.len(), 6);
/// ```
#[derive(Debug)]
pub struct EvolutionEngineBuilder<C, B = PairedBreeding> {
    challenge: Option<C>,
    options: Option<EvolutionOptions>,
    breed_strategy: B,
    selection: TournamentSelection,
    rng: Option<RandomNumberGenerator>,
}

impl<C> EvolutionEngineBuilder<C, PairedBreeding>
where
    C: Challenge,
{
    pub fn new() -> Self {
        Self {
            challenge: None,
            options: None,
            breed_strategy: PairedBreeding::new(),
            selection: TournamentSelection::default(),
            rng: None,
        }
    }
}

impl<C> Default for EvolutionEngineBuilder<C, PairedBreeding>
where
    C: Challenge,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, B> EvolutionEngineBuilder<C, B>
where
    C: Challenge,
    B: BreedStrategy<C::Solution>,
{
    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Makes the run reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(RandomNumberGenerator::from_seed(seed));
        self
    }

    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn with_selection(mut self, selection: TournamentSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Replaces the breed strategy, changing the builder's strategy type.
    pub fn with_breed_strategy<B2>(self, breed_strategy: B2) -> EvolutionEngineBuilder<C, B2>
    where
        B2: BreedStrategy<C::Solution>,
    {
        EvolutionEngineBuilder {
            challenge: self.challenge,
            options: self.options,
            breed_strategy,
            selection: self.selection,
            rng: self.rng,
        }
    }

    /// Builds the engine in its `Uninitialized` state.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no challenge was given, the options
    /// fail [`EvolutionOptions::validate`], or the given options differ from
    /// the ones the challenge was configured with. Missing options fall back
    /// to the challenge's, then to `EvolutionOptions::default()`.
    pub fn build(self) -> Result<EvolutionEngine<C, B>> {
        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        let options = match (self.options, challenge.options()) {
            (Some(given), Some(configured)) if given != *configured => {
                return Err(GeneticError::Configuration(format!(
                    "Options {:?} conflict with the challenge's {:?}",
                    given, configured
                )));
            }
            (Some(given), _) => given,
            (None, Some(configured)) => configured.clone(),
            (None, None) => EvolutionOptions::default(),
        };
        options.validate()?;

        Ok(EvolutionEngine::new(
            challenge,
            self.breed_strategy,
            options,
            self.rng.unwrap_or_default(),
        )
        .with_selection(self.selection))
    }
}
