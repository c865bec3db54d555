use rulegen::{
    binary::{BinaryChallenge, BinaryClassificationConfig, BinaryClassifier},
    dataset::{BinaryDataSet, RealDataSet},
    error::GeneticError,
    evolution::{EngineState, EvolutionEngineBuilder, EvolutionOptions, GenerationStats, LogLevel},
    interval::{IntervalChallenge, IntervalClassificationConfig, ValueRange},
    rng::RandomNumberGenerator,
    solution::Solution,
};

fn xor_records() -> Vec<BinaryDataSet> {
    vec![
        BinaryDataSet::new(vec![0, 0], 0),
        BinaryDataSet::new(vec![0, 1], 1),
        BinaryDataSet::new(vec![1, 0], 1),
        BinaryDataSet::new(vec![1, 1], 0),
    ]
}

fn binary_classifier(
    options: EvolutionOptions,
    rule_count: usize,
    use_wildcard: bool,
    training: Vec<BinaryDataSet>,
    testing: Option<Vec<BinaryDataSet>>,
    seed: u64,
) -> BinaryClassifier {
    let config = BinaryClassificationConfig::new(options, rule_count, use_wildcard).unwrap();
    BinaryChallenge::new(config, training, testing)
        .unwrap()
        .into_classifier(RandomNumberGenerator::from_seed(seed))
}

#[test]
fn test_population_size_conserved_binary() {
    for population_size in [2, 5, 8, 13] {
        let options = EvolutionOptions::new(6, population_size, 4, LogLevel::None);
        let mut classifier = binary_classifier(options, 3, true, xor_records(), None, 9);

        classifier.initialize().unwrap();
        assert_eq!(classifier.population().len(), population_size);
        while classifier.state() == EngineState::Evolving {
            classifier.run_generation().unwrap();
            assert_eq!(classifier.population().len(), population_size);
        }
    }
}

#[test]
fn test_population_size_conserved_interval() {
    let training = vec![
        RealDataSet::new(vec![0.1, 0.9], 0),
        RealDataSet::new(vec![0.7, 0.2], 1),
        RealDataSet::new(vec![0.4, 0.4], 0),
    ];
    for population_size in [3, 6, 11] {
        let options = EvolutionOptions::new(5, population_size, 3, LogLevel::None);
        let config = IntervalClassificationConfig::new(
            options,
            2,
            ValueRange::new(0.0, 1.0).unwrap(),
            0.25,
        )
        .unwrap();
        let mut classifier = IntervalChallenge::new(config, training.clone(), None)
            .unwrap()
            .into_classifier(RandomNumberGenerator::from_seed(5));

        classifier.initialize().unwrap();
        for _ in 0..5 {
            classifier.run_generation().unwrap();
            assert_eq!(classifier.population().len(), population_size);
        }
        assert_eq!(classifier.state(), EngineState::Terminal);
    }
}

#[test]
fn test_single_record_reaches_perfect_fit() {
    for seed in 0..5 {
        let training = vec![BinaryDataSet::new(vec![0, 0, 0], 0)];
        let options = EvolutionOptions::new(10, 10, 1, LogLevel::None);
        let mut classifier = binary_classifier(options, 1, true, training, None, seed);

        let history = classifier.run_algorithm().unwrap();

        assert_eq!(classifier.state(), EngineState::Terminal);
        assert_eq!(history.best_fitness.last().copied(), Some(1.0));
        assert_eq!(classifier.best_solution().unwrap().fitness(), 1.0);
    }
}

#[test]
fn test_history_has_generations_plus_one_entries() {
    let (training, testing) = rulegen::dataset::split_alternating(
        xor_records().into_iter().cycle().take(8).collect(),
    );
    let options = EvolutionOptions::new(7, 6, 10, LogLevel::None);
    let mut classifier = binary_classifier(options, 2, true, training, Some(testing), 1);

    let history = classifier.run_algorithm().unwrap();
    assert_eq!(history.best_fitness.len(), 8);
    assert_eq!(history.average_fitness.len(), 8);
    let tests = history.test_results.unwrap();
    assert_eq!(tests.len(), 8);
    assert!(tests.iter().all(|a| (0.0..=100.0).contains(a)));
    for (best, average) in history.best_fitness.iter().zip(&history.average_fitness) {
        assert!(average <= best);
    }
}

#[test]
fn test_best_fitness_is_monotonic() {
    let options = EvolutionOptions::new(25, 7, 5, LogLevel::None);
    let mut classifier = binary_classifier(options, 4, true, xor_records(), None, 77);
    let history = classifier.run_algorithm().unwrap();
    for pair in history.best_fitness.windows(2) {
        assert!(pair[1] >= pair[0], "elite was lost: {:?}", pair);
    }
}

#[test]
fn test_test_without_testing_data_is_unsupported() {
    let options = EvolutionOptions::new(3, 4, 10, LogLevel::None);
    let mut classifier = binary_classifier(options, 2, false, xor_records(), None, 2);
    classifier.run_algorithm().unwrap();

    match classifier.test() {
        Err(GeneticError::UnsupportedOperation(_)) => (),
        other => panic!("Expected UnsupportedOperation, got {:?}", other),
    }
}

#[test]
fn test_test_with_testing_data() {
    let options = EvolutionOptions::new(3, 4, 10, LogLevel::None);
    let mut classifier =
        binary_classifier(options, 2, true, xor_records(), Some(xor_records()), 2);
    classifier.run_algorithm().unwrap();

    let accuracy = classifier.test().unwrap();
    let best = classifier.best_solution().unwrap();
    assert_eq!(accuracy, best.fitness_on(&xor_records()) / 4.0 * 100.0);
}

#[test]
fn test_run_generation_state_errors() {
    let options = EvolutionOptions::new(1, 4, 10, LogLevel::None);
    let mut classifier = binary_classifier(options, 1, true, xor_records(), None, 3);

    assert!(matches!(
        classifier.run_generation(),
        Err(GeneticError::Evolution(_))
    ));
    classifier.initialize().unwrap();
    classifier.run_generation().unwrap();
    assert!(matches!(
        classifier.run_generation(),
        Err(GeneticError::Evolution(_))
    ));
}

#[test]
fn test_rerun_after_terminal() {
    let options = EvolutionOptions::new(4, 5, 8, LogLevel::None);
    let mut classifier = binary_classifier(options, 2, true, xor_records(), None, 12);

    let first = classifier.run_algorithm().unwrap();
    let second = classifier.run_algorithm().unwrap();
    assert_eq!(first.len(), second.len());
    assert_eq!(classifier.generation(), 4);
}

#[test]
fn test_seeded_builder_is_reproducible() {
    let run = || {
        let options = EvolutionOptions::new(10, 8, 6, LogLevel::None);
        let config = BinaryClassificationConfig::new(options.clone(), 3, true).unwrap();
        let challenge = BinaryChallenge::new(config, xor_records(), None).unwrap();
        let mut engine = EvolutionEngineBuilder::new()
            .with_challenge(challenge)
            .with_options(options)
            .with_seed(2024)
            .build()
            .unwrap();
        let history = engine.run_algorithm().unwrap();
        (history, engine.best_solution().unwrap().to_string())
    };

    assert_eq!(run(), run());
}

#[test]
fn test_observer_receives_snapshots() {
    let options = EvolutionOptions::new(5, 6, 5, LogLevel::None);
    let mut classifier =
        binary_classifier(options, 2, true, xor_records(), Some(xor_records()), 8);

    let mut seen: Vec<GenerationStats> = Vec::new();
    let mut observer = |stats: &GenerationStats| seen.push(*stats);
    let history = classifier.run_algorithm_with(&mut observer).unwrap();

    assert_eq!(seen.len(), 6);
    for (i, stats) in seen.iter().enumerate() {
        assert_eq!(stats.generation, i);
        assert_eq!(stats.best_fitness, history.best_fitness[i]);
        assert!(stats.test_accuracy.is_some());
    }
}

#[test]
fn test_verbose_logging_runs() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let options = EvolutionOptions::new(3, 4, 10, LogLevel::Verbose);
    let mut classifier =
        binary_classifier(options, 2, true, xor_records(), Some(xor_records()), 4);
    let history = classifier.run_algorithm().unwrap();
    assert_eq!(history.len(), 4);
}
