use rulegen::{
    dataset::{read_real_data_sets, split_alternating},
    evolution::{AlgorithmRunner, EvolutionOptions, LogLevel, RunHistory},
    interval::{IntervalChallenge, IntervalClassificationConfig, StepSampling, ValueRange},
    rng::RandomNumberGenerator,
};

const DATA: &str = "\
0.10 0.20 0
0.15 0.30 0
0.80 0.90 1
0.70 0.95 1
0.20 0.10 0
0.90 0.75 1
0.05 0.25 0
0.85 0.80 1
";

fn classifier(seed: u64) -> rulegen::IntervalClassifier {
    let records = read_real_data_sets(DATA.as_bytes()).unwrap();
    let bounds = ValueRange::observed(&records).unwrap();
    let (training, testing) = split_alternating(records);

    let options = EvolutionOptions::new(6, 8, 5, LogLevel::None);
    let config = IntervalClassificationConfig::new(options, 2, bounds, 0.1)
        .unwrap()
        .with_step_sampling(StepSampling::UnitModulo);
    IntervalChallenge::new(config, training, Some(testing))
        .unwrap()
        .into_classifier(RandomNumberGenerator::from_seed(seed))
}

#[test]
fn test_runner_averages_independent_runs() {
    let runner = AlgorithmRunner::new(4).unwrap();
    let averaged = runner.run(&mut classifier(19)).unwrap();

    let mut engine = classifier(19);
    let runs: Vec<RunHistory> = (0..4).map(|_| engine.run_algorithm().unwrap()).collect();

    assert_eq!(averaged.runs, 4);
    assert_eq!(averaged.len(), 7);
    for generation in 0..7 {
        let expected = runs.iter().map(|r| r.best_fitness[generation]).sum::<f64>() / 4.0;
        assert!((averaged.best_fitness[generation] - expected).abs() < 1e-9);
    }

    let tests = averaged.test_results.unwrap();
    assert_eq!(tests.len(), 7);
    assert!(tests.iter().all(|a| (0.0..=100.0).contains(a)));
}

#[test]
fn test_runner_single_run_matches_history() {
    let averaged = AlgorithmRunner::new(1)
        .unwrap()
        .run(&mut classifier(5))
        .unwrap();
    let history = classifier(5).run_algorithm().unwrap();

    assert_eq!(averaged.best_fitness, history.best_fitness);
    assert_eq!(averaged.average_fitness, history.average_fitness);
    assert_eq!(averaged.test_results, history.test_results);
}
