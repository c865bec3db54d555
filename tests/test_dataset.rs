use rulegen::{
    binary::{BinaryChallenge, BinaryClassificationConfig},
    dataset::{read_binary_data_sets, split_alternating, BinaryDataSet},
    error::GeneticError,
    evolution::{EvolutionOptions, LogLevel},
    rng::RandomNumberGenerator,
};

#[test]
fn test_loaded_data_drives_a_classifier() {
    let raw = "\
00000 0
00001 0

00010 0
00011 1
00100 0
00101 1
";
    let records = read_binary_data_sets(raw.as_bytes()).unwrap();
    assert_eq!(records.len(), 6);

    let (training, testing) = split_alternating(records);
    let options = EvolutionOptions::new(5, 6, 10, LogLevel::None);
    let config = BinaryClassificationConfig::new(options, 3, true).unwrap();
    let mut classifier = BinaryChallenge::new(config, training, Some(testing))
        .unwrap()
        .into_classifier(RandomNumberGenerator::from_seed(0));

    classifier.run_algorithm().unwrap();
    assert!((0.0..=100.0).contains(&classifier.test().unwrap()));
}

#[test]
fn test_inconsistent_widths_are_rejected() {
    match read_binary_data_sets("0101 1\n011 0\n".as_bytes()) {
        Err(GeneticError::DataFormat(msg)) => assert!(msg.contains("Record 2")),
        other => panic!("Expected DataFormat error, got {:?}", other),
    }

    let records = vec![
        BinaryDataSet::new(vec![0, 1, 0, 1], 1),
        BinaryDataSet::new(vec![0, 1, 1], 0),
    ];
    let options = EvolutionOptions::default();
    let config = BinaryClassificationConfig::new(options, 2, false).unwrap();

    match BinaryChallenge::new(config, records, None) {
        Err(GeneticError::DataFormat(msg)) => assert!(msg.contains("Record 2")),
        other => panic!("Expected DataFormat error, got {:?}", other),
    }
}

#[test]
fn test_malformed_line_reports_line_number() {
    match read_binary_data_sets("0101 1\n01x1 0\n".as_bytes()) {
        Err(GeneticError::DataFormat(msg)) => assert!(msg.contains("Line 2")),
        other => panic!("Expected DataFormat error, got {:?}", other),
    }
}
