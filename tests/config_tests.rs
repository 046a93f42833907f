use montecarlo_tictactoe::{MonteCarloError, TrainingConfig};

#[test]
fn test_config_builder_methods() {
    // Test that all builder methods correctly set their respective values
    let config = TrainingConfig::default()
        .with_max_iterations(60_000)
        .with_discount(0.9)
        .with_evaluation_episodes(500)
        .with_seed(100)
        .with_max_sampling_attempts(1_000)
        .with_log_interval(0);

    assert_eq!(config.max_iterations, 60_000);
    assert_eq!(config.discount, 0.9);
    assert_eq!(config.evaluation_episodes, 500);
    assert_eq!(config.seed, Some(100));
    assert_eq!(config.max_sampling_attempts, 1_000);
    assert_eq!(config.log_interval, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_default_values() {
    let config = TrainingConfig::default();

    assert_eq!(config.max_iterations, 30_000);
    assert!((config.discount - 0.3).abs() < f64::EPSILON);
    assert_eq!(config.evaluation_episodes, 1_000);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let bad_discount = TrainingConfig::default().with_discount(1.5);
    assert!(matches!(
        bad_discount.validate(),
        Err(MonteCarloError::InvalidConfiguration(_))
    ));

    let negative_discount = TrainingConfig::default().with_discount(-0.1);
    assert!(negative_discount.validate().is_err());

    let no_iterations = TrainingConfig::default().with_max_iterations(0);
    assert!(no_iterations.validate().is_err());

    let no_episodes = TrainingConfig::default().with_evaluation_episodes(0);
    assert!(no_episodes.validate().is_err());

    let no_attempts = TrainingConfig::default().with_max_sampling_attempts(0);
    assert!(no_attempts.validate().is_err());
}
