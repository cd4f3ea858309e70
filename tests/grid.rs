use brewsalts::{BrewConfig, ConfigError, Ion, TargetRange, solve, target_points};
use brewsalts::chemistry::linspace;

#[test]
fn linspace_is_inclusive_of_both_endpoints() {
    assert_eq!(linspace(50.0, 75.0, 2), vec![50.0, 75.0]);
    assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
    assert_eq!(linspace(42.0, 99.0, 1), vec![42.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
}

#[test]
fn target_range_samples_its_interval() {
    let range = TargetRange::new(50.0, 100.0, 3);
    assert_eq!(range.values(), vec![50.0, 75.0, 100.0]);
}

#[test]
fn default_grid_cross_product_has_sixty_four_points() {
    let config = BrewConfig::default();
    assert_eq!(config.targets.len(), 64);

    let points = target_points(&config);
    assert_eq!(points.len(), 64);

    // First point is every lower bound, last is every upper bound, and the
    // last-listed ion (bicarbonate) varies fastest.
    let first = &points[0];
    assert_eq!(first.values(), [50.0, 50.0, 50.0, 10.0, 5.0, 50.0]);
    let second = &points[1];
    assert_eq!(second.values(), [50.0, 50.0, 50.0, 10.0, 5.0, 150.0]);
    let last = &points[63];
    assert_eq!(last.values(), [75.0, 80.0, 100.0, 20.0, 10.0, 150.0]);
}

#[test]
fn search_size_matches_the_enumeration() {
    let solution = solve(&BrewConfig::default()).expect("default config is valid");

    // 5! orderings x 2^6 target points.
    assert_eq!(solution.candidates, 120 * 64);

    // Each simulation inspects between one and two ions per chemical.
    assert!(solution.evaluations >= solution.candidates * 5);
    assert!(solution.evaluations <= solution.candidates * 10);
}

#[test]
fn non_positive_volume_is_rejected() {
    let mut config = BrewConfig::default();
    config.gallons = 0.0;

    assert_eq!(
        solve(&config).unwrap_err(),
        ConfigError::NonPositiveVolume { gallons: 0.0 }
    );
}

#[test]
fn negative_base_concentration_is_rejected() {
    let mut config = BrewConfig::default();
    config.base.chloride = -1.0;

    assert_eq!(
        solve(&config).unwrap_err(),
        ConfigError::NegativeBaseIon {
            ion: Ion::Chloride,
            value: -1.0
        }
    );
}

#[test]
fn empty_target_range_is_rejected() {
    let mut config = BrewConfig::default();
    config.targets.magnesium.points = 0;

    assert_eq!(
        solve(&config).unwrap_err(),
        ConfigError::EmptyTargetRange { ion: Ion::Magnesium }
    );
}
