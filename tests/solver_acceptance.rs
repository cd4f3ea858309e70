use brewsalts::{BrewConfig, Chemical, IonProfile, evaluate_candidate, solve, target_points};
use itertools::Itertools;

fn approx(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "value {actual} not within {tol} of {expected}"
    );
}

#[test]
fn repeated_runs_are_identical() {
    let config = BrewConfig::default();

    let first = solve(&config).expect("default config is valid");
    let second = solve(&config).expect("default config is valid");

    // Exhaustive enumeration with a deterministic tie-break: both runs must
    // agree on everything, down to the last bit.
    assert_eq!(first, second);
}

#[test]
fn additions_never_decrease_an_ion() {
    let solution = solve(&BrewConfig::default()).expect("default config is valid");

    for (initial, adjusted) in solution
        .initial
        .values()
        .into_iter()
        .zip(solution.adjusted.values())
    {
        assert!(
            adjusted >= initial,
            "adjusted {adjusted} fell below initial {initial}"
        );
    }
}

#[test]
fn winner_beats_every_enumerated_candidate() {
    let config = BrewConfig::default();
    let solution = solve(&config).expect("default config is valid");

    let volume_l = config.liters();
    let targets = target_points(&config);
    for order in Chemical::ALL.iter().copied().permutations(Chemical::ALL.len()) {
        for target in &targets {
            let candidate = evaluate_candidate(
                &order,
                target,
                &config.base,
                volume_l,
                config.desired_ratio,
                config.ratio_weight,
            );
            assert!(
                solution.total_deviation <= candidate.deviation,
                "winner ({}) lost to a candidate ({})",
                solution.total_deviation,
                candidate.deviation
            );
        }
    }
}

#[test]
fn satisfied_base_water_needs_no_additions() {
    let mut config = BrewConfig::default();
    config.base = IonProfile {
        calcium: 200.0,
        sulfate: 200.0,
        chloride: 200.0,
        sodium: 200.0,
        magnesium: 200.0,
        bicarbonate: 200.0,
    };

    let solution = solve(&config).expect("config is valid");

    assert!(solution.nonzero_additions().next().is_none());
    assert_eq!(solution.adjusted, config.base);
}

#[test]
fn gypsum_dose_matches_hand_arithmetic() {
    // 5 gallons = 18.92705 L, base calcium 0.1 ppm, target calcium 50 ppm:
    // gypsum dose = (50 - 0.1) / 232 * 18.92705 ≈ 4.07 g, which drags
    // sulfate up by 49.9 * 556 / 232 ≈ 119.6 ppm.
    let base = IonProfile::default();
    let mut target = base.clone();
    target.calcium = 50.0;

    let order = [
        Chemical::Gypsum,
        Chemical::BakingSoda,
        Chemical::CalciumChloride,
        Chemical::EpsomSalt,
        Chemical::Chalk,
    ];
    let candidate = evaluate_candidate(&order, &target, &base, 18.92705, 1.0, 100.0);

    assert_eq!(candidate.additions_g[0], 4.07);
    for &grams in &candidate.additions_g[1..] {
        assert_eq!(grams, 0.0);
    }
    approx(candidate.adjusted.calcium, 50.0, 1e-9);
    approx(candidate.adjusted.sulfate - base.sulfate, 119.6, 0.1);
}

#[test]
fn ratio_penalty_is_weighted_distance_from_desired() {
    // chloride/sulfate = 2 with desired ratio 1 and weight 100: the penalty
    // must contribute exactly |2 - 1| * 100 = 100.
    let base = IonProfile {
        calcium: 50.0,
        sulfate: 50.0,
        chloride: 100.0,
        sodium: 10.0,
        magnesium: 5.0,
        bicarbonate: 50.0,
    };
    let target = base.clone();

    let candidate = evaluate_candidate(&Chemical::ALL, &target, &base, 18.92705, 1.0, 100.0);

    assert_eq!(candidate.deviation, 100.0);
}

#[test]
fn zero_sulfate_scores_out_of_contention_without_panicking() {
    let base = IonProfile {
        calcium: 50.0,
        sulfate: 0.0,
        chloride: 0.0,
        sodium: 10.0,
        magnesium: 5.0,
        bicarbonate: 50.0,
    };
    let target = base.clone();

    let candidate = evaluate_candidate(&Chemical::ALL, &target, &base, 18.92705, 1.0, 100.0);

    assert!(candidate.deviation.is_infinite());
}
