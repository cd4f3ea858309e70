use itertools::Itertools;
use serde::Serialize;

use crate::chemistry::{Chemical, Ion, round_to};
use crate::error::ConfigError;
use crate::models::{BrewConfig, IonProfile};

/// One simulated candidate: a chemical ordering evaluated against one target
/// point of the grid.
///
/// `deviation` is the scalar score the search minimizes: the sum of absolute
/// per-ion distances from the target plus a weighted chloride:sulfate ratio
/// penalty. It is non-negative, and infinite when the simulation leaves
/// working sulfate at zero (the ratio would be undefined, so the candidate
/// is scored out of contention instead of raising).
#[derive(Debug, Clone)]
pub struct Candidate {
    pub order: Vec<Chemical>,
    /// Grams per chemical, parallel to `order`, rounded to 2 decimals.
    pub additions_g: Vec<f64>,
    /// Working profile after all additions in `order` were applied.
    pub adjusted: IonProfile,
    pub target: IonProfile,
    pub deviation: f64,
    /// Elementary per-ion evaluations performed during this simulation.
    pub evaluations: u64,
}

/// A dose of one chemical in grams for the whole batch.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Addition {
    pub chemical: Chemical,
    pub grams: f64,
}

/// The best candidate found by an exhaustive run, plus run diagnostics.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub gallons: f64,
    pub liters: f64,
    /// Order in which the chemicals were added.
    pub order: Vec<Chemical>,
    /// Grams per chemical in addition order (zero doses included).
    pub additions: Vec<Addition>,
    pub initial: IonProfile,
    pub target: IonProfile,
    pub adjusted: IonProfile,
    pub total_deviation: f64,
    /// Number of (ordering, target point) pairs simulated.
    pub candidates: u64,
    /// Total elementary per-ion evaluations across all simulations.
    pub evaluations: u64,
}

impl Solution {
    /// Additions worth weighing out (rounded dose > 0).
    pub fn nonzero_additions(&self) -> impl Iterator<Item = &Addition> {
        self.additions.iter().filter(|a| a.grams != 0.0)
    }
}

/// Simulate adding the chemicals in `order`, each dosed for its first
/// deficient ion, against one target point.
///
/// The dose rule, per chemical: scan the chemical's yield entries in their
/// declared order; on the first ion whose target exceeds the current working
/// value, size the dose to close exactly that gap
/// (`grams = deficit / yield * volume_l`), apply the dose to every ion the
/// chemical yields, and stop scanning. A chemical whose ions are all already
/// at target gets a zero dose. Each chemical is added at most once.
///
/// The dose applied to the working profile is unrounded; the recorded figure
/// is rounded to 2 decimals for reporting.
pub fn evaluate_candidate(
    order: &[Chemical],
    target: &IonProfile,
    base: &IonProfile,
    volume_l: f64,
    desired_ratio: f64,
    ratio_weight: f64,
) -> Candidate {
    let mut working = base.clone();
    let mut additions_g = Vec::with_capacity(order.len());
    let mut evaluations = 0u64;

    for &chemical in order {
        let yields = chemical.yields();
        let mut grams = 0.0;

        for &(ion, yield_ppm) in yields {
            evaluations += 1;
            let deficit = target.get(ion) - working.get(ion);
            if deficit > 0.0 {
                grams = deficit / yield_ppm * volume_l;
                for &(affected, affected_yield) in yields {
                    *working.get_mut(affected) += grams * affected_yield / volume_l;
                }
                // One dose per chemical, sized for the first deficient ion.
                break;
            }
        }

        additions_g.push(round_to(grams, 2));
    }

    let mut deviation = 0.0;
    for ion in Ion::ALL {
        deviation += (working.get(ion) - target.get(ion)).abs();
    }
    let sulfate = working.get(Ion::Sulfate);
    deviation += if sulfate <= 0.0 {
        f64::INFINITY
    } else {
        (working.get(Ion::Chloride) / sulfate - desired_ratio).abs() * ratio_weight
    };

    Candidate {
        order: order.to_vec(),
        additions_g,
        adjusted: working,
        target: target.clone(),
        deviation,
        evaluations,
    }
}

/// All target points of the grid's cross-product, in canonical ion order
/// (calcium varies slowest, bicarbonate fastest).
pub fn target_points(config: &BrewConfig) -> Vec<IonProfile> {
    Ion::ALL
        .iter()
        .map(|&ion| config.targets.range(ion).values())
        .multi_cartesian_product()
        .map(|values| {
            IonProfile::from_values([
                values[0], values[1], values[2], values[3], values[4], values[5],
            ])
        })
        .collect()
}

/// Run the exhaustive search: every permutation of the chemical set against
/// every target point in the grid cross-product.
///
/// Enumeration order is deterministic (permutations in lexicographic order
/// over `Chemical::ALL`, target points in canonical grid order, permutations
/// outermost) and improvement is strict, so ties keep the first candidate
/// found and repeated runs on the same configuration are bit-identical.
///
/// # Errors
///
/// Returns [`ConfigError`] if the configuration fails validation; the search
/// itself has no failure modes.
pub fn solve(config: &BrewConfig) -> Result<Solution, ConfigError> {
    config.validate()?;

    let volume_l = config.liters();
    let targets = target_points(config);

    let mut best: Option<Candidate> = None;
    let mut candidates = 0u64;
    let mut evaluations = 0u64;

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
            candidates += 1;
            evaluations += candidate.evaluations;

            let improved = match &best {
                Some(current) => candidate.deviation < current.deviation,
                None => true,
            };
            if improved {
                best = Some(candidate);
            }
        }
    }

    // Validation guarantees a non-empty grid, so at least one candidate ran.
    let best = best.ok_or(ConfigError::EmptyTargetRange { ion: Ion::Calcium })?;

    let additions = best
        .order
        .iter()
        .zip(&best.additions_g)
        .map(|(&chemical, &grams)| Addition { chemical, grams })
        .collect();

    Ok(Solution {
        gallons: config.gallons,
        liters: volume_l,
        order: best.order,
        additions,
        initial: config.base.clone(),
        target: best.target,
        adjusted: best.adjusted,
        total_deviation: best.deviation,
        candidates,
        evaluations,
    })
}
