//! Chemistry module: the fixed ion/chemical tables and numeric helpers.
//!
//! This module provides:
//! - The six brewing-relevant ions and their canonical ordering
//! - The five brewing salts and their per-gram ion yields
//! - Unit conversion (US gallons to liters) and default run parameters
//! - Utility helpers for range discretization and rounding
//!
//! Units conventions:
//! - Ion concentrations are ppm (mg/L) throughout
//! - Ion yields are ppm contributed per gram of chemical per liter of water
//! - Chemical doses are grams for the whole batch volume
//!
//! Design notes:
//! - `Chemical::yields` returns a static slice whose order is significant:
//!   the solver sizes a dose for the first deficient ion in that order
//! - Every chemical contributes to exactly two ions
//!
//! # Safety
//! Pure numeric tables; no unsafe code or external FFI here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversion factor from US gallons to liters.
pub const GALLONS_TO_LITERS: f64 = 3.78541;

/// Default batch volume in US gallons.
pub const DEFAULT_GALLONS: f64 = 5.0;

/// Default desired chloride:sulfate ratio (1 = balanced).
pub const DEFAULT_CL_SO4_RATIO: f64 = 1.0;

/// Default weight applied to the chloride:sulfate ratio penalty.
/// Large relative to per-ion ppm distances, so ratio adherence dominates.
pub const DEFAULT_RATIO_WEIGHT: f64 = 100.0;

/// The dissolved ions tracked by the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ion {
    Calcium,
    Sulfate,
    Chloride,
    Sodium,
    Magnesium,
    Bicarbonate,
}

impl Ion {
    /// Canonical ordering, used for target-grid enumeration and table output.
    pub const ALL: [Ion; 6] = [
        Ion::Calcium,
        Ion::Sulfate,
        Ion::Chloride,
        Ion::Sodium,
        Ion::Magnesium,
        Ion::Bicarbonate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Ion::Calcium => "calcium",
            Ion::Sulfate => "sulfate",
            Ion::Chloride => "chloride",
            Ion::Sodium => "sodium",
            Ion::Magnesium => "magnesium",
            Ion::Bicarbonate => "bicarbonate",
        }
    }
}

impl fmt::Display for Ion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The brewing salts available to the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chemical {
    BakingSoda,
    Gypsum,
    CalciumChloride,
    EpsomSalt,
    Chalk,
}

impl Chemical {
    /// Canonical ordering; permutations are enumerated from this base order.
    pub const ALL: [Chemical; 5] = [
        Chemical::BakingSoda,
        Chemical::Gypsum,
        Chemical::CalciumChloride,
        Chemical::EpsomSalt,
        Chemical::Chalk,
    ];

    /// Ion yields in ppm per gram per liter. Slice order is the order the
    /// solver scans when looking for a deficient ion to size the dose.
    pub fn yields(self) -> &'static [(Ion, f64)] {
        match self {
            Chemical::BakingSoda => &[(Ion::Sodium, 273.0), (Ion::Bicarbonate, 191.0)],
            Chemical::Gypsum => &[(Ion::Calcium, 232.0), (Ion::Sulfate, 556.0)],
            Chemical::CalciumChloride => &[(Ion::Calcium, 272.0), (Ion::Chloride, 482.0)],
            Chemical::EpsomSalt => &[(Ion::Magnesium, 98.0), (Ion::Sulfate, 388.0)],
            Chemical::Chalk => &[(Ion::Calcium, 1056.0), (Ion::Bicarbonate, 1584.0)],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Chemical::BakingSoda => "baking_soda",
            Chemical::Gypsum => "gypsum",
            Chemical::CalciumChloride => "calcium_chloride",
            Chemical::EpsomSalt => "epsom_salt",
            Chemical::Chalk => "chalk",
        }
    }
}

impl fmt::Display for Chemical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evenly spaced values over a closed interval, endpoints inclusive.
///
/// Inputs:
/// - `lo`, `hi`: interval bounds (descending intervals are allowed).
/// - `points`: number of samples; `0` returns an empty vector, `1` returns `[lo]`.
///
/// Returns `points` values from `lo` to `hi` inclusive.
pub fn linspace(lo: f64, hi: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![lo],
        n => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n).map(|i| lo + step * i as f64).collect()
        }
    }
}

/// Round a floating-point value to a specified number of decimal digits.
pub fn round_to(x: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (x * p).round() / p
}
