use serde::{Deserialize, Serialize};

use crate::chemistry::{
    Chemical, DEFAULT_CL_SO4_RATIO, DEFAULT_GALLONS, DEFAULT_RATIO_WEIGHT, GALLONS_TO_LITERS, Ion,
    linspace,
};
use crate::error::ConfigError;

/// Concentrations in ppm for the six tracked ions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IonProfile {
    pub calcium: f64,
    pub sulfate: f64,
    pub chloride: f64,
    pub sodium: f64,
    pub magnesium: f64,
    pub bicarbonate: f64,
}

impl IonProfile {
    pub fn get(&self, ion: Ion) -> f64 {
        match ion {
            Ion::Calcium => self.calcium,
            Ion::Sulfate => self.sulfate,
            Ion::Chloride => self.chloride,
            Ion::Sodium => self.sodium,
            Ion::Magnesium => self.magnesium,
            Ion::Bicarbonate => self.bicarbonate,
        }
    }

    pub fn get_mut(&mut self, ion: Ion) -> &mut f64 {
        match ion {
            Ion::Calcium => &mut self.calcium,
            Ion::Sulfate => &mut self.sulfate,
            Ion::Chloride => &mut self.chloride,
            Ion::Sodium => &mut self.sodium,
            Ion::Magnesium => &mut self.magnesium,
            Ion::Bicarbonate => &mut self.bicarbonate,
        }
    }

    /// Values in the canonical `Ion::ALL` order.
    pub fn values(&self) -> [f64; 6] {
        [
            self.calcium,
            self.sulfate,
            self.chloride,
            self.sodium,
            self.magnesium,
            self.bicarbonate,
        ]
    }

    /// Build a profile from values given in canonical `Ion::ALL` order.
    pub fn from_values(values: [f64; 6]) -> Self {
        Self {
            calcium: values[0],
            sulfate: values[1],
            chloride: values[2],
            sodium: values[3],
            magnesium: values[4],
            bicarbonate: values[5],
        }
    }
}

impl Default for IonProfile {
    /// Typical soft base water (the compiled-in starting profile).
    fn default() -> Self {
        Self {
            calcium: 0.1,
            sulfate: 3.0,
            chloride: 30.0,
            sodium: 5.0,
            magnesium: 0.1,
            bicarbonate: 50.0,
        }
    }
}

/// A discretized closed interval of candidate target concentrations.
///
/// `values()` samples `points` concentrations from `lo` to `hi` inclusive.
/// More points mean finer targets and a proportionally longer search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    pub lo: f64,
    pub hi: f64,
    pub points: usize,
}

impl TargetRange {
    pub fn new(lo: f64, hi: f64, points: usize) -> Self {
        Self { lo, hi, points }
    }

    pub fn values(&self) -> Vec<f64> {
        linspace(self.lo, self.hi, self.points)
    }
}

/// Per-ion target ranges; the cross-product of all six defines the set of
/// target points the solver evaluates exhaustively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetGrid {
    pub calcium: TargetRange,
    pub sulfate: TargetRange,
    pub chloride: TargetRange,
    pub sodium: TargetRange,
    pub magnesium: TargetRange,
    pub bicarbonate: TargetRange,
}

impl TargetGrid {
    pub fn range(&self, ion: Ion) -> TargetRange {
        match ion {
            Ion::Calcium => self.calcium,
            Ion::Sulfate => self.sulfate,
            Ion::Chloride => self.chloride,
            Ion::Sodium => self.sodium,
            Ion::Magnesium => self.magnesium,
            Ion::Bicarbonate => self.bicarbonate,
        }
    }

    /// Number of target points in the cross-product.
    pub fn len(&self) -> usize {
        Ion::ALL.iter().map(|&ion| self.range(ion).points).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TargetGrid {
    /// Oktoberfest-style target water.
    fn default() -> Self {
        Self {
            calcium: TargetRange::new(50.0, 75.0, 2),
            sulfate: TargetRange::new(50.0, 80.0, 2),
            chloride: TargetRange::new(50.0, 100.0, 2),
            sodium: TargetRange::new(10.0, 20.0, 2),
            magnesium: TargetRange::new(5.0, 10.0, 2),
            bicarbonate: TargetRange::new(50.0, 150.0, 2),
        }
    }
}

/// Full configuration for one solver run.
///
/// Deserializes with per-field defaults, so a JSON document may override just
/// the parts it cares about (e.g. only `targets` and `gallons`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrewConfig {
    /// Ion profile of the untreated water.
    pub base: IonProfile,
    /// Target concentration grid per ion.
    pub targets: TargetGrid,
    /// Desired chloride:sulfate ratio.
    pub desired_ratio: f64,
    /// Weight of the ratio penalty in the deviation score.
    pub ratio_weight: f64,
    /// Batch volume in US gallons.
    pub gallons: f64,
}

impl Default for BrewConfig {
    fn default() -> Self {
        Self {
            base: IonProfile::default(),
            targets: TargetGrid::default(),
            desired_ratio: DEFAULT_CL_SO4_RATIO,
            ratio_weight: DEFAULT_RATIO_WEIGHT,
            gallons: DEFAULT_GALLONS,
        }
    }
}

impl BrewConfig {
    /// Batch volume in liters.
    pub fn liters(&self) -> f64 {
        self.gallons * GALLONS_TO_LITERS
    }

    /// Reject degenerate configuration before it can reach the search:
    /// non-positive volume, negative base concentrations, empty target
    /// ranges, and non-positive yield coefficients (the latter guards the
    /// compiled-in table against future edits).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallons <= 0.0 {
            return Err(ConfigError::NonPositiveVolume {
                gallons: self.gallons,
            });
        }
        for ion in Ion::ALL {
            let value = self.base.get(ion);
            if value < 0.0 {
                return Err(ConfigError::NegativeBaseIon { ion, value });
            }
            if self.targets.range(ion).points == 0 {
                return Err(ConfigError::EmptyTargetRange { ion });
            }
        }
        for chemical in Chemical::ALL {
            for &(ion, yield_ppm) in chemical.yields() {
                if yield_ppm <= 0.0 {
                    return Err(ConfigError::NonPositiveYield { chemical, ion });
                }
            }
        }
        Ok(())
    }
}
