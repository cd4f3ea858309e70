pub mod adapters;
pub mod chemistry;
pub mod error;
pub mod models;
pub mod solver;

pub use crate::chemistry::{Chemical, GALLONS_TO_LITERS, Ion};
pub use crate::error::{AppError, ConfigError};
pub use crate::models::{BrewConfig, IonProfile, TargetGrid, TargetRange};
pub use crate::solver::search::{
    Addition, Candidate, Solution, evaluate_candidate, solve, target_points,
};
