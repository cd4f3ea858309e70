use thiserror::Error;

use crate::chemistry::{Chemical, Ion};

/// Configuration faults rejected at startup, before any search work.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("batch volume must be positive, got {gallons} gallons")]
    NonPositiveVolume { gallons: f64 },

    #[error("base profile has a negative {ion} concentration: {value} ppm")]
    NegativeBaseIon { ion: Ion, value: f64 },

    #[error("target range for {ion} has zero points")]
    EmptyTargetRange { ion: Ion },

    #[error("{chemical} has a non-positive yield for {ion}")]
    NonPositiveYield { chemical: Chemical, ion: Ion },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --config-json: {source}")]
    ParseConfigJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in config document: {source}")]
    ParseConfigDoc {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unexpected error: {0}")]
    Other(String),
}
