//! Error type shared by the simulation core and the scenario loader.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Division by zero while scaling a vector")]
    DivisionByZero,

    #[error("Cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("Invalid particle mass {mass}: force application requires a strictly positive mass")]
    InvalidMass { mass: f64 },

    #[error("Coincident particles at ({x}, {y}): electrostatic force is undefined at zero separation")]
    CoincidentPositions { x: f64, y: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type SimResult<T> = Result<T, SimError>;
