//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – step size, merge policy, merge distance, bounds
//! - [`ParametersConfig`] – physical constant overrides and run length
//! - [`ParticleConfig`]   – initial state for each particle
//! - [`FieldConfig`]      – magnetic field sources
//! - [`RandomConfig`]     – optional request to populate the system randomly
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! engine:
//!   dt: 0.016               # omitted -> default_dt of the constants
//!   merge_policy: "sum"     # or "sum_one_sided"
//!   merge_distance: 1.0e-6  # separations below this merge
//!   bounds:                 # omitted -> no culling
//!     min_x: -2.0
//!     max_x: 34.0
//!     min_y: -2.0
//!     max_y: 16.0
//!
//! parameters:
//!   k: 2.0                  # Coulomb constant, recomputes permittivity
//!   steps: 600              # ticks the runner advances
//!
//! particles:
//!   - x: [ 0.0, 0.0 ]
//!     q: 1.0
//!     m: 1.0
//!   - x: [ 0.0, 1.0 ]
//!     v: [ 0.5, 0.0 ]       # omitted -> at rest
//!     q: -1.0
//!     m: 1.0
//!
//! fields:
//!   - origin: [ 5.0, 5.0 ]
//!     intensity: 1.5
//!     dispersion: 4.0       # omitted -> 20
//!     uniform: false        # omitted -> true
//! ```
//!
//! The scenario builder maps this configuration onto a runtime
//! `ParticleSystem`.

use serde::Deserialize;

use crate::simulation::engine::{Bounds, MergePolicy};

/// Runtime engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub dt: Option<f64>, // default step size for `update`
    #[serde(default)]
    pub merge_policy: MergePolicy, // what touching particles become
    #[serde(default)]
    pub merge_distance: Option<f64>, // near-contact threshold
    #[serde(default)]
    pub bounds: Option<Bounds>, // culling rectangle
}

/// Physical constant overrides; `k` wins when both are given
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    #[serde(default)]
    pub k: Option<f64>, // Coulomb constant
    #[serde(default)]
    pub permittivity: Option<f64>, // vacuum permittivity
    #[serde(default)]
    pub steps: Option<usize>, // number of ticks the runner should advance
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: [f64; 2], // initial position
    #[serde(default)]
    pub v: Option<[f64; 2]>, // initial velocity, at rest when omitted
    pub q: f64, // charge
    pub m: f64, // mass, must be > 0
}

/// Configuration for one magnetic field source
#[derive(Deserialize, Debug, Clone)]
pub struct FieldConfig {
    pub origin: [f64; 2],
    pub intensity: f64,
    #[serde(default)]
    pub dispersion: Option<f64>, // radius of influence
    #[serde(default = "default_uniform")]
    pub uniform: bool, // constant inside the radius vs linear falloff
}

fn default_uniform() -> bool {
    true
}

/// Seeded random population, appended after the listed particles and fields
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RandomConfig {
    pub seed: u64,
    pub particles: [usize; 2], // particle count drawn from [lo, hi)
    pub fields: [usize; 2], // field count drawn from [lo, hi)
    pub x_cells: [i32; 2], // integer grid columns [lo, hi)
    pub y_cells: [i32; 2], // integer grid rows [lo, hi)
    pub max_charge: f64, // |q| < max_charge, mass = |q|
    pub max_intensity: f64, // |B| < max_intensity
    pub dispersion: [f64; 2], // field radius drawn from [lo, hi)
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            particles: [60, 120],
            fields: [0, 5],
            x_cells: [0, 32],
            y_cells: [2, 16],
            max_charge: 5.0,
            max_intensity: 5.0,
            dispersion: [1.0, 5.0],
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // step, merging, culling
    #[serde(default)]
    pub parameters: ParametersConfig, // constants and run length
    #[serde(default)]
    pub particles: Vec<ParticleConfig>, // initial particles in insertion order
    #[serde(default)]
    pub fields: Vec<FieldConfig>, // magnetic fields in insertion order
    #[serde(default)]
    pub random: Option<RandomConfig>, // extra random population
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_scenario() {
        let yaml = r#"
engine:
  dt: 0.5
  merge_policy: "sum_one_sided"
  bounds: { min_x: -1.0, max_x: 1.0, min_y: -2.0, max_y: 2.0 }
parameters:
  k: 1.0
  steps: 3
particles:
  - x: [0.0, 0.0]
    q: 1.0
    m: 1.0
  - x: [0.0, 1.0]
    v: [1.0, 0.0]
    q: -1.0
    m: 2.0
fields:
  - origin: [0.0, 0.0]
    intensity: 2.0
"#;
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(cfg.engine.dt, Some(0.5));
        assert_eq!(cfg.engine.merge_policy, MergePolicy::SumOneSided);
        assert_eq!(cfg.engine.bounds, Some(Bounds::new(-1.0, 1.0, -2.0, 2.0)));
        assert_eq!(cfg.parameters.k, Some(1.0));
        assert_eq!(cfg.parameters.steps, Some(3));
        assert_eq!(cfg.particles.len(), 2);
        assert_eq!(cfg.particles[1].v, Some([1.0, 0.0]));
        assert!(cfg.fields[0].uniform);
        assert_eq!(cfg.fields[0].dispersion, None);
        assert!(cfg.random.is_none());
    }

    #[test]
    fn empty_document_sections_default() {
        let cfg: ScenarioConfig = serde_yaml::from_str("random: { seed: 7 }").unwrap();

        assert_eq!(cfg.engine.merge_policy, MergePolicy::Sum);
        assert!(cfg.particles.is_empty());
        let random = cfg.random.unwrap();
        assert_eq!(random.seed, 7);
        assert_eq!(random.particles, [60, 120]);
    }
}
