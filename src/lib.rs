pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::vector::{NVec2, Vector2Ext};
pub use simulation::states::{Charged, Particle};
pub use simulation::field::{MagneticField, DEFAULT_DISPERSION_RADIUS};
pub use simulation::params::PhysicsConstants;
pub use simulation::engine::{Bounds, Engine, MergePolicy, DEFAULT_MERGE_DISTANCE};
pub use simulation::forces::PhysicsEngine;
pub use simulation::system::ParticleSystem;
pub use simulation::scenario::{populate_random, Scenario};

pub use configuration::config::{EngineConfig, FieldConfig, ParametersConfig, ParticleConfig, RandomConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_system, bench_update};
