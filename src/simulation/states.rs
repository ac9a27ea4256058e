//! Core state types for the charged-particle simulation.
//!
//! Defines the 2D `Particle` and the `Charged` capability trait through
//! which the physics engine reads and pushes on particles

use std::fmt;

use crate::error::{SimError, SimResult};
use crate::simulation::vector::{NVec2, Vector2Ext};

/// What the physics engine needs from a point charge
///
/// The engine only reads kinematic/electric properties and pushes forces
/// back; it never touches the storage behind them
pub trait Charged {
    fn position(&self) -> NVec2;
    fn velocity(&self) -> NVec2;
    fn charge(&self) -> f64;
    fn mass(&self) -> f64;
    fn apply_force(&mut self, force: NVec2) -> SimResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: NVec2, // position
    pub velocity: NVec2, // velocity
    pub acceleration: NVec2, // acceleration accumulated during the current tick
    pub charge: f64, // charge
    pub mass: f64, // mass, must be > 0 once forces are applied
    pub(crate) alive: bool, // false once merged away during a tick
}

impl Particle {
    /// Particle at rest at `(x, y)`
    pub fn new(x: f64, y: f64, charge: f64, mass: f64) -> Self {
        Self::at(NVec2::new(x, y), charge, mass)
    }

    pub fn at(position: NVec2, charge: f64, mass: f64) -> Self {
        Self {
            position,
            velocity: NVec2::zeros(),
            acceleration: NVec2::zeros(),
            charge,
            mass,
            alive: true,
        }
    }

    pub fn with_velocity(mut self, velocity: NVec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Accumulate `force / mass` into the acceleration
    ///
    /// Fails without mutating when the mass is zero, negative or NaN
    pub fn apply_force(&mut self, force: NVec2) -> SimResult<()> {
        if !(self.mass > 0.0) {
            return Err(SimError::InvalidMass { mass: self.mass });
        }
        self.acceleration += force.div_checked(self.mass)?;
        Ok(())
    }

    /// Explicit Euler step, then reset the acceleration for the next tick
    pub fn integrate(&mut self, dt: f64) {
        // v_n+1 = v_n + a_n * dt
        self.velocity += self.acceleration * dt;
        // x_n+1 = x_n + v_n+1 * dt
        self.position += self.velocity * dt;

        self.acceleration = NVec2::zeros();
    }
}

impl Charged for Particle {
    fn position(&self) -> NVec2 {
        self.position
    }

    fn velocity(&self) -> NVec2 {
        self.velocity
    }

    fn charge(&self) -> f64 {
        self.charge
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn apply_force(&mut self, force: NVec2) -> SimResult<()> {
        Particle::apply_force(self, force)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle ({}, {}) q: {}",
            self.position.x, self.position.y, self.charge
        )
    }
}
