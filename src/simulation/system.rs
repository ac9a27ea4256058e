//! The particle system and its per-tick update
//!
//! A tick runs four passes over the particles as they stood at tick start:
//! 1. pairwise Coulomb interaction over every `i < j` pair in insertion
//!    order, merging touching pairs instead of computing a force
//! 2. magnetic push from every field on every live particle
//! 3. Euler integration, then culling against the optional bounds
//! 4. rebuild: survivors (insertion order) followed by merge products
//!
//! Merged particles are only flagged during pass 1 and the collection is
//! never resized while it is being walked; the replacement vector is built
//! on the side and swapped in at the end

use std::fmt;

use log::{debug, trace};

use crate::error::SimResult;
use crate::simulation::engine::{Bounds, Engine, MergePolicy};
use crate::simulation::field::MagneticField;
use crate::simulation::forces::PhysicsEngine;
use crate::simulation::params::PhysicsConstants;
use crate::simulation::states::Particle;

#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>, // insertion ordered, this order breaks interaction ties
    fields: Vec<MagneticField>, // insertion ordered, read-only during a tick
    physics: PhysicsEngine, // force math + constants
    engine: Engine, // merge policy, merge distance, bounds
    dt: f64, // step used when `update` gets no override
    t: f64, // simulated time
}

impl ParticleSystem {
    /// System with the default merge policy and no bounds
    ///
    /// `dt = None` uses the constants' `default_dt`
    pub fn new(particles: Vec<Particle>, dt: Option<f64>) -> Self {
        let physics = PhysicsEngine::default();
        let dt = dt.unwrap_or(physics.constants.default_dt);

        Self {
            particles,
            fields: Vec::new(),
            physics,
            engine: Engine::default(),
            dt,
            t: 0.0,
        }
    }

    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.engine.merge_policy = policy;
        self
    }

    pub fn with_merge_distance(mut self, merge_distance: f64) -> Self {
        self.engine.merge_distance = merge_distance;
        self
    }

    pub fn with_constants(mut self, constants: PhysicsConstants) -> Self {
        self.physics.constants = constants;
        self
    }

    // ---------------------------------------------------------------------
    // Introspection
    // ---------------------------------------------------------------------

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Edit a particle between ticks
    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    pub fn fields(&self) -> &[MagneticField] {
        &self.fields
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn constants(&self) -> &PhysicsConstants {
        &self.physics.constants
    }

    pub fn constants_mut(&mut self) -> &mut PhysicsConstants {
        &mut self.physics.constants
    }

    pub fn physics(&self) -> &PhysicsEngine {
        &self.physics
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn set_dt(&mut self, dt: f64) {
        self.dt = dt;
    }

    /// Simulated time advanced by completed ticks
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn merge_policy(&self) -> MergePolicy {
        self.engine.merge_policy
    }

    pub fn set_merge_policy(&mut self, policy: MergePolicy) {
        self.engine.merge_policy = policy;
    }

    pub fn merge_distance(&self) -> f64 {
        self.engine.merge_distance
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.engine.bounds
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn add_field(&mut self, field: MagneticField) {
        self.fields.push(field);
    }

    /// Drop every particle and field, keeping dt, constants and settings
    pub fn clear_elements(&mut self) {
        self.particles.clear();
        self.fields.clear();
    }

    /// Enable culling; requires `min_x < max_x` and `min_y < max_y`
    pub fn set_bounds(&mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) {
        self.engine.bounds = Some(Bounds::new(min_x, max_x, min_y, max_y));
    }

    pub fn clear_bounds(&mut self) {
        self.engine.bounds = None;
    }

    // ---------------------------------------------------------------------
    // Tick
    // ---------------------------------------------------------------------

    /// Advance the system by one step of `dt` (or the system step)
    ///
    /// An arithmetic fault (non-positive mass, coincident pair with merging
    /// disabled) aborts the tick and leaves the system half-updated; clone
    /// the system beforehand if it has to be recovered
    pub fn update(&mut self, dt: Option<f64>) -> SimResult<()> {
        let dt = dt.unwrap_or(self.dt);
        let n = self.particles.len();

        let mut merged: Vec<Particle> = Vec::new();
        let mut rejected = 0usize;

        // Pairwise pass over each unordered pair (i, j) with i < j
        for i in 0..n {
            for j in (i + 1)..n {
                let (p1, p2) = pair_mut(&mut self.particles, i, j);

                // either one already merged this tick
                if !p1.alive || !p2.alive {
                    continue;
                }

                if self.physics.are_nearby(&*p1, &*p2, self.engine.merge_distance) {
                    p1.alive = false;
                    p2.alive = false;

                    match self.engine.merge_policy.merge(p1, p2) {
                        Some(product) => {
                            trace!(
                                "merge #{i} + #{j} at ({}, {}) -> q = {}, m = {}",
                                product.position.x, product.position.y, product.charge, product.mass
                            );
                            merged.push(product);
                        }
                        None => {
                            trace!("merge #{i} + #{j} rejected by {:?}", self.engine.merge_policy);
                            rejected += 1;
                        }
                    }
                    continue;
                }

                self.physics.apply_pair_interaction(p1, p2)?;
            }
        }

        // Field pass: fields are additive, so the field order does not change the sum
        for particle in self.particles.iter_mut().filter(|p| p.alive) {
            for field in &self.fields {
                self.physics.apply_magnetic_interaction(particle, field)?;
            }
        }

        // Integration + culling, walked back to front
        let mut survivors = Vec::with_capacity(n + merged.len());
        let mut culled = 0usize;
        for mut particle in self.particles.drain(..).rev() {
            if !particle.alive {
                continue;
            }

            particle.integrate(dt);

            if self.engine.keeps(&particle) {
                survivors.push(particle);
            } else {
                culled += 1;
            }
        }
        // restore insertion order, then append this tick's merge products
        survivors.reverse();

        debug!(
            "tick t={:.6} dt={dt}: {} merged, {rejected} rejected merges, {culled} culled, {} survivors",
            self.t,
            merged.len(),
            survivors.len()
        );

        survivors.extend(merged);
        self.particles = survivors;
        self.t += dt;

        Ok(())
    }
}

/// Two distinct mutable elements of a slice, `i < j`
fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert!(i < j);
    let (head, tail) = particles.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

impl fmt::Display for ParticleSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System : {} particles.", self.particles.len())?;
        for particle in &self.particles {
            writeln!(f, "{particle}")?;
        }
        Ok(())
    }
}
