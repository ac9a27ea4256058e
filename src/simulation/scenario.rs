//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! `Scenario` bundle containing:
//! - the `ParticleSystem` with constants, step, merge settings and bounds
//! - the configured particles and fields (insertion order preserved)
//! - an optional seeded random population appended after them
//! - the number of ticks a host should run
//!
//! The core does not validate masses or bounds; this is the layer where
//! configuration mistakes are caught and reported as `SimError::Config`

use std::collections::HashSet;

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::{FieldConfig, ParticleConfig, RandomConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::engine::Bounds;
use crate::simulation::field::MagneticField;
use crate::simulation::states::Particle;
use crate::simulation::system::ParticleSystem;
use crate::simulation::vector::NVec2;

/// Ticks run when neither the scenario nor the caller says otherwise
pub const DEFAULT_STEPS: usize = 100;

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub system: ParticleSystem,
    pub steps: usize,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Particles: map `ParticleConfig` -> runtime `Particle`
        let particles = cfg
            .particles
            .iter()
            .enumerate()
            .map(|(i, pc)| particle_from_config(i, pc))
            .collect::<SimResult<Vec<_>>>()?;

        let e_cfg = cfg.engine;
        if let Some(dt) = e_cfg.dt {
            if !(dt > 0.0) {
                return Err(SimError::Config(format!("engine.dt must be > 0, got {dt}")));
            }
        }

        let mut system = ParticleSystem::new(particles, e_cfg.dt).with_merge_policy(e_cfg.merge_policy);

        if let Some(merge_distance) = e_cfg.merge_distance {
            if merge_distance < 0.0 {
                return Err(SimError::Config(format!(
                    "engine.merge_distance must be >= 0, got {merge_distance}"
                )));
            }
            system = system.with_merge_distance(merge_distance);
        }

        if let Some(b) = e_cfg.bounds {
            validate_bounds(&b)?;
            system.set_bounds(b.min_x, b.max_x, b.min_y, b.max_y);
        }

        // Constants: k takes precedence over permittivity
        let p_cfg = cfg.parameters;
        match (p_cfg.k, p_cfg.permittivity) {
            (Some(k), _) => system.constants_mut().set_k(k),
            (None, Some(e)) => system.constants_mut().set_permittivity(e),
            (None, None) => {}
        }

        for (i, fc) in cfg.fields.iter().enumerate() {
            system.add_field(field_from_config(i, fc)?);
        }

        if let Some(random) = &cfg.random {
            populate_random(&mut system, random)?;
        }

        info!(
            "scenario built: {} particles, {} fields, dt = {}, {:?}",
            system.particle_count(),
            system.fields().len(),
            system.dt(),
            system.merge_policy()
        );

        Ok(Self {
            system,
            steps: p_cfg.steps.unwrap_or(DEFAULT_STEPS),
        })
    }
}

fn particle_from_config(index: usize, pc: &ParticleConfig) -> SimResult<Particle> {
    if !(pc.m > 0.0) {
        return Err(SimError::Config(format!(
            "particles[{index}].m must be > 0, got {}",
            pc.m
        )));
    }

    let particle = Particle::new(pc.x[0], pc.x[1], pc.q, pc.m);
    Ok(match pc.v {
        Some([vx, vy]) => particle.with_velocity(NVec2::new(vx, vy)),
        None => particle,
    })
}

fn field_from_config(index: usize, fc: &FieldConfig) -> SimResult<MagneticField> {
    if let Some(d) = fc.dispersion {
        if !(d > 0.0) {
            return Err(SimError::Config(format!(
                "fields[{index}].dispersion must be > 0, got {d}"
            )));
        }
    }

    Ok(MagneticField::new(
        NVec2::new(fc.origin[0], fc.origin[1]),
        fc.intensity,
        fc.dispersion,
        fc.uniform,
    ))
}

fn validate_bounds(b: &Bounds) -> SimResult<()> {
    if !(b.min_x < b.max_x) || !(b.min_y < b.max_y) {
        return Err(SimError::Config(format!(
            "bounds need min < max on both axes, got x: [{}, {}], y: [{}, {}]",
            b.min_x, b.max_x, b.min_y, b.max_y
        )));
    }
    Ok(())
}

// =========================================================================================
// Random population
// =========================================================================================

/// Append a seeded random set of particles and fields to `system`
///
/// Particles sit on distinct integer grid cells (duplicate draws are
/// skipped, so fewer than the drawn count may be added), charges are drawn
/// from `(-max_charge, max_charge)` with mass `|q|`. Fields are uniform with
/// a random radius. The same seed always yields the same population
pub fn populate_random(system: &mut ParticleSystem, cfg: &RandomConfig) -> SimResult<()> {
    validate_random(cfg)?;

    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);

    let n_particles = draw_count(&mut rng, cfg.particles);
    let mut taken: HashSet<(i32, i32)> = HashSet::with_capacity(n_particles);
    let mut added = 0usize;

    for _ in 0..n_particles {
        let x = rng.gen_range(cfg.x_cells[0]..cfg.x_cells[1]);
        let y = rng.gen_range(cfg.y_cells[0]..cfg.y_cells[1]);
        let q = rng.gen_range(-cfg.max_charge..cfg.max_charge);

        if !taken.insert((x, y)) || q == 0.0 {
            continue;
        }

        system.add_particle(Particle::new(f64::from(x), f64::from(y), q, q.abs()));
        added += 1;
    }

    let n_fields = draw_count(&mut rng, cfg.fields);
    for _ in 0..n_fields {
        let x = rng.gen_range(cfg.x_cells[0]..cfg.x_cells[1]);
        let y = rng.gen_range(cfg.y_cells[0]..cfg.y_cells[1]);
        let intensity = rng.gen_range(-cfg.max_intensity..cfg.max_intensity);
        let dispersion = rng.gen_range(cfg.dispersion[0]..cfg.dispersion[1]);

        system.add_field(MagneticField::new(
            NVec2::new(f64::from(x), f64::from(y)),
            intensity,
            Some(dispersion),
            true,
        ));
    }

    info!(
        "random population (seed {}): {added} particles, {n_fields} fields",
        cfg.seed
    );
    Ok(())
}

fn draw_count(rng: &mut ChaCha8Rng, range: [usize; 2]) -> usize {
    if range[1] > range[0] {
        rng.gen_range(range[0]..range[1])
    } else {
        range[0]
    }
}

fn validate_random(cfg: &RandomConfig) -> SimResult<()> {
    let fail = |what: &str| Err(SimError::Config(format!("random.{what}")));

    if cfg.particles[1] < cfg.particles[0] {
        return fail("particles needs lo <= hi");
    }
    if cfg.fields[1] < cfg.fields[0] {
        return fail("fields needs lo <= hi");
    }
    if cfg.x_cells[0] >= cfg.x_cells[1] || cfg.y_cells[0] >= cfg.y_cells[1] {
        return fail("x_cells / y_cells need lo < hi");
    }
    if !(cfg.max_charge > 0.0) || !(cfg.max_intensity > 0.0) {
        return fail("max_charge and max_intensity must be > 0");
    }
    if !(cfg.dispersion[0] > 0.0) || !(cfg.dispersion[0] < cfg.dispersion[1]) {
        return fail("dispersion needs 0 < lo < hi");
    }
    Ok(())
}
