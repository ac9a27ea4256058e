//! Property-based tests for the force, field and tick invariants.

use chargesim::{
    MagneticField, NVec2, Particle, ParticleSystem, PhysicsConstants, PhysicsEngine, Vector2Ext,
};
use proptest::prelude::*;

fn unit_engine() -> PhysicsEngine {
    let mut constants = PhysicsConstants::default();
    constants.set_k(1.0);
    PhysicsEngine::new(constants)
}

// ── Coulomb pair ─────────────────────────────────────────────────────

proptest! {
    /// Pair forces are equal and opposite.
    #[test]
    fn pair_forces_cancel(
        x1 in -50.0f64..50.0, y1 in -50.0f64..50.0,
        dx in 0.1f64..10.0, dy in -10.0f64..10.0,
        q1 in -5.0f64..5.0, q2 in -5.0f64..5.0,
        m1 in 0.1f64..10.0, m2 in 0.1f64..10.0,
    ) {
        let engine = unit_engine();
        let mut p1 = Particle::new(x1, y1, q1, m1);
        let mut p2 = Particle::new(x1 + dx, y1 + dy, q2, m2);

        engine.apply_pair_interaction(&mut p1, &mut p2).unwrap();

        let f1 = p1.acceleration * m1;
        let f2 = p2.acceleration * m2;
        let scale = f1.norm().max(1.0);
        prop_assert!((f1 + f2).norm() / scale < 1e-9);
    }

    /// The force on p1 lies along the separation, toward p2 iff q1 q2 < 0.
    #[test]
    fn pair_force_sign_follows_charge_product(
        dx in 0.1f64..10.0, dy in -10.0f64..10.0,
        q1 in prop_oneof![-5.0f64..-0.1, 0.1f64..5.0],
        q2 in prop_oneof![-5.0f64..-0.1, 0.1f64..5.0],
    ) {
        let engine = unit_engine();
        let p1 = Particle::new(0.0, 0.0, q1, 1.0);
        let p2 = Particle::new(dx, dy, q2, 1.0);

        let f = engine.attraction_force(&p1, &p2).unwrap();
        let toward = f.dot(&NVec2::new(dx, dy));

        if q1 * q2 < 0.0 {
            prop_assert!(toward > 0.0);
        } else {
            prop_assert!(toward < 0.0);
        }
    }
}

// ── Magnetic fields ──────────────────────────────────────────────────

proptest! {
    /// Nothing outside the dispersion radius, never more than the peak inside.
    #[test]
    fn field_bounded_by_radius(
        px in -30.0f64..30.0, py in -30.0f64..30.0,
        intensity in -5.0f64..5.0,
        radius in 0.5f64..20.0,
        uniform in any::<bool>(),
    ) {
        let field = MagneticField::new(NVec2::zeros(), intensity, Some(radius), uniform);
        let point = NVec2::new(px, py);
        let b = field.intensity_at(&point);

        if point.length() >= radius {
            prop_assert_eq!(b, 0.0);
        } else if uniform {
            prop_assert_eq!(b, intensity);
        } else {
            prop_assert!(b.abs() <= intensity.abs());
        }
    }

    /// Applying two fields in either order gives the same acceleration.
    #[test]
    fn field_order_invariance(
        ox in -3.0f64..3.0, oy in -3.0f64..3.0,
        b1 in -5.0f64..5.0, b2 in -5.0f64..5.0,
        vx in -2.0f64..2.0, vy in -2.0f64..2.0,
        q in -5.0f64..5.0,
    ) {
        let engine = unit_engine();
        let f1 = MagneticField::new(NVec2::zeros(), b1, Some(5.0), false);
        let f2 = MagneticField::new(NVec2::new(ox, oy), b2, Some(4.0), true);
        let base = Particle::new(0.5, -0.5, q, 2.0).with_velocity(NVec2::new(vx, vy));

        let mut a = base.clone();
        engine.apply_magnetic_interaction(&mut a, &f1).unwrap();
        engine.apply_magnetic_interaction(&mut a, &f2).unwrap();

        let mut b = base;
        engine.apply_magnetic_interaction(&mut b, &f2).unwrap();
        engine.apply_magnetic_interaction(&mut b, &f1).unwrap();

        prop_assert!((a.acceleration - b.acceleration).norm() < 1e-9);
    }
}

// ── Tick ─────────────────────────────────────────────────────────────

proptest! {
    /// Without merges or bounds, a tick keeps every particle in order and
    /// conserves momentum.
    #[test]
    fn tick_keeps_count_and_momentum(
        charges in prop::collection::vec(-3.0f64..3.0, 2..12),
    ) {
        let particles: Vec<Particle> = charges
            .iter()
            .enumerate()
            .map(|(i, &q)| Particle::new(i as f64, (i as f64 * 0.7).sin(), q, 1.0 + i as f64 * 0.1))
            .collect();
        let mut system = ParticleSystem::new(particles.clone(), Some(1.0e-3));
        system.constants_mut().set_k(1.0);

        system.update(None).unwrap();

        prop_assert_eq!(system.particle_count(), particles.len());
        let momentum = system
            .particles()
            .iter()
            .fold(NVec2::zeros(), |acc, p| acc + p.velocity * p.mass);
        prop_assert!(momentum.norm() < 1e-9);
        for (before, after) in particles.iter().zip(system.particles()) {
            prop_assert_eq!(before.charge, after.charge);
        }
    }
}
