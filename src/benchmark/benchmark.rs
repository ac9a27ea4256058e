use std::time::Instant;

use crate::error::SimResult;
use crate::simulation::field::MagneticField;
use crate::simulation::states::Particle;
use crate::simulation::system::ParticleSystem;

/// Deterministic system of `n` alternating charges spread over a 10x10 patch
/// with a couple of fields, no rand needed
pub fn bench_system(n: usize) -> ParticleSystem {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = (i_f * 0.37).sin() * 5.0 + (i_f * 0.011);
        let y = (i_f * 0.13).cos() * 5.0 + (i_f * 0.007);
        let q = if i % 2 == 0 { 1.0 } else { -1.0 };

        particles.push(Particle::new(x, y, q, 1.0));
    }

    let mut system = ParticleSystem::new(particles, Some(1.0e-3));
    system.constants_mut().set_k(1.0);
    system.add_field(MagneticField::uniform(0.0, 0.0, 0.5));
    system.add_field(MagneticField::uniform(3.0, -2.0, -0.5));
    system
}

/// Time `update` for growing particle counts and print one line per size
pub fn bench_update() -> SimResult<()> {
    // Different system sizes to test
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 3; // ticks per size

    for n in ns {
        let mut system = bench_system(n);

        // Warm up
        system.update(None)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            system.update(None)?;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:5}, update = {per_step:10.6} s/step, remaining = {:5}",
            system.particle_count()
        );
    }

    Ok(())
}
