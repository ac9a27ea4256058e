//! Force contributors for the charged-particle engine
//!
//! `PhysicsEngine` evaluates the pairwise Coulomb force and the
//! Lorentz-style push of a localized magnetic field. It owns the physical
//! constants and works on anything implementing [`Charged`]

use crate::error::{SimError, SimResult};
use crate::simulation::field::MagneticField;
use crate::simulation::params::PhysicsConstants;
use crate::simulation::states::Charged;
use crate::simulation::vector::{NVec2, Vector2Ext};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicsEngine {
    pub constants: PhysicsConstants,
}

impl PhysicsEngine {
    pub fn new(constants: PhysicsConstants) -> Self {
        Self { constants }
    }

    /// Electrostatic force exerted on `p1` by `p2`
    ///
    /// Opposite charges pull `p1` toward `p2`, like charges push it away.
    /// Zero separation is an error: touching pairs belong to the merge path
    pub fn attraction_force<P, Q>(&self, p1: &P, p2: &Q) -> SimResult<NVec2>
    where
        P: Charged + ?Sized,
        Q: Charged + ?Sized,
    {
        // dx points from p1 to p2
        let dx = p2.position() - p1.position();

        let r = dx.length();
        if r == 0.0 {
            let at = p1.position();
            return Err(SimError::CoincidentPositions { x: at.x, y: at.y });
        }

        // f = -k q1 q2 / r^2
        // negative product (+- / -+) -> positive f -> along +dx (attraction)
        let f = -self.constants.k() * p1.charge() * p2.charge() / (r * r);

        Ok(dx.direction()? * f)
    }

    /// Apply the pair force to `p1` and its opposite to `p2`
    pub fn apply_pair_interaction<P, Q>(&self, p1: &mut P, p2: &mut Q) -> SimResult<()>
    where
        P: Charged + ?Sized,
        Q: Charged + ?Sized,
    {
        let force = self.attraction_force(&*p1, &*p2)?;
        p1.apply_force(force)?;
        p2.apply_force(-force)
    }

    /// Push `p` sideways according to the field strength at its position
    ///
    /// F = v * (q * B) rotated by -90 degrees, so the force is always
    /// perpendicular to the velocity. Outside the field nothing is applied
    pub fn apply_magnetic_interaction<P>(&self, p: &mut P, field: &MagneticField) -> SimResult<()>
    where
        P: Charged + ?Sized,
    {
        let b = field.intensity_at(&p.position());
        if b == 0.0 {
            return Ok(());
        }

        let raw = p.velocity() * (p.charge() * b);
        p.apply_force(raw.rotated_cw())
    }

    /// Whether two particles are close enough to merge
    ///
    /// Strict comparison, so a `merge_distance` of zero never merges
    pub fn are_nearby<P, Q>(&self, p1: &P, p2: &Q, merge_distance: f64) -> bool
    where
        P: Charged + ?Sized,
        Q: Charged + ?Sized,
    {
        (p2.position() - p1.position()).length() < merge_distance
    }
}
