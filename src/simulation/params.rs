//! Physical constants for the simulation
//!
//! `PhysicsConstants` holds the particle reference values, the default
//! step size and the Coulomb constant `k`, which is tied to the vacuum
//! permittivity by `k = 1 / (4 pi eps)`: setting either recomputes the other

use std::f64::consts::PI;

/// Vacuum permittivity (F/m) used until a caller overrides `k` or `eps`
pub const DEFAULT_PERMITTIVITY: f64 = 8.85e-12;

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsConstants {
    pub pi: f64,
    pub proton_mass: f64, // kg
    pub neutron_mass: f64, // kg
    pub electron_mass: f64, // kg
    pub proton_charge: f64, // C
    pub electron_charge: f64, // C
    pub default_dt: f64, // step used when neither the call nor the system sets one
    coulomb_k: f64,
    permittivity: f64,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self {
            pi: PI,
            proton_mass: 1.6726e-27,
            neutron_mass: 1.6749e-27,
            electron_mass: 9.1094e-31,
            proton_charge: 1.602e-19,
            electron_charge: -1.602e-19,
            default_dt: 0.1,
            coulomb_k: 1.0 / (4.0 * PI * DEFAULT_PERMITTIVITY),
            permittivity: DEFAULT_PERMITTIVITY,
        }
    }
}

impl PhysicsConstants {
    pub fn k(&self) -> f64 {
        self.coulomb_k
    }

    pub fn permittivity(&self) -> f64 {
        self.permittivity
    }

    pub fn set_k(&mut self, k: f64) {
        self.coulomb_k = k;
        self.permittivity = 1.0 / (4.0 * self.pi * k);
    }

    pub fn set_permittivity(&mut self, permittivity: f64) {
        self.permittivity = permittivity;
        self.coulomb_k = 1.0 / (4.0 * self.pi * permittivity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_k_matches_permittivity() {
        let c = PhysicsConstants::default();
        assert!((c.k() * 4.0 * c.pi * c.permittivity() - 1.0).abs() < 1e-12);
        assert!((c.k() - 8.99e9).abs() / 8.99e9 < 1e-2);
    }

    #[test]
    fn setting_one_recomputes_the_other() {
        let mut c = PhysicsConstants::default();
        c.set_k(1.0);
        assert_eq!(c.k(), 1.0);
        assert!((c.permittivity() - 1.0 / (4.0 * PI)).abs() < 1e-15);

        c.set_permittivity(2.0);
        assert_eq!(c.permittivity(), 2.0);
        assert!((c.k() - 1.0 / (8.0 * PI)).abs() < 1e-15);
    }
}
