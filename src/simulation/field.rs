//! Localized magnetic field sources
//!
//! A field acts inside a disc of radius `dispersion_radius` around its
//! origin and is exactly zero on and beyond the rim

use crate::simulation::vector::{NVec2, Vector2Ext};

/// Radius used when a field is created without an explicit dispersion
pub const DEFAULT_DISPERSION_RADIUS: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MagneticField {
    origin: NVec2,
    intensity: f64,
    dispersion_radius: f64,
    uniform: bool, // true = constant inside the radius, false = linear falloff
}

impl MagneticField {
    pub fn new(origin: NVec2, intensity: f64, dispersion_radius: Option<f64>, uniform: bool) -> Self {
        Self {
            origin,
            intensity,
            dispersion_radius: dispersion_radius.unwrap_or(DEFAULT_DISPERSION_RADIUS),
            uniform,
        }
    }

    /// Uniform field with the default dispersion radius
    pub fn uniform(x: f64, y: f64, intensity: f64) -> Self {
        Self::new(NVec2::new(x, y), intensity, None, true)
    }

    pub fn origin(&self) -> NVec2 {
        self.origin
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn dispersion_radius(&self) -> f64 {
        self.dispersion_radius
    }

    pub fn is_uniform(&self) -> bool {
        self.uniform
    }

    /// Field intensity felt at `point`
    pub fn intensity_at(&self, point: &NVec2) -> f64 {
        let d = (self.origin - point).length();

        if d >= self.dispersion_radius {
            return 0.0;
        }

        if self.uniform {
            self.intensity
        } else {
            // linear falloff, reaching zero at the rim
            self.intensity * (self.dispersion_radius - d) / self.dispersion_radius
        }
    }
}
