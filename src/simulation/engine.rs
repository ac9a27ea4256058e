//! High-level runtime engine settings
//!
//! Selects the merge policy, the near-contact merge distance and the
//! optional culling rectangle used by a `ParticleSystem` tick

use serde::Deserialize;

use crate::simulation::states::Particle;

/// Separation below which two particles are considered touching
pub const DEFAULT_MERGE_DISTANCE: f64 = 1e-6;

/// How two touching particles are combined
/// `merge_policy: "sum"` or `merge_policy: "sum_one_sided"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    #[default]
    #[serde(rename = "sum")] // q = q1 + q2, no product when the sum is exactly zero
    Sum,

    #[serde(rename = "sum_one_sided")] // opposite signs never cancel: q = q1 - q2 when q1 * q2 < 0
    SumOneSided,
}

impl MergePolicy {
    /// Charge of the merge product, or `None` when the policy rejects the pair
    pub fn merged_charge(&self, q1: f64, q2: f64) -> Option<f64> {
        match self {
            MergePolicy::Sum => {
                let q = q1 + q2;
                (q != 0.0).then_some(q)
            }
            MergePolicy::SumOneSided => {
                if q1 * q2 < 0.0 {
                    Some(q1 - q2)
                } else {
                    Some(q1 + q2)
                }
            }
        }
    }

    /// Replacement particle for a touching pair
    ///
    /// Sits at `p1`'s position with the combined mass, at rest
    pub fn merge(&self, p1: &Particle, p2: &Particle) -> Option<Particle> {
        self.merged_charge(p1.charge, p2.charge)
            .map(|q| Particle::at(p1.position, q, p1.mass + p2.mass))
    }
}

/// Axis-aligned culling rectangle, exclusive on every edge
///
/// `min_x < max_x` and `min_y < max_y` are the caller's responsibility
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Strict containment: a point on an edge is outside
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.min_x < x && x < self.max_x && self.min_y < y && y < self.max_y
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub merge_policy: MergePolicy, // what touching particles become
    pub merge_distance: f64, // separations strictly below this merge, 0 disables merging
    pub bounds: Option<Bounds>, // None = no culling
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            merge_policy: MergePolicy::default(),
            merge_distance: DEFAULT_MERGE_DISTANCE,
            bounds: None,
        }
    }
}

impl Engine {
    /// A particle survives culling when no bounds are set or it is strictly inside them
    pub fn keeps(&self, particle: &Particle) -> bool {
        match &self.bounds {
            Some(b) => b.contains(particle.position.x, particle.position.y),
            None => true,
        }
    }
}
