//! 2D vector helpers on top of `nalgebra::Vector2<f64>`
//!
//! Addition, subtraction and scaling are the nalgebra operators
//! (`a + b`, `a - b`, `a * k`). This module adds the operations whose
//! failure modes matter to the physics layer: division and normalization
//! report a zero divisor instead of silently producing `inf`/`NaN`

use nalgebra::Vector2;

use crate::error::{SimError, SimResult};

pub type NVec2 = Vector2<f64>;

/// Checked vector operations used by the force and field code
pub trait Vector2Ext: Sized {
    /// Euclidean length `sqrt(x^2 + y^2)`
    fn length(&self) -> f64;

    /// `self / k`, failing when `k` is exactly zero
    fn div_checked(&self, k: f64) -> SimResult<Self>;

    /// Unit vector along `self` (`self / |self|`), failing on a zero vector
    fn direction(&self) -> SimResult<Self>;

    /// Rotate by -90 degrees: `(x, y) -> (y, -x)`
    fn rotated_cw(&self) -> Self;
}

impl Vector2Ext for NVec2 {
    fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn div_checked(&self, k: f64) -> SimResult<Self> {
        if k == 0.0 {
            return Err(SimError::DivisionByZero);
        }
        Ok(NVec2::new(self.x / k, self.y / k))
    }

    fn direction(&self) -> SimResult<Self> {
        let length = self.length();
        if length == 0.0 {
            return Err(SimError::ZeroLength);
        }
        Ok(NVec2::new(self.x / length, self.y / length))
    }

    fn rotated_cw(&self) -> Self {
        NVec2::new(self.y, -self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_3_4_is_5() {
        assert_eq!(NVec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn direction_is_unit_length() {
        let d = NVec2::new(-2.0, 7.5).direction().unwrap();
        assert!((d.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_divisor_is_reported() {
        assert!(matches!(
            NVec2::new(1.0, 1.0).div_checked(0.0),
            Err(SimError::DivisionByZero)
        ));
        assert!(matches!(NVec2::zeros().direction(), Err(SimError::ZeroLength)));
    }

    #[test]
    fn rotation_is_perpendicular() {
        let v = NVec2::new(1.5, -2.0);
        let r = v.rotated_cw();
        assert_eq!(r, NVec2::new(-2.0, -1.5));
        assert_eq!(v.dot(&r), 0.0);
    }
}
