use std::ops::{Add, Mul, Sub};

use super::vector3d::Vector3D;

/// A point or direction in the orbital plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            Vector2D::new(self.x / mag, self.y / mag)
        }
    }

    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Linear blend from `self` (weight 0) to `other` (weight 1).
    pub fn lerp(&self, other: &Vector2D, weight: f64) -> Self {
        *self + (*other - *self) * weight
    }

    /// Lays the orbital plane flat in the scene: `(x, y)` becomes `(x, 0, -y)`.
    pub fn to_world(&self) -> Vector3D {
        Vector3D::new(self.x, 0.0, -self.y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Vector2D::new(-2.0, 4.0);
        let b = Vector2D::new(6.0, 0.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        let mid = a.lerp(&b, 0.5);
        assert_abs_diff_eq!(mid.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector_is_unchanged() {
        let zero = Vector2D::default();
        assert_eq!(zero.normalize(), zero);
        assert_abs_diff_eq!(
            Vector2D::new(3.0, 4.0).normalize().magnitude(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_to_world_flips_plane_y_into_negative_z() {
        let world = Vector2D::new(1.5, 2.0).to_world();
        assert_eq!(world, Vector3D::new(1.5, 0.0, -2.0));
    }
}
