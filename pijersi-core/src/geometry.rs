//! 2D vector algebra in drawing units (x to the right, y downwards)

use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A point or displacement on the drawing plane
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle` radians, measured counter-clockwise as seen on screen
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), -angle.sin())
    }

    /// Rotate counter-clockwise (on screen) by `angle` radians
    pub fn rotated(self, angle: f64) -> Self {
        // y points down, so a screen-ccw turn is a math-cw turn
        let (sin, cos) = (-angle).sin_cos();
        Self::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(self, other: Vec2) -> f64 {
        (self - other).norm()
    }

    /// Linear interpolation: `self` at t=0, `other` at t=1
    pub fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        self + (other - self) * t
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Vertices of a regular polygon centered on `center`
///
/// Vertex `k` sits at angle `start_angle + k * 2π / count`.
pub fn regular_polygon(center: Vec2, radius: f64, count: usize, start_angle: f64) -> Vec<Vec2> {
    let step = std::f64::consts::TAU / count as f64;
    (0..count)
        .map(|k| center + Vec2::from_angle(start_angle + k as f64 * step) * radius)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rotation_is_screen_counter_clockwise() {
        // A quarter turn of "right" points up on screen (negative y)
        let up = Vec2::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert!((up.x).abs() < EPS);
        assert!((up.y + 1.0).abs() < EPS);
        assert!((Vec2::from_angle(FRAC_PI_2) - up).norm() < EPS);
    }

    #[test]
    fn test_regular_polygon_radius() {
        let center = Vec2::new(3.0, -2.0);
        let vertices = regular_polygon(center, 5.0, 6, 0.5);
        assert_eq!(vertices.len(), 6);
        for v in vertices {
            assert!((v.distance_to(center) - 5.0).abs() < EPS);
        }
    }
}
