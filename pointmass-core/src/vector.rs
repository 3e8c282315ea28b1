//! Two dimensional vector used for positions, velocities and forces.
//!
//! Operator overloads follow the usual physics-engine shorthand:
//! `a * b` between two vectors is the dot product and `a % b` is the scalar
//! (z component) of the 2D cross product. Everything else is componentwise.
//!
//! `normalize` and `angle` divide by the vector length without checking it,
//! so a zero vector yields NaN components. Use `try_normalize`/`try_angle`
//! where the input may be degenerate.

use crate::error::PhysicsError;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{
    Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign,
};

/// Thin wrapper over [`glam::Vec2`] that carries the engine's operator
/// meanings. Components are reachable as `v.x` / `v.y` through `Deref`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
#[repr(transparent)]
pub struct Vector2(Vec2);

impl Vector2 {
    pub const ZERO: Self = Self(Vec2::ZERO);

    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub fn as_vec2(&self) -> Vec2 {
        self.0
    }

    /// Reset both components to zero
    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }

    /// Same as unary minus
    pub fn inverse(&self) -> Self {
        -*self
    }

    pub fn magnitude(&self) -> f32 {
        self.0.length()
    }

    pub fn square_magnitude(&self) -> f32 {
        self.0.length_squared()
    }

    /// Unit vector pointing the same way. Does not modify `self`.
    ///
    /// A zero vector produces NaN components.
    pub fn normalize(&self) -> Self {
        Self(self.0 / self.0.length())
    }

    /// Like [`normalize`](Self::normalize) but refuses zero-length input
    pub fn try_normalize(&self) -> Result<Self, PhysicsError> {
        let mag = self.0.length();
        if mag == 0.0 {
            return Err(PhysicsError::ZeroLength);
        }
        Ok(Self(self.0 / mag))
    }

    /// `self += v * scale`
    pub fn add_scaled_vector(&mut self, v: Vector2, scale: f32) {
        self.0 += v.0 * scale;
    }

    pub fn component_product(&self, other: Vector2) -> Self {
        Self(self.0 * other.0)
    }

    pub fn component_product_update(&mut self, other: Vector2) {
        self.0 *= other.0;
    }

    /// Move toward `target` by `factor`, where 0 keeps `self` and 1 lands on `target`
    pub fn lerp(&mut self, target: Vector2, factor: f32) {
        self.0 = self.0.lerp(target.0, factor);
    }

    /// Euclidean distance between two points
    pub fn distance(a: Vector2, b: Vector2) -> f32 {
        a.0.distance(b.0)
    }

    /// Unsigned angle between two vectors, in degrees: `acos(a.b / (|a||b|))`.
    ///
    /// Converts with the exact 180/pi rather than the truncated 57.29 factor.
    /// NaN when either vector has zero length.
    pub fn angle(a: Vector2, b: Vector2) -> f32 {
        let cos = a.0.dot(b.0) / (a.0.length() * b.0.length());
        cos.acos().to_degrees()
    }

    /// Like [`angle`](Self::angle) but refuses zero-length input
    pub fn try_angle(a: Vector2, b: Vector2) -> Result<f32, PhysicsError> {
        let denom = a.0.length() * b.0.length();
        if denom == 0.0 {
            return Err(PhysicsError::ZeroLength);
        }
        // Rounding can push the cosine just past +-1
        let cos = (a.0.dot(b.0) / denom).clamp(-1.0, 1.0);
        Ok(cos.acos().to_degrees())
    }
}

impl Deref for Vector2 {
    type Target = Vec2;

    fn deref(&self) -> &Vec2 {
        &self.0
    }
}

impl DerefMut for Vector2 {
    fn deref_mut(&mut self) -> &mut Vec2 {
        &mut self.0
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.0 += rhs.0;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.0 -= rhs.0;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Self(-self.0)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Vector2 {
        Self(self.0 * rhs)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

/// Dot product
impl Mul<Vector2> for Vector2 {
    type Output = f32;

    fn mul(self, rhs: Vector2) -> f32 {
        self.0.dot(rhs.0)
    }
}

/// 2D cross product: positive when `rhs` is counter-clockwise from `self`
impl Rem<Vector2> for Vector2 {
    type Output = f32;

    fn rem(self, rhs: Vector2) -> f32 {
        self.0.perp_dot(rhs.0)
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f32) -> Vector2 {
        Self(self.0 / rhs)
    }
}

impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, rhs: f32) {
        self.0 /= rhs;
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        v.0
    }
}
