//! The `Quat` value type.
//!
//! Stored as `(w, x, y, z)`: `w` is the scalar (real) part, `(x, y, z)` the
//! vector part. A unit quaternion (norm 1) represents a 3D orientation.
//! Serializes as the 4-element array `[w, x, y, z]`, the form the web
//! consumers exchange.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Quat {
    /// The scalar (real) part.
    pub w: f64,
    /// The x component of the vector part.
    pub x: f64,
    /// The y component of the vector part.
    pub y: f64,
    /// The z component of the vector part.
    pub z: f64,
}

impl Quat {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quat = Quat {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a quaternion from raw components. No unit-norm guarantee;
    /// pass the result through [`crate::normalize`] when a rotation is meant.
    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }
}

impl Default for Quat {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 4]> for Quat {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Self {
            w: a[0],
            x: a[1],
            y: a[2],
            z: a[3],
        }
    }
}

impl From<Quat> for [f64; 4] {
    #[inline]
    fn from(q: Quat) -> Self {
        [q.w, q.x, q.y, q.z]
    }
}

impl Neg for Quat {
    type Output = Self;
    /// Negates all components. `q` and `-q` represent the same rotation
    /// (the double cover), which interpolation exploits to pick the
    /// shorter arc.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            w: -self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Add<Quat> for Quat {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a rotation operation; it exists for blending math.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            w: self.w + rhs.w,
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Mul<f64> for Quat {
    type Output = Self;
    /// Scales all components by a scalar.
    #[inline]
    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            w: self.w * scalar,
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}
