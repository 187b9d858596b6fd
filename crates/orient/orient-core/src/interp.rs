//! Interpolation between orientation quaternions:
//! - `nlerp` (component-wise linear blend, renormalized)
//! - `slerp` (geodesic on the 4D unit hypersphere, constant angular velocity)
//!
//! Both apply shortest-arc correction: `q` and `-q` are the same rotation,
//! so when the endpoints' dot product is negative the second endpoint is
//! negated before blending, which keeps the path on the shorter arc.

use crate::quat::Quat;

/// Above this dot product the endpoints are close enough that the spherical
/// formula divides by a near-zero `sin(theta_0)`; `slerp` falls back to
/// `nlerp` instead.
pub const DOT_THRESHOLD: f64 = 0.9995;

/// 4D Euclidean inner product. Symmetric; defined for any inputs, not just
/// unit quaternions.
#[inline]
pub fn dot(a: Quat, b: Quat) -> f64 {
    a.w * b.w + a.x * b.x + a.y * b.y + a.z * b.z
}

/// Scales `q` to unit norm. A zero quaternion has no direction, so it maps
/// to the identity rather than dividing by zero.
pub fn normalize(q: Quat) -> Quat {
    let len = dot(q, q).sqrt();
    if len == 0.0 {
        return Quat::IDENTITY;
    }
    Quat::new(q.w / len, q.x / len, q.y / len, q.z / len)
}

/// Normalized linear interpolation between unit quaternions `a` and `b`.
///
/// Cheaper than [`slerp`] but not constant angular velocity. `t` is not
/// clamped; out-of-range values extrapolate linearly before the final
/// renormalization. Output is always unit norm.
pub fn nlerp(a: Quat, b: Quat, t: f64) -> Quat {
    let d = dot(a, b);
    let target = if d < 0.0 { -b } else { b };
    normalize(a * (1.0 - t) + target * t)
}

/// Spherical linear interpolation between unit quaternions `a` and `b`.
///
/// Follows the geodesic at constant angular velocity. Near-parallel
/// endpoints (`dot > DOT_THRESHOLD`) delegate to [`nlerp`], where the
/// linear blend is indistinguishable from the arc and numerically stable.
/// `t` is not clamped. Output is unit norm by construction, with no
/// trailing renormalization.
pub fn slerp(a: Quat, b: Quat, t: f64) -> Quat {
    let mut d = dot(a, b);
    let mut target = b;

    if d < 0.0 {
        target = -target;
        d = -d;
    }

    if d > DOT_THRESHOLD {
        return nlerp(a, target, t);
    }

    let theta_0 = d.acos();
    let sin_theta_0 = theta_0.sin();
    let theta = theta_0 * t;
    let sin_theta = theta.sin();

    let s0 = theta.cos() - d * sin_theta / sin_theta_0;
    let s1 = sin_theta / sin_theta_0;

    a * s0 + target * s1
}
