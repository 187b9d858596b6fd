//! orient-core: quaternion orientation interpolation (engine-agnostic).
//!
//! Provides a plain `Quat` value type and the interpolation functions a
//! caller (an animation timeline, a camera controller) needs to blend
//! between two 3D orientations: `dot`, `normalize`, `nlerp`, `slerp`.
//! All math is f64, stateless, and side-effect free.

pub mod interp;
pub mod quat;

// Re-exports for consumers (adapters)
pub use interp::{dot, nlerp, normalize, slerp, DOT_THRESHOLD};
pub use quat::Quat;
