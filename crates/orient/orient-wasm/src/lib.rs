//! wasm-bindgen bindings for orient-core.
//!
//! Quaternions cross the JS boundary as 4-element number arrays
//! `[w, x, y, z]`. Malformed input surfaces as a `JsError` instead of a
//! panic.

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use orient_core::Quat;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn parse_quat(v: JsValue, arg: &str) -> Result<Quat, JsError> {
    if jsvalue_is_undefined_or_null(&v) {
        return Err(JsError::new(&format!(
            "{arg}: expected [w, x, y, z], got null/undefined"
        )));
    }
    swb::from_value::<Quat>(v).map_err(|e| JsError::new(&format!("{arg}: {e}")))
}

fn quat_to_js(q: Quat) -> Result<JsValue, JsError> {
    swb::to_value(&q).map_err(|e| JsError::new(&format!("serialize error: {e}")))
}

/// 4D inner product of two quaternions given as `[w, x, y, z]` arrays.
#[wasm_bindgen]
pub fn dot(q1: JsValue, q2: JsValue) -> Result<f64, JsError> {
    console_error_panic_hook::set_once();
    let a = parse_quat(q1, "q1")?;
    let b = parse_quat(q2, "q2")?;
    Ok(orient_core::dot(a, b))
}

/// Normalizes a quaternion; a zero quaternion maps to the identity.
#[wasm_bindgen]
pub fn normalize(q: JsValue) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();
    let q = parse_quat(q, "q")?;
    quat_to_js(orient_core::normalize(q))
}

/// Normalized linear interpolation between two unit quaternions.
/// `t` is not clamped; out-of-range values extrapolate.
#[wasm_bindgen]
pub fn nlerp(q1: JsValue, q2: JsValue, t: f64) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();
    let a = parse_quat(q1, "q1")?;
    let b = parse_quat(q2, "q2")?;
    quat_to_js(orient_core::nlerp(a, b, t))
}

/// Spherical linear interpolation between two unit quaternions.
/// `t` is not clamped; out-of-range values extrapolate along the geodesic.
#[wasm_bindgen]
pub fn slerp(q1: JsValue, q2: JsValue, t: f64) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();
    let a = parse_quat(q1, "q1")?;
    let b = parse_quat(q2, "q2")?;
    quat_to_js(orient_core::slerp(a, b, t))
}
