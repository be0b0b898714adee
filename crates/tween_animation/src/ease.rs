//! Easing between two values
//!
//! Progress is clamped to `[0, 1]`; the eased factor is passed to the blend
//! as-is so overshooting curves carry past the endpoints.

use crate::curve::Curve;
use crate::easing::interpolate;
use tween_core::Blend;

/// Eased factor for raw progress `t`
///
/// `t` is saturated to `[0, 1]` (NaN counts as 0) before the curve is applied.
#[inline]
pub fn ease_factor(curve: Curve, t: f32) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    interpolate(curve, t)
}

/// Ease from `a` to `b` along `curve` at progress `t`
pub fn ease<V: Blend>(a: V, b: V, curve: Curve, t: f32) -> V {
    a.blend_unclamped(b, ease_factor(curve, t))
}
