//! Unclamped blending
//!
//! Easing curves such as back and elastic return factors outside `[0, 1]`.
//! Blending must extrapolate with those factors rather than saturate,
//! otherwise the overshoot never reaches the animated value.

use crate::math::{Quat, Vec3};

/// Above this cosine the two rotations are treated as parallel and blended
/// linearly, since `sin(theta)` is too small to divide by.
const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// A value that can be interpolated with a factor outside `[0, 1]`
pub trait Blend: Copy {
    /// Blend from `self` (factor 0) to `other` (factor 1)
    fn blend_unclamped(self, other: Self, factor: f32) -> Self;
}

impl Blend for f32 {
    #[inline]
    fn blend_unclamped(self, other: f32, factor: f32) -> f32 {
        self + (other - self) * factor
    }
}

impl Blend for Vec3 {
    #[inline]
    fn blend_unclamped(self, other: Vec3, factor: f32) -> Vec3 {
        Vec3::new(
            self.x.blend_unclamped(other.x, factor),
            self.y.blend_unclamped(other.y, factor),
            self.z.blend_unclamped(other.z, factor),
        )
    }
}

/// Spherical blend along the shortest arc.
///
/// `other` is negated when it lies in the opposite hemisphere, so an antipodal
/// pair (the same rotation) yields `self` for every factor.
impl Blend for Quat {
    fn blend_unclamped(self, other: Quat, factor: f32) -> Quat {
        let mut cos_theta = self.dot(other);
        let other = if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            -other
        } else {
            other
        };

        if cos_theta > SLERP_LINEAR_THRESHOLD {
            tracing::trace!(cos_theta, "rotations nearly parallel, blending linearly");
            return self.nlerp_unclamped(other, factor);
        }

        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let wa = ((1.0 - factor) * theta).sin() / sin_theta;
        let wb = (factor * theta).sin() / sin_theta;

        (self * wa + other * wb).normalize()
    }
}
