//! Easing functions
//!
//! Closed-form Penner curves (the easings.net set) mapping progress `t` in
//! `[0, 1]` to an eased factor. Back and elastic curves overshoot `[0, 1]`.

use crate::curve::Curve;
use std::f32::consts::{PI, TAU};

/// Expo and elastic snap to exactly 0 at or below this progress, keeping
/// `2^(10t - 10)` and friends away from the exact boundary.
const LOWER_GUARD: f32 = 0.001;
/// Expo and elastic snap to exactly 1 at or above this progress.
const UPPER_GUARD: f32 = 0.999;

// Back overshoot
const C1: f32 = 1.70158;
const C2: f32 = C1 * 1.525;
const C3: f32 = C1 + 1.0;

// Elastic periods
const C4: f32 = TAU / 3.0;
const C5: f32 = TAU / 4.5;

// Bounce segments
const N1: f32 = 7.5625;
const D1: f32 = 2.75;

/// Apply `curve` to a progress value in `[0, 1]`
///
/// Input is assumed clamped; use [`crate::ease`] for arbitrary progress.
/// Outside `[0, 1]` behavior is curve-specific: polynomials extrapolate, circ
/// produces NaN, and the expo/elastic guards pin whichever end they cover.
pub fn interpolate(curve: Curve, t: f32) -> f32 {
    match curve {
        Curve::EaseInSine => 1.0 - (t * PI / 2.0).cos(),
        Curve::EaseOutSine => (t * PI / 2.0).sin(),
        Curve::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,

        Curve::EaseInQuad => t * t,
        Curve::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
        Curve::EaseInOutQuad => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }

        Curve::EaseInCubic => t * t * t,
        Curve::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Curve::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }

        Curve::EaseInQuart => t * t * t * t,
        Curve::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        Curve::EaseInOutQuart => {
            if t < 0.5 {
                8.0 * t * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
            }
        }

        Curve::EaseInQuint => t * t * t * t * t,
        Curve::EaseOutQuint => 1.0 - (1.0 - t).powi(5),
        Curve::EaseInOutQuint => {
            if t < 0.5 {
                16.0 * t * t * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
            }
        }

        Curve::EaseInExpo => {
            if t <= LOWER_GUARD {
                0.0
            } else {
                2f32.powf(10.0 * t - 10.0)
            }
        }
        Curve::EaseOutExpo => {
            if t >= UPPER_GUARD {
                1.0
            } else {
                1.0 - 2f32.powf(-10.0 * t)
            }
        }
        Curve::EaseInOutExpo => {
            if t <= LOWER_GUARD {
                0.0
            } else if t >= UPPER_GUARD {
                1.0
            } else if t < 0.5 {
                2f32.powf(20.0 * t - 10.0) / 2.0
            } else {
                (2.0 - 2f32.powf(-20.0 * t + 10.0)) / 2.0
            }
        }

        Curve::EaseInCirc => 1.0 - (1.0 - t.powi(2)).sqrt(),
        Curve::EaseOutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
        Curve::EaseInOutCirc => {
            if t < 0.5 {
                (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
            } else {
                ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
            }
        }

        Curve::EaseInBack => C3 * t * t * t - C1 * t * t,
        Curve::EaseOutBack => 1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2),
        Curve::EaseInOutBack => {
            if t < 0.5 {
                ((2.0 * t).powi(2) * ((C2 + 1.0) * 2.0 * t - C2)) / 2.0
            } else {
                ((2.0 * t - 2.0).powi(2) * ((C2 + 1.0) * (t * 2.0 - 2.0) + C2) + 2.0) / 2.0
            }
        }

        Curve::EaseInElastic => {
            if t <= LOWER_GUARD {
                0.0
            } else if t >= UPPER_GUARD {
                1.0
            } else {
                -(2f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * C4).sin()
            }
        }
        Curve::EaseOutElastic => {
            if t <= LOWER_GUARD {
                0.0
            } else if t >= UPPER_GUARD {
                1.0
            } else {
                2f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
            }
        }
        Curve::EaseInOutElastic => {
            if t <= LOWER_GUARD {
                0.0
            } else if t >= UPPER_GUARD {
                1.0
            } else if t < 0.5 {
                -(2f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * C5).sin()) / 2.0
            } else {
                (2f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * C5).sin()) / 2.0 + 1.0
            }
        }

        // In and in-out bounce are reflections of the out curve
        Curve::EaseInBounce => 1.0 - bounce_out(1.0 - t),
        Curve::EaseOutBounce => bounce_out(t),
        Curve::EaseInOutBounce => {
            if t < 0.5 {
                (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
            } else {
                (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
            }
        }
    }
}

/// Four parabolic arcs, each landing a little higher than the last
fn bounce_out(t: f32) -> f32 {
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}
