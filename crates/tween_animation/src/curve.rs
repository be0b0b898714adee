//! The easing curve catalog
//!
//! Curves form a closed set of ten families, each in three phases. The
//! declaration order is family-major (`In`, `Out`, `InOut` within a family) and
//! doubles as each curve's stable integer id.

use crate::error::{CurveError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named easing curve
///
/// Has no `Default`; an unset curve is a configuration error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Curve {
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

/// The shape of a curve, independent of its phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CurveFamily {
    Sine,
    Quad,
    Cubic,
    Quart,
    Quint,
    Expo,
    Circ,
    Back,
    Elastic,
    Bounce,
}

/// Where the curve's acceleration happens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CurveMode {
    /// Slow start
    In,
    /// Slow finish
    Out,
    /// Slow start and finish
    InOut,
}

impl CurveFamily {
    pub const ALL: [CurveFamily; 10] = [
        CurveFamily::Sine,
        CurveFamily::Quad,
        CurveFamily::Cubic,
        CurveFamily::Quart,
        CurveFamily::Quint,
        CurveFamily::Expo,
        CurveFamily::Circ,
        CurveFamily::Back,
        CurveFamily::Elastic,
        CurveFamily::Bounce,
    ];

    /// Whether curves of this family leave `[0, 1]` on purpose
    pub fn overshoots(self) -> bool {
        matches!(self, CurveFamily::Back | CurveFamily::Elastic)
    }
}

impl CurveMode {
    pub const ALL: [CurveMode; 3] = [CurveMode::In, CurveMode::Out, CurveMode::InOut];
}

const NAMES: [&str; Curve::COUNT] = [
    "ease_in_sine",
    "ease_out_sine",
    "ease_in_out_sine",
    "ease_in_quad",
    "ease_out_quad",
    "ease_in_out_quad",
    "ease_in_cubic",
    "ease_out_cubic",
    "ease_in_out_cubic",
    "ease_in_quart",
    "ease_out_quart",
    "ease_in_out_quart",
    "ease_in_quint",
    "ease_out_quint",
    "ease_in_out_quint",
    "ease_in_expo",
    "ease_out_expo",
    "ease_in_out_expo",
    "ease_in_circ",
    "ease_out_circ",
    "ease_in_out_circ",
    "ease_in_back",
    "ease_out_back",
    "ease_in_out_back",
    "ease_in_elastic",
    "ease_out_elastic",
    "ease_in_out_elastic",
    "ease_in_bounce",
    "ease_out_bounce",
    "ease_in_out_bounce",
];

impl Curve {
    pub const COUNT: usize = 30;

    /// Every curve, in id order
    pub const ALL: [Curve; Curve::COUNT] = [
        Curve::EaseInSine,
        Curve::EaseOutSine,
        Curve::EaseInOutSine,
        Curve::EaseInQuad,
        Curve::EaseOutQuad,
        Curve::EaseInOutQuad,
        Curve::EaseInCubic,
        Curve::EaseOutCubic,
        Curve::EaseInOutCubic,
        Curve::EaseInQuart,
        Curve::EaseOutQuart,
        Curve::EaseInOutQuart,
        Curve::EaseInQuint,
        Curve::EaseOutQuint,
        Curve::EaseInOutQuint,
        Curve::EaseInExpo,
        Curve::EaseOutExpo,
        Curve::EaseInOutExpo,
        Curve::EaseInCirc,
        Curve::EaseOutCirc,
        Curve::EaseInOutCirc,
        Curve::EaseInBack,
        Curve::EaseOutBack,
        Curve::EaseInOutBack,
        Curve::EaseInElastic,
        Curve::EaseOutElastic,
        Curve::EaseInOutElastic,
        Curve::EaseInBounce,
        Curve::EaseOutBounce,
        Curve::EaseInOutBounce,
    ];

    /// The curve of `family` in phase `mode`
    pub const fn new(family: CurveFamily, mode: CurveMode) -> Curve {
        Curve::ALL[family as usize * 3 + mode as usize]
    }

    pub const fn family(self) -> CurveFamily {
        CurveFamily::ALL[self as usize / 3]
    }

    pub const fn mode(self) -> CurveMode {
        CurveMode::ALL[self as usize % 3]
    }

    /// Stable integer id (declaration index)
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look a curve up by its integer id
    pub fn from_id(id: u8) -> Result<Curve> {
        match Curve::ALL.get(id as usize) {
            Some(curve) => Ok(*curve),
            None => {
                tracing::debug!(id, "rejecting unknown easing curve id");
                Err(CurveError::InvalidCurveId(id))
            }
        }
    }

    /// Canonical snake_case name, e.g. `"ease_in_out_quad"`
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Evaluate the curve at `t`; see [`crate::easing::interpolate`]
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        crate::easing::interpolate(self, t)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Curve {
    type Error = CurveError;

    fn try_from(id: u8) -> Result<Self> {
        Curve::from_id(id)
    }
}

/// Parses canonical names case-insensitively. `-` and `_` are interchangeable
/// and the `ease_` prefix is optional, so `"EASE-OUT-BOUNCE"` and
/// `"out_bounce"` both name [`Curve::EaseOutBounce`].
impl FromStr for Curve {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let key = normalized.strip_prefix("ease_").unwrap_or(&normalized);

        Curve::ALL
            .iter()
            .copied()
            .find(|curve| curve.name().strip_prefix("ease_") == Some(key))
            .ok_or_else(|| {
                tracing::debug!(name = s, "rejecting unknown easing curve name");
                CurveError::InvalidCurve(s.to_string())
            })
    }
}
