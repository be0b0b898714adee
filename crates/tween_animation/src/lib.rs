//! Tween Animation System
//!
//! Easing curves and the operations that apply them to animated values.
//!
//! # Features
//!
//! - **Easing Curves**: 30 closed-form curves (sine through bounce, each with
//!   in, out and in-out phases)
//! - **Unclamped Easing**: progress is clamped, the eased factor is not, so
//!   back and elastic curves overshoot their endpoints
//! - **Any Blendable Value**: scalars, vectors and rotations through one
//!   generic `ease` operation
//! - **Configurable**: curves and tweens deserialize from config files
//!
//! # Example
//!
//! ```rust
//! use tween_animation::{ease, interpolate, Curve};
//!
//! assert_eq!(interpolate(Curve::EaseInQuad, 0.5), 0.25);
//! assert_eq!(ease(0.0f32, 10.0, Curve::EaseInOutQuad, 0.25), 1.25);
//!
//! // Unknown names are rejected rather than defaulted
//! assert!("ease_in_wobble".parse::<Curve>().is_err());
//! ```

pub mod curve;
pub mod ease;
pub mod easing;
pub mod error;
pub mod tween;

pub use curve::{Curve, CurveFamily, CurveMode};
pub use ease::{ease, ease_factor};
pub use easing::interpolate;
pub use error::{CurveError, Result};
pub use tween::Tween;

pub use tween_core::{Blend, Quat, Vec3};
