//! Tween Core
//!
//! Value primitives shared by the tween crates:
//!
//! - **Vectors**: `Vec3` with the handful of operations animation code needs
//! - **Rotations**: unit quaternions (`Quat`) with axis-angle construction
//! - **Blending**: the `Blend` trait, an unclamped interpolation that lets
//!   easing curves overshoot past their endpoints
//!
//! # Example
//!
//! ```rust
//! use tween_core::{Blend, Vec3};
//!
//! let a = Vec3::ZERO;
//! let b = Vec3::new(10.0, 0.0, 0.0);
//!
//! // Factors outside [0, 1] extrapolate instead of saturating
//! assert_eq!(a.blend_unclamped(b, 1.5), Vec3::new(15.0, 0.0, 0.0));
//! ```

pub mod blend;
pub mod math;

pub use blend::Blend;
pub use math::{Quat, Vec3};
