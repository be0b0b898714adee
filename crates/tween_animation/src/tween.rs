//! Tween descriptors
//!
//! A `Tween` names both endpoints and the curve between them. It carries no
//! progress of its own; callers own time and ask for a sample.

use crate::curve::Curve;
use crate::ease::ease;
use serde::{Deserialize, Serialize};
use tween_core::Blend;

/// An eased transition from `from` to `to`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween<V> {
    /// Value at progress 0
    pub from: V,
    /// Value at progress 1
    pub to: V,
    /// Curve applied to progress
    pub curve: Curve,
}

impl<V: Blend> Tween<V> {
    pub fn new(from: V, to: V, curve: Curve) -> Self {
        Self { from, to, curve }
    }

    /// Value at progress `t` (clamped to `[0, 1]`)
    pub fn sample(&self, t: f32) -> V {
        ease(self.from, self.to, self.curve, t)
    }

    /// Same curve, endpoints swapped
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.curve)
    }
}
