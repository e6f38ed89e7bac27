use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bounds::{Bounds, BoundsError};

/// A single ordered value constrained to its [`Bounds`] on read.
///
/// The last written value is stored untouched; [`get`](Clamped::get)
/// computes the clamped view on demand. The bounds are fixed at
/// construction and never change.
///
/// Serialization preserves the raw value, so a round-trip loses nothing
/// even when the stored value lies outside the bounds.
///
/// Plain value semantics: no interior mutability, no locking. Consumers
/// that share one across threads must synchronize externally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clamped<T> {
    bounds: Bounds<T>,
    raw: T,
}

impl<T: PartialOrd + Copy> Clamped<T> {
    /// Create a new `Clamped` holding `initial`.
    ///
    /// `initial` is stored verbatim even when it lies outside `bounds`;
    /// the clamp applies on the first read. Inverted closed bounds are
    /// accepted here — use [`try_new`](Clamped::try_new) to reject them.
    pub fn new(initial: T, bounds: impl Into<Bounds<T>>) -> Self {
        Self {
            bounds: bounds.into(),
            raw: initial,
        }
    }

    /// Like [`new`](Clamped::new), but fails on inverted closed bounds.
    pub fn try_new(initial: T, bounds: impl Into<Bounds<T>>) -> Result<Self, BoundsError> {
        let bounds = bounds.into();
        if bounds.is_inverted() {
            return Err(BoundsError::Inverted);
        }
        Ok(Self {
            bounds,
            raw: initial,
        })
    }

    /// The clamped view of the stored value.
    ///
    /// Pure and idempotent; the stored value stays untouched. A float
    /// `NaN` passes through unclamped, since every ordering comparison
    /// on it is false.
    pub fn get(&self) -> T {
        self.bounds.clamp(self.raw)
    }

    /// Replace the stored value.
    ///
    /// No clamping happens here: out-of-range values are kept as
    /// written and only the read is constrained.
    pub fn set(&mut self, value: T) {
        self.raw = value;
    }

    /// The last value written, unclamped.
    pub fn raw(&self) -> T {
        self.raw
    }

    /// The configured bounds.
    pub fn bounds(&self) -> &Bounds<T> {
        &self.bounds
    }
}

impl<T: PartialOrd + Copy + fmt::Display> fmt::Display for Clamped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
