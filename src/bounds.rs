use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{RangeFrom, RangeInclusive, RangeToInclusive};

/// The three range shapes a [`Clamped`](crate::Clamped) value can be
/// constrained by.
///
/// Endpoints are always included. `Bounded` does not require
/// `low <= high`; see [`Bounds::is_inverted`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Bounds<T> {
    /// Closed interval `[low, high]`.
    Bounded { low: T, high: T },
    /// `[low, +inf)` — no upper limit.
    LowerBounded { low: T },
    /// `(-inf, high]` — no lower limit.
    UpperBounded { high: T },
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Clamp `value` against these bounds.
    ///
    /// For `Bounded`, the value is raised to `low` first and capped at
    /// `high` second. With inverted bounds (`low > high`) this collapses
    /// every value to `high`; callers that want such bounds rejected use
    /// [`Clamped::try_new`](crate::Clamped::try_new).
    pub fn clamp(&self, value: T) -> T {
        match *self {
            Bounds::Bounded { low, high } => {
                let raised = if value < low { low } else { value };
                if raised > high {
                    high
                } else {
                    raised
                }
            }
            Bounds::LowerBounded { low } => {
                if value < low {
                    low
                } else {
                    value
                }
            }
            Bounds::UpperBounded { high } => {
                if value > high {
                    high
                } else {
                    value
                }
            }
        }
    }

    /// Whether `value` already lies within the bounds. Endpoints count.
    pub fn contains(&self, value: T) -> bool {
        match *self {
            Bounds::Bounded { low, high } => low <= value && value <= high,
            Bounds::LowerBounded { low } => low <= value,
            Bounds::UpperBounded { high } => value <= high,
        }
    }

    /// `true` only for a closed interval whose `low` lies above its `high`.
    pub fn is_inverted(&self) -> bool {
        match self {
            Bounds::Bounded { low, high } => low > high,
            _ => false,
        }
    }
}

impl<T> From<RangeInclusive<T>> for Bounds<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (low, high) = range.into_inner();
        Bounds::Bounded { low, high }
    }
}

impl<T> From<RangeFrom<T>> for Bounds<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Bounds::LowerBounded { low: range.start }
    }
}

impl<T> From<RangeToInclusive<T>> for Bounds<T> {
    fn from(range: RangeToInclusive<T>) -> Self {
        Bounds::UpperBounded { high: range.end }
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bounds::Bounded { low, high } => write!(f, "[{}, {}]", low, high),
            Bounds::LowerBounded { low } => write!(f, "[{}, +inf)", low),
            Bounds::UpperBounded { high } => write!(f, "(-inf, {}]", high),
        }
    }
}

/// Bounds rejected by the checked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    #[error("closed bounds are inverted: low is greater than high")]
    Inverted,
}
