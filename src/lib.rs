//! # clamped
//!
//! A container for a single ordered value that constrains every read to
//! configured bounds. Writes store the raw value untouched; the clamp is
//! computed lazily on each read, so the stored value is never rewritten.
//!
//! ```
//! use clamped::Clamped;
//!
//! let mut volume = Clamped::new(5, 0..=11);
//! volume.set(37);
//! assert_eq!(volume.get(), 11);
//! assert_eq!(volume.raw(), 37);
//! ```

pub mod bounds;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use bounds::{Bounds, BoundsError};
pub use value::Clamped;
