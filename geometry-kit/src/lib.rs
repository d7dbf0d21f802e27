//! Value types for screen and layout geometry: [`Point`], [`Size`], [`Rect`] and [`Range`].
//!
//! All types are small `Copy` values and every operation returns a new value. Edge cases that
//! layout code tends to handle inconsistently have one fixed meaning here:
//!
//! * zero and negative sizes are valid. A zero or negative component makes a size (and a rect)
//!   [empty](Size::is_empty), a negative one also makes it [negative](Size::is_negative);
//! * rect accessors such as [`Rect::min_x`] and the set operations use normalized bounds, so they
//!   are correct for rects with negative size;
//! * intersection of non-overlapping values is an empty value rather than an error;
//! * [`Range::location_at_offset`] returns the [`NOT_FOUND`] sentinel for out of bounds offsets.
//!
//! Values print as `{x, y}`, `{width, height}`, `{location, length}` and
//! `{{x, y}, {width, height}}`. The `from_text` constructors read these forms back, ignoring
//! punctuation and setting missing numbers to 0:
//!
//! ```
//! use geometry_kit::{Point, Rect};
//!
//! let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(rect.to_string(), "{{1, 2}, {3, 4}}");
//! assert_eq!(Rect::from_text(&rect.to_string()), rect);
//! assert_eq!(Point::<f64>::from_text("garbage"), Point::zero());
//! ```
//!
//! `str::parse` is the strict alternative, failing with [`GeometryKitError`] when numbers are
//! missing.

mod axis;
pub mod error;
mod point;
mod range;
mod rect;
mod scalar;
mod scan;
mod size;

pub use axis::YAxis;
pub use error::GeometryKitError;
pub use point::Point;
pub use range::{Range, NOT_FOUND};
pub use rect::Rect;
pub use size::Size;

/// Version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Major version of the crate.
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");

/// Minor version of the crate.
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

/// Patch version of the crate.
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
