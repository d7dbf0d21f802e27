use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryKitError;
use crate::scan::{scan_unsigned, write_pair};

/// Value returned by [`Range::location_at_offset`] when the offset is outside of the range.
///
/// No valid location can be equal to it.
pub const NOT_FOUND: usize = usize::MAX;

/// Interval of integer locations, `location..location + length`.
///
/// Arithmetic on the end of the range saturates at `usize::MAX`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    location: usize,
    length: usize,
}

impl Range {
    /// Range `{0, 0}`.
    pub const EMPTY: Self = Self::new(0, 0);

    /// See [`NOT_FOUND`].
    pub const NOT_FOUND: usize = NOT_FOUND;

    /// Creates a new range starting at `location` and containing `length` locations.
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Creates a range starting at `from` with `to - from` locations, so `from_to(3, 7)` is
    /// `{3, 4}`.
    ///
    /// `to` must not be less than `from`. If it is, the result is an empty range at `from`; use
    /// [`Range::try_from_to`] to detect that case.
    pub fn from_to(from: usize, to: usize) -> Self {
        Self::new(from, to.saturating_sub(from))
    }

    /// Same as [`Range::from_to`], but fails if `to` is less than `from`.
    pub fn try_from_to(from: usize, to: usize) -> Result<Self, GeometryKitError> {
        if to < from {
            return Err(GeometryKitError::InvalidBounds { from, to });
        }

        Ok(Self::new(from, to - from))
    }

    /// Reads a range from text such as `{location, length}`.
    ///
    /// Numbers are found the same way as by [`Point::from_text`](crate::Point::from_text); the
    /// first two become location and length. Negative or fractional numbers are truncated toward
    /// zero and clamped to `usize`. A single number is the location of an empty range, and text
    /// without numbers gives `{0, 0}`.
    pub fn from_text(text: &str) -> Self {
        let [location, length] = scan_unsigned::<2>(text).values;
        Self::new(location, length)
    }

    /// Range `{0, 0}`.
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// First location of the range.
    pub fn location(&self) -> usize {
        self.location
    }

    /// Number of locations in the range.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns true if the range has zero length.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Location just past the end of the range, `location + length`.
    pub fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Returns true if `location <= loc < location + length`.
    pub fn contains(&self, loc: usize) -> bool {
        loc >= self.location && loc < self.end()
    }

    /// Returns true if every location of `other` is inside this range.
    pub fn contains_range(&self, other: &Range) -> bool {
        other.location >= self.location && other.end() <= self.end()
    }

    /// Common part of two ranges.
    ///
    /// If the ranges do not overlap, the result has zero length and its location is not
    /// meaningful. Check [`Range::is_empty`] before using the location. Currently it is 0, but
    /// this may change.
    pub fn intersection(&self, other: &Range) -> Self {
        let start = self.location.max(other.location);
        let end = self.end().min(other.end());

        if start < end {
            Self::new(start, end - start)
        } else {
            Self::EMPTY
        }
    }

    /// Smallest range containing both ranges, whether they overlap or not.
    pub fn union(&self, other: &Range) -> Self {
        let start = self.location.min(other.location);
        let end = self.end().max(other.end());
        Self::new(start, end - start)
    }

    /// Location at `offset` from the start of the range, or [`NOT_FOUND`] if `offset` is not
    /// less than the length.
    pub fn location_at_offset(&self, offset: usize) -> usize {
        self.checked_location_at_offset(offset).unwrap_or(NOT_FOUND)
    }

    /// Location at `offset` from the start of the range, or `None` if `offset` is not less than
    /// the length or the location would not be below [`NOT_FOUND`].
    pub fn checked_location_at_offset(&self, offset: usize) -> Option<usize> {
        if offset >= self.length {
            return None;
        }

        self.location
            .checked_add(offset)
            .filter(|&location| location != NOT_FOUND)
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pair(f, &self.location, &self.length)
    }
}

impl FromStr for Range {
    type Err = GeometryKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [location, length] = scan_unsigned::<2>(s).require()?;
        Ok(Self::new(location, length))
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(range: Range) -> Self {
        range.location..range.end()
    }
}

impl TryFrom<std::ops::Range<usize>> for Range {
    type Error = GeometryKitError;

    fn try_from(range: std::ops::Range<usize>) -> Result<Self, Self::Error> {
        Self::try_from_to(range.start, range.end)
    }
}
