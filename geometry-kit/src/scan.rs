//! Text forms shared by all value types: the numeric token scanner behind the text constructors
//! and the `{first, second}` writer behind `Display`.
//!
//! Text is scanned left to right and every punctuation character is ignored, so `{1, 2}`,
//! `1 2` and `x=1;y=2` all produce the same two values. All types split text into tokens the
//! same way; only the conversion of a token into a field value differs.

use std::fmt::{self, Display};

use lazy_static::lazy_static;
use num_traits::{Float, FromPrimitive};
use regex::Regex;

use crate::error::GeometryKitError;

lazy_static! {
    static ref NUMBER_TOKEN: Regex = Regex::new(r"[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?")
        .expect("number token pattern is valid");
}

/// First `K` numeric values found in a text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Scanned<T, const K: usize> {
    /// Values in the order they appear in the text. Slots with no token are zero.
    pub(crate) values: [T; K],
    /// Number of tokens actually found, at most `K`.
    pub(crate) found: usize,
}

impl<T, const K: usize> Scanned<T, K> {
    /// Returns the values only if every slot was filled from the text.
    pub(crate) fn require(self) -> Result<[T; K], GeometryKitError> {
        if self.found < K {
            return Err(GeometryKitError::MissingComponents {
                expected: K,
                found: self.found,
            });
        }

        Ok(self.values)
    }
}

fn scan<T: Copy, const K: usize>(
    text: &str,
    zero: T,
    convert: impl Fn(&str) -> T,
) -> Scanned<T, K> {
    let mut values = [zero; K];
    let mut found = 0;

    for (slot, token) in values.iter_mut().zip(NUMBER_TOKEN.find_iter(text)) {
        *slot = convert(token.as_str());
        found += 1;
    }

    if found < K {
        log::debug!("Found {found} of {K} numbers in {text:?}, missing components set to 0");
    }

    Scanned { values, found }
}

/// Scans for signed, optionally fractional numbers. Exponents (`-1.5e3`) are recognized.
pub(crate) fn scan_scalars<Num: Float + FromPrimitive, const K: usize>(
    text: &str,
) -> Scanned<Num, K> {
    scan(text, Num::zero(), |token| {
        // Overflowing literals parse to infinity, so this only guards against the pattern
        // accepting something `f64` does not.
        let value: f64 = token.parse().unwrap_or(0.0);
        Num::from_f64(value).unwrap_or_else(Num::zero)
    })
}

/// Scans the same tokens as [`scan_scalars`] and converts each one to `usize`.
///
/// Plain digit runs are read exactly. Any other token (negative, fractional, exponent or too
/// large) is truncated toward zero and clamped to `0..=usize::MAX`.
pub(crate) fn scan_unsigned<const K: usize>(text: &str) -> Scanned<usize, K> {
    scan(text, 0, |token| {
        if let Ok(value) = token.parse::<usize>() {
            return value;
        }

        let value: f64 = token.parse().unwrap_or(0.0);
        // `as` saturates, so infinities and huge values become `usize::MAX`.
        let clamped = value.trunc().max(0.0) as usize;
        log::warn!("Number {token:?} is not an unsigned integer, using {clamped}");
        clamped
    })
}

/// Writes `{first, second}`, passing formatter precision on to both values.
pub(crate) fn write_pair<T: Display>(
    f: &mut fmt::Formatter<'_>,
    first: &T,
    second: &T,
) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{{{first:.precision$}, {second:.precision$}}}"),
        None => write!(f, "{{{first}, {second}}}"),
    }
}
