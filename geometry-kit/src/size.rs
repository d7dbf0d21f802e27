use std::fmt::{self, Display};
use std::str::FromStr;

use approx::AbsDiffEq;
use num_traits::{Float, FromPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryKitError;
use crate::scalar::half;
use crate::scan::{scan_scalars, write_pair};

/// Extent in 2-dimensional space.
///
/// Zero and negative components are valid values. A size with a zero or negative component is
/// [empty](Size::is_empty), and one with a negative component is also
/// [negative](Size::is_negative).
#[derive(Debug, Clone, Copy, Default, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size<Num = f64> {
    width: Num,
    height: Num,
}

impl<Num> Size<Num> {
    /// Creates a new size. Components are stored as given.
    pub const fn new(width: Num, height: Num) -> Self {
        Self { width, height }
    }
}

impl<Num: Float> Size<Num> {
    /// Size with both components set to 0.
    pub fn empty() -> Self {
        Self::new(Num::zero(), Num::zero())
    }

    /// Width component.
    pub fn width(&self) -> Num {
        self.width
    }

    /// Half of the width.
    pub fn half_width(&self) -> Num {
        self.width * half()
    }

    /// Height component.
    pub fn height(&self) -> Num {
        self.height
    }

    /// Half of the height.
    pub fn half_height(&self) -> Num {
        self.height * half()
    }

    /// Returns true if either component is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= Num::zero() || self.height <= Num::zero()
    }

    /// Returns true if either component is less than zero. A zero component is not negative.
    pub fn is_negative(&self) -> bool {
        self.width < Num::zero() || self.height < Num::zero()
    }

    /// Truncates both components toward zero.
    pub fn truncate(&self) -> Self {
        Self::new(self.width.trunc(), self.height.trunc())
    }

    /// Rounds both components to the nearest integer, half-way cases away from zero.
    pub fn round(&self) -> Self {
        Self::new(self.width.round(), self.height.round())
    }

    /// Replaces both components with their absolute values.
    pub fn abs(&self) -> Self {
        Self::new(self.width.abs(), self.height.abs())
    }

    /// Multiplies the components by the components of `factor`.
    pub fn scale(&self, factor: Size<Num>) -> Self {
        self.scale_by(factor.width, factor.height)
    }

    /// Multiplies width by `dw` and height by `dh`.
    pub fn scale_by(&self, dw: Num, dh: Num) -> Self {
        Self::new(self.width * dw, self.height * dh)
    }
}

impl<Num: Float + FromPrimitive> Size<Num> {
    /// Reads a size from text such as `{width, height}`.
    ///
    /// Follows the same rules as [`Point::from_text`](crate::Point::from_text).
    pub fn from_text(text: &str) -> Self {
        let [width, height] = scan_scalars::<Num, 2>(text).values;
        Self::new(width, height)
    }
}

impl<Num: Display> Display for Size<Num> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pair(f, &self.width, &self.height)
    }
}

impl<Num: Float + FromPrimitive> FromStr for Size<Num> {
    type Err = GeometryKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [width, height] = scan_scalars::<Num, 2>(s).require()?;
        Ok(Self::new(width, height))
    }
}

impl<Num> From<(Num, Num)> for Size<Num> {
    fn from((width, height): (Num, Num)) -> Self {
        Self::new(width, height)
    }
}

impl<Num> AbsDiffEq for Size<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.width.abs_diff_eq(&other.width, epsilon)
            && self.height.abs_diff_eq(&other.height, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_negative() {
        assert!(Size::<f64>::empty().is_empty());
        assert!(!Size::<f64>::empty().is_negative());

        assert!(Size::new(0.0, 5.0).is_empty());
        assert!(!Size::new(0.0, 5.0).is_negative());

        assert!(Size::new(-1.0, 5.0).is_empty());
        assert!(Size::new(-1.0, 5.0).is_negative());
        assert!(Size::new(5.0, -0.1).is_negative());

        assert!(!Size::new(1.0, 5.0).is_empty());
        assert!(!Size::new(1.0, 5.0).is_negative());
    }

    #[test]
    fn abs_of_negative_is_non_negative() {
        for size in [
            Size::new(-1.0, 5.0),
            Size::new(3.0, -0.5),
            Size::new(-2.0, -2.0),
        ] {
            assert!(size.is_negative());
            let abs = size.abs();
            assert!(abs.width() >= 0.0 && abs.height() >= 0.0);
            assert!(!abs.is_negative());
        }

        assert_eq!(Size::new(-1.5, 2.0).abs(), Size::new(1.5, 2.0));
    }

    #[test]
    fn truncate_and_round() {
        let size = Size::new(2.5, -2.7);
        assert_eq!(size.truncate(), Size::new(2.0, -2.0));
        assert_eq!(size.round(), Size::new(3.0, -3.0));
    }

    #[test]
    fn scale() {
        let size = Size::new(2.0, 3.0);
        assert_eq!(size.scale(Size::new(0.5, -2.0)), Size::new(1.0, -6.0));
        assert_eq!(size.scale_by(2.0, 0.0), Size::new(4.0, 0.0));
    }

    #[test]
    fn halves() {
        let size = Size::new(5.0, -3.0);
        assert_eq!(size.half_width(), 2.5);
        assert_eq!(size.half_height(), -1.5);
    }

    #[test]
    fn text() {
        assert_eq!(Size::from_text("{10, 20.5}"), Size::new(10.0, 20.5));
        assert_eq!(Size::<f64>::from_text("{}"), Size::empty());
        assert!("{10}".parse::<Size>().is_err());
        assert_eq!(Size::new(10.0, -0.25).to_string(), "{10, -0.25}");

        let size = Size::new(-7.125, 1e-3);
        assert_eq!(size.to_string().parse::<Size>(), Ok(size));
    }
}
