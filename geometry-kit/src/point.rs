use std::fmt::{self, Display};
use std::str::FromStr;

use approx::AbsDiffEq;
use num_traits::{Float, FromPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryKitError;
use crate::scalar::half;
use crate::scan::{scan_scalars, write_pair};

/// A point in 2-dimensional space.
///
/// Equality is exact and field-wise, with no tolerance. Use [`AbsDiffEq`] when comparing results
/// of arithmetic.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }
}

impl<Num: Float> Point<Num> {
    /// Point at `{0, 0}`.
    pub fn zero() -> Self {
        Self::new(Num::zero(), Num::zero())
    }

    /// X coordinate of the point.
    pub fn x(&self) -> Num {
        self.x
    }

    /// Y coordinate of the point.
    pub fn y(&self) -> Num {
        self.y
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn coords(&self) -> [Num; 2] {
        [self.x, self.y]
    }

    /// Truncates both coordinates toward zero.
    pub fn truncate(&self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc())
    }

    /// Rounds both coordinates to the nearest integer, half-way cases away from zero.
    pub fn round(&self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    /// Moves the point by the coordinates of `delta`.
    pub fn shift(&self, delta: Point<Num>) -> Self {
        self.shift_by(delta.x, delta.y)
    }

    /// Moves the point by `dx` along x and `dy` along y.
    pub fn shift_by(&self, dx: Num, dy: Num) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Snaps the point to the center of the pixel it falls in: both coordinates are truncated,
    /// then moved by 0.5.
    pub fn nearest_pixel(&self) -> Self {
        let center = half::<Num>();
        self.truncate().shift_by(center, center)
    }

    /// Euclidean distance to `other`.
    ///
    /// Takes a square root. When distances are only compared to each other, use
    /// [`Point::distance_sq`].
    pub fn distance(&self, other: &Point<Num>) -> Num {
        self.distance_sq(other).sqrt()
    }

    /// Squared euclidean distance to `other`.
    pub fn distance_sq(&self, other: &Point<Num>) -> Num {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl<Num: Float + FromPrimitive> Point<Num> {
    /// Reads a point from text such as `{x, y}`.
    ///
    /// The first two numbers found anywhere in `text` become `x` and `y`; punctuation is not
    /// checked. Missing numbers are taken as 0, so this never fails. Use [`str::parse`] to
    /// reject text with fewer than two numbers.
    pub fn from_text(text: &str) -> Self {
        let [x, y] = scan_scalars::<Num, 2>(text).values;
        Self::new(x, y)
    }
}

impl<Num: Display> Display for Point<Num> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pair(f, &self.x, &self.y)
    }
}

impl<Num: Float + FromPrimitive> FromStr for Point<Num> {
    type Err = GeometryKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = scan_scalars::<Num, 2>(s).require()?;
        Ok(Self::new(x, y))
    }
}

impl<Num> From<(Num, Num)> for Point<Num> {
    fn from((x, y): (Num, Num)) -> Self {
        Self::new(x, y)
    }
}

impl<Num> From<[Num; 2]> for Point<Num> {
    fn from([x, y]: [Num; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<Num> std::ops::Add<Point<Num>> for Point<Num>
where
    Num: std::ops::Add<Num, Output = Num>,
{
    type Output = Point<Num>;

    fn add(self, rhs: Point<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<Num> std::ops::Sub<Point<Num>> for Point<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Point<Num>;

    fn sub(self, rhs: Point<Num>) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<Num> AbsDiffEq for Point<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}
