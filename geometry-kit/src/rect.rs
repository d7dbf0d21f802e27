use std::fmt::{self, Display};
use std::str::FromStr;

use approx::AbsDiffEq;
use num_traits::{Float, FromPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axis::YAxis;
use crate::error::GeometryKitError;
use crate::point::Point;
use crate::scan::scan_scalars;
use crate::size::Size;

/// Axis-aligned rectangle given by its origin and size.
///
/// The size may be negative, in which case the origin is not the minimum corner. The origin is
/// never normalized, but all min/mid/max accessors and the set operations work on normalized
/// bounds, so `min_x() <= max_x()` holds for any rect.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect<Num = f64> {
    origin: Point<Num>,
    size: Size<Num>,
}

impl<Num> Rect<Num> {
    /// Creates a rect from its origin and size.
    pub const fn from_parts(origin: Point<Num>, size: Size<Num>) -> Self {
        Self { origin, size }
    }
}

impl<Num: Float> Rect<Num> {
    /// Creates a rect from origin coordinates and size components.
    pub fn new(x: Num, y: Num, width: Num, height: Num) -> Self {
        Self::from_parts(Point::new(x, y), Size::new(width, height))
    }

    /// Creates a rect of the given size with origin at `{0, 0}`.
    pub fn from_size(size: Size<Num>) -> Self {
        Self::from_parts(Point::zero(), size)
    }

    /// Rect with all components set to 0.
    pub fn empty() -> Self {
        Self::from_parts(Point::zero(), Size::empty())
    }

    /// Origin as given at construction, not normalized.
    pub fn origin(&self) -> Point<Num> {
        self.origin
    }

    /// Size as given at construction, possibly negative.
    pub fn size(&self) -> Size<Num> {
        self.size
    }

    /// Width, possibly negative.
    pub fn width(&self) -> Num {
        self.size.width()
    }

    /// Height, possibly negative.
    pub fn height(&self) -> Num {
        self.size.height()
    }

    /// Returns true if the size has a zero or negative component.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Returns true if the size has a negative component.
    pub fn is_negative(&self) -> bool {
        self.size.is_negative()
    }

    /// Smallest x of the rect. For a negative width this is not the origin.
    pub fn min_x(&self) -> Num {
        self.origin.x().min(self.origin.x() + self.width())
    }

    /// X of the center.
    pub fn mid_x(&self) -> Num {
        self.origin.x() + self.size.half_width()
    }

    /// Largest x of the rect. For a negative width this is the origin.
    pub fn max_x(&self) -> Num {
        self.origin.x().max(self.origin.x() + self.width())
    }

    /// Smallest y of the rect. For a negative height this is not the origin.
    pub fn min_y(&self) -> Num {
        self.origin.y().min(self.origin.y() + self.height())
    }

    /// Y of the center.
    pub fn mid_y(&self) -> Num {
        self.origin.y() + self.size.half_height()
    }

    /// Largest y of the rect. For a negative height this is the origin.
    pub fn max_y(&self) -> Num {
        self.origin.y().max(self.origin.y() + self.height())
    }

    /// Corner with the smallest coordinates.
    pub fn min_point(&self) -> Point<Num> {
        Point::new(self.min_x(), self.min_y())
    }

    /// Center of the rect.
    pub fn mid_point(&self) -> Point<Num> {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Corner with the largest coordinates.
    pub fn max_point(&self) -> Point<Num> {
        Point::new(self.max_x(), self.max_y())
    }

    /// Returns true if `other` lies completely within the bounds of this rect. Shared edges
    /// count as inside.
    pub fn covers(&self, other: &Rect<Num>) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Returns true if the rects overlap by a non-zero amount along both axes. Rects that only
    /// touch do not intersect.
    pub fn intersects(&self, other: &Rect<Num>) -> bool {
        self.min_x().max(other.min_x()) < self.max_x().min(other.max_x())
            && self.min_y().max(other.min_y()) < self.max_y().min(other.max_y())
    }

    /// Returns true if the point is in `[min_x, max_x) x [min_y, max_y)`.
    pub fn contains_point(&self, point: &Point<Num>) -> bool {
        self.contains_x(point.x()) && point.y() >= self.min_y() && point.y() < self.max_y()
    }

    /// Hit test for a pointer position.
    ///
    /// The edge of the rect nearest to the top of the screen is inside, the opposite edge is
    /// not. With [`YAxis::Down`] this is the same as [`Rect::contains_point`]; with
    /// [`YAxis::Up`] the y test becomes `(min_y, max_y]`.
    pub fn contains_mouse(&self, point: &Point<Num>, y_axis: YAxis) -> bool {
        let y = point.y();
        let contains_y = match y_axis {
            YAxis::Down => y >= self.min_y() && y < self.max_y(),
            YAxis::Up => y > self.min_y() && y <= self.max_y(),
        };

        self.contains_x(point.x()) && contains_y
    }

    fn contains_x(&self, x: Num) -> bool {
        x >= self.min_x() && x < self.max_x()
    }

    /// Moves every side of the rect inward, the vertical sides by `dx` and the horizontal ones
    /// by `dy`. Negative values grow the rect.
    pub fn inset(&self, dx: Num, dy: Num) -> Self {
        let two = Num::one() + Num::one();
        Self::new(
            self.origin.x() + dx,
            self.origin.y() + dy,
            self.width() - dx * two,
            self.height() - dy * two,
        )
    }

    /// Moves the origin, keeping the size.
    pub fn offset(&self, dx: Num, dy: Num) -> Self {
        Self::from_parts(self.origin.shift_by(dx, dy), self.size)
    }

    /// Smallest rect with integer sides that contains this one.
    ///
    /// Minimum bounds are floored and maximum bounds are ceiled, so the result always has a
    /// non-negative size, whatever the sign of the input size.
    pub fn integral(&self) -> Self {
        let x_min = self.min_x().floor();
        let y_min = self.min_y().floor();
        let x_max = self.max_x().ceil();
        let y_max = self.max_y().ceil();

        Self::new(x_min, y_min, x_max - x_min, y_max - y_min)
    }

    /// Truncates all four components toward zero.
    pub fn truncate(&self) -> Self {
        Self::from_parts(self.origin.truncate(), self.size.truncate())
    }

    /// Rounds all four components to the nearest integer, half-way cases away from zero.
    pub fn round(&self) -> Self {
        Self::from_parts(self.origin.round(), self.size.round())
    }

    /// Replaces all four components with their absolute values. The result is never negative.
    pub fn abs(&self) -> Self {
        Self::new(
            self.origin.x().abs(),
            self.origin.y().abs(),
            self.width().abs(),
            self.height().abs(),
        )
    }

    /// Truncates all components, then moves the origin to the center of its pixel.
    ///
    /// Useful for crisp one pixel wide strokes.
    pub fn align_with_pixels(&self) -> Self {
        let truncated = self.truncate();
        Self::from_parts(truncated.origin.nearest_pixel(), truncated.size)
    }

    /// Common area of two rects.
    ///
    /// If the rects do not [intersect](Rect::intersects), returns [`Rect::empty`], located at
    /// `{0, 0}`.
    pub fn intersection(&self, other: &Rect<Num>) -> Self {
        if !self.intersects(other) {
            return Self::empty();
        }

        let x_min = self.min_x().max(other.min_x());
        let y_min = self.min_y().max(other.min_y());
        let x_max = self.max_x().min(other.max_x());
        let y_max = self.max_y().min(other.max_y());

        Self::new(x_min, y_min, x_max - x_min, y_max - y_min)
    }

    /// Smallest rect containing both rects.
    ///
    /// Empty rects do not take part: if one of the rects is empty the other one is returned
    /// as is, and if both are empty the result is [`Rect::empty`].
    pub fn union(&self, other: &Rect<Num>) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Self::empty(),
            (true, false) => *other,
            (false, true) => *self,
            (false, false) => {
                let x_min = self.min_x().min(other.min_x());
                let y_min = self.min_y().min(other.min_y());
                let x_max = self.max_x().max(other.max_x());
                let y_max = self.max_y().max(other.max_y());

                Self::new(x_min, y_min, x_max - x_min, y_max - y_min)
            }
        }
    }

    /// Rect of the same size, moved so that its center is the center of `other`.
    pub fn centered_in(&self, other: &Rect<Num>) -> Self {
        Self::new(
            other.mid_x() - self.size.half_width(),
            other.mid_y() - self.size.half_height(),
            self.width(),
            self.height(),
        )
    }
}

impl<Num: Float + FromPrimitive> Rect<Num> {
    /// Reads a rect from text such as `{{x, y}, {width, height}}`.
    ///
    /// The first four numbers found become x, y, width and height. Missing numbers are taken as
    /// 0 and punctuation is ignored.
    pub fn from_text(text: &str) -> Self {
        let [x, y, width, height] = scan_scalars::<Num, 4>(text).values;
        Self::new(x, y, width, height)
    }
}

impl<Num: Display> Display for Rect<Num> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        Display::fmt(&self.origin, f)?;
        f.write_str(", ")?;
        Display::fmt(&self.size, f)?;
        f.write_str("}")
    }
}

impl<Num: Float + FromPrimitive> FromStr for Rect<Num> {
    type Err = GeometryKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, width, height] = scan_scalars::<Num, 4>(s).require()?;
        Ok(Self::new(x, y, width, height))
    }
}

impl<Num> AbsDiffEq for Rect<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.origin.abs_diff_eq(&other.origin, epsilon)
            && self.size.abs_diff_eq(&other.size, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn samples() -> Vec<Rect> {
        vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(-5.0, 2.5, 3.0, 0.5),
            Rect::new(1.0, 1.0, 0.0, 4.0),
            Rect::new(10.0, 10.0, -4.0, -2.0),
            Rect::new(0.25, -0.75, 1e-3, 1e3),
        ]
    }

    #[test]
    fn constructors() {
        let origin = Point::new(1.0, 2.0);
        let size = Size::new(3.0, 4.0);
        assert_eq!(Rect::from_parts(origin, size), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Rect::from_size(size), Rect::new(0.0, 0.0, 3.0, 4.0));
        assert_eq!(Rect::<f64>::empty(), Rect::default());
        assert!(Rect::<f64>::empty().is_empty());
    }

    #[test]
    fn normalized_bounds() {
        let rect = Rect::new(10.0, 10.0, -4.0, -2.0);
        assert!(rect.is_negative());
        assert!(rect.is_empty());
        assert_eq!(rect.origin(), Point::new(10.0, 10.0));
        assert_eq!(rect.min_x(), 6.0);
        assert_eq!(rect.max_x(), 10.0);
        assert_eq!(rect.min_y(), 8.0);
        assert_eq!(rect.max_y(), 10.0);
        assert_eq!(rect.mid_point(), Point::new(8.0, 9.0));
        assert_eq!(rect.min_point(), Point::new(6.0, 8.0));
        assert_eq!(rect.max_point(), Point::new(10.0, 10.0));

        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.min_point(), Point::new(1.0, 2.0));
        assert_eq!(rect.mid_point(), Point::new(2.5, 4.0));
        assert_eq!(rect.max_point(), Point::new(4.0, 6.0));
    }

    #[test]
    fn mid_point_is_inside() {
        for rect in samples() {
            if rect.intersects(&rect) {
                assert!(rect.contains_point(&rect.mid_point()), "{rect}");
            }
        }
    }

    #[test]
    fn covers() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.covers(&rect));
        assert!(rect.covers(&Rect::new(2.0, 2.0, 3.0, 3.0)));
        assert!(rect.covers(&Rect::new(5.0, 5.0, -5.0, -5.0)));
        assert!(!rect.covers(&Rect::new(8.0, 8.0, 3.0, 1.0)));
        assert!(!Rect::new(2.0, 2.0, 3.0, 3.0).covers(&rect));
        assert!(Rect::new(10.0, 10.0, -10.0, -10.0).covers(&Rect::new(1.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn intersects() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(rect.intersects(&Rect::new(12.0, 12.0, -4.0, -4.0)));
        assert!(!rect.intersects(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!rect.intersects(&Rect::new(20.0, 20.0, 5.0, 5.0)));
        assert!(!rect.intersects(&Rect::new(5.0, 5.0, 0.0, 2.0)));
    }

    #[test]
    fn contains_point_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(&Point::new(0.0, 0.0)));
        assert!(rect.contains_point(&Point::new(9.99, 9.99)));
        assert!(!rect.contains_point(&Point::new(10.0, 5.0)));
        assert!(!rect.contains_point(&Point::new(5.0, 10.0)));
        assert!(!rect.contains_point(&Point::new(-0.1, 5.0)));
    }

    #[test]
    fn contains_mouse() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        let top_in_flipped = Point::new(5.0, 0.0);
        assert!(rect.contains_mouse(&top_in_flipped, YAxis::Down));
        assert!(!rect.contains_mouse(&top_in_flipped, YAxis::Up));

        let top_in_unflipped = Point::new(5.0, 10.0);
        assert!(rect.contains_mouse(&top_in_unflipped, YAxis::Up));
        assert!(!rect.contains_mouse(&top_in_unflipped, YAxis::Down));

        let inside = Point::new(5.0, 5.0);
        assert!(rect.contains_mouse(&inside, YAxis::Up));
        assert!(rect.contains_mouse(&inside, YAxis::from_flipped(true)));
        assert!(!rect.contains_mouse(&Point::new(10.0, 5.0), YAxis::Up));
    }

    #[test]
    fn inset_and_offset() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rect.inset(1.0, 2.0), Rect::new(1.0, 2.0, 8.0, 6.0));
        assert_eq!(rect.inset(-1.0, 0.0), Rect::new(-1.0, 0.0, 12.0, 10.0));
        assert_eq!(rect.offset(3.0, -3.0), Rect::new(3.0, -3.0, 10.0, 10.0));
    }

    #[test]
    fn integral() {
        assert_eq!(
            Rect::new(0.5, -0.5, 2.0, 1.2).integral(),
            Rect::new(0.0, -1.0, 3.0, 2.0)
        );
        assert_eq!(
            Rect::new(3.5, 3.5, -2.0, -1.0).integral(),
            Rect::new(1.0, 2.0, 3.0, 2.0)
        );
        let exact = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(exact.integral(), exact);
    }

    #[test]
    fn component_wise() {
        let rect = Rect::new(-1.5, 2.5, -3.7, 4.2);
        assert_eq!(rect.truncate(), Rect::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(rect.round(), Rect::new(-2.0, 3.0, -4.0, 4.0));
        assert_eq!(rect.abs(), Rect::new(1.5, 2.5, 3.7, 4.2));

        for rect in samples() {
            assert!(!rect.abs().is_negative());
        }
    }

    #[test]
    fn align_with_pixels() {
        assert_eq!(
            Rect::new(1.7, 2.2, 10.9, 5.5).align_with_pixels(),
            Rect::new(1.5, 2.5, 10.0, 5.0)
        );
    }

    #[test]
    fn intersection() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        let disjoint = rect.intersection(&Rect::new(20.0, 20.0, 5.0, 5.0));
        assert!(disjoint.is_empty());
        assert_eq!(disjoint.origin(), Point::zero());
        assert_eq!(disjoint, Rect::empty());

        assert_eq!(
            rect.intersection(&Rect::new(5.0, -5.0, 10.0, 10.0)),
            Rect::new(5.0, 0.0, 5.0, 5.0)
        );
        assert_eq!(
            rect.intersection(&Rect::new(12.0, 4.0, -4.0, 2.0)),
            Rect::new(8.0, 4.0, 2.0, 2.0)
        );
        assert!(rect.intersection(&Rect::new(10.0, 0.0, 5.0, 5.0)).is_empty());
    }

    #[test]
    fn union() {
        let empty = Rect::new(0.0, 0.0, 0.0, 0.0);
        let other = Rect::new(1.0, 1.0, 4.0, 4.0);
        assert_eq!(empty.union(&other), other);
        assert_eq!(other.union(&empty), other);
        assert_eq!(
            Rect::new(5.0, 5.0, -1.0, 2.0).union(&Rect::new(9.0, 9.0, 0.0, 1.0)),
            Rect::empty()
        );

        assert_eq!(
            Rect::new(0.0, 0.0, 2.0, 2.0).union(&Rect::new(5.0, -1.0, 1.0, 1.0)),
            Rect::new(0.0, -1.0, 6.0, 3.0)
        );

        for a in samples() {
            for b in samples() {
                let union = a.union(&b);
                if !a.is_empty() {
                    assert!(union.covers(&a));
                }
                if !b.is_empty() {
                    assert!(union.covers(&b));
                }
            }
        }
    }

    #[test]
    fn centered_in() {
        let rect = Rect::new(100.0, 100.0, 4.0, 2.0);
        let centered = rect.centered_in(&Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(centered, Rect::new(3.0, 4.0, 4.0, 2.0));
        assert_eq!(centered.size(), rect.size());

        let outer = Rect::new(-3.0, 1.0, 7.0, 3.0);
        for rect in samples() {
            let centered = rect.centered_in(&outer);
            assert_eq!(centered.size(), rect.size());
            assert_abs_diff_eq!(centered.mid_point(), outer.mid_point(), epsilon = 1e-9);
        }
    }

    #[test]
    fn description() {
        assert_eq!(Rect::new(1.0, 2.0, 3.0, 4.0).to_string(), "{{1, 2}, {3, 4}}");
        assert_eq!(
            format!("{:.1}", Rect::new(1.0, 2.0, 3.0, 4.0)),
            "{{1.0, 2.0}, {3.0, 4.0}}"
        );
    }

    #[test]
    fn text() {
        assert_eq!(Rect::from_text("{{1, 2}, {3, 4}}"), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Rect::from_text("1 2"), Rect::new(1.0, 2.0, 0.0, 0.0));
        assert_eq!(Rect::<f64>::from_text("{{}}"), Rect::empty());

        assert_matches!(
            "{{1, 2}, {3}}".parse::<Rect>(),
            Err(GeometryKitError::MissingComponents {
                expected: 4,
                found: 3
            })
        );

        for rect in samples() {
            assert_eq!(Rect::from_text(&rect.to_string()), rect);
            assert_eq!(rect.to_string().parse::<Rect>(), Ok(rect));
        }
    }
}
