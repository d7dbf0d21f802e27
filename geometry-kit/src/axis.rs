#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of the y axis of the coordinate space a point was taken in.
///
/// Pointer hit tests are half-open, and which horizontal edge of a rect counts as inside
/// depends on where the origin of the space is. See [`Rect::contains_mouse`](crate::Rect::contains_mouse).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum YAxis {
    /// Origin is at the bottom, y grows upward. The top edge of a rect is inside, the bottom
    /// edge is not.
    #[default]
    Up,
    /// Origin is at the top, y grows downward (a "flipped" view). The top edge of a rect is
    /// inside, the bottom edge is not.
    Down,
}

impl YAxis {
    /// Converts the `flipped` flag of a view into the axis direction.
    pub fn from_flipped(flipped: bool) -> Self {
        if flipped {
            Self::Down
        } else {
            Self::Up
        }
    }

    /// Returns true if the axis points down, i.e. the view is flipped.
    pub fn is_flipped(&self) -> bool {
        *self == Self::Down
    }
}
