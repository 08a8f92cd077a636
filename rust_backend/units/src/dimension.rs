//! Dimension tags.

use core::fmt;

/// Physical dimension of a unit.
///
/// Two quantities can only be added or subtracted when they share a dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Plane angle (degrees, radians, hour angle, ...).
    Angular,
    /// Length (metres, kilometres).
    Length,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Angular => f.write_str("angle"),
            Dimension::Length => f.write_str("length"),
        }
    }
}
