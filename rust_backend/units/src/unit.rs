//! Unit trait.

use crate::Dimension;
use core::fmt::Debug;

/// Trait implemented by every **unit** enum.
///
/// * `ratio` is the conversion factor from this unit to the *canonical scaling unit* of the same dimension.
///   Example: degrees are canonical for angles (`AngleUnit::Degree.ratio() == 1.0`), so the hour angle uses
///   `15.0` because `1 h = 15°`.
///
/// * `symbol` is the printable string (e.g. `"deg"` or `"m"`), also accepted by `FromStr`.
///
/// * `dimension` ties the unit to its [`Dimension`].
///
/// # Invariants
///
/// - `ratio` is finite and non-zero.
/// - Every unit of one implementing type shares a single dimension.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Dimension shared by every variant of this unit type.
    const DIMENSION: Dimension;

    /// Canonical unit of the dimension (`ratio() == 1.0`).
    const CANONICAL: Self;

    /// Unit-to-canonical conversion factor.
    fn ratio(self) -> f64;

    /// Printable symbol.
    fn symbol(self) -> &'static str;

    /// Dimension of this unit.
    fn dimension(self) -> Dimension {
        Self::DIMENSION
    }
}
