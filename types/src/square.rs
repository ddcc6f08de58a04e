//! Square value types with derived areas.
//!
//! Three flavors of the same shape, differing in *when* the area is computed
//! and whether the side length is validated:
//!
//! - [`Square`]: area computed on every access, never stale.
//! - [`EagerSquare`]: area computed once at construction and stored. Changing
//!   the side length afterwards leaves the stored area stale.
//! - [`DerivedAreaShape`]: validated side length, and the area can be assigned
//!   directly. Assigning an area recomputes the side length as its square root.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    #[error("a square's side length must be a positive value (got {value})")]
    InvalidSideLength { value: f64 },
}

/// A side length guaranteed to be positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SideLength(f64);

impl SideLength {
    pub const fn new(value: f64) -> Result<Self, ShapeError> {
        if value > 0.0 && value.is_finite() {
            Ok(Self(value))
        } else {
            Err(ShapeError::InvalidSideLength { value })
        }
    }

    #[must_use]
    pub const fn as_f64(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}

impl TryFrom<f64> for SideLength {
    type Error = ShapeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SideLength> for f64 {
    fn from(value: SideLength) -> Self {
        value.0
    }
}

impl fmt::Display for SideLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Square whose area is computed on access.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side_length: f64,
}

impl Square {
    #[must_use]
    pub const fn new(side_length: f64) -> Self {
        Self { side_length }
    }

    #[must_use]
    pub const fn side_length(&self) -> f64 {
        self.side_length
    }

    pub fn set_side_length(&mut self, side_length: f64) {
        self.side_length = side_length;
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.side_length * self.side_length
    }

    #[must_use]
    pub fn area_message(&self) -> String {
        format!("The area of this square is {}", self.area())
    }
}

/// Square whose area is computed once, at construction.
///
/// The stored area is never refreshed. After [`EagerSquare::set_side_length`]
/// it keeps reporting the area of the original side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EagerSquare {
    side_length: f64,
    area: f64,
}

impl EagerSquare {
    #[must_use]
    pub fn new(side_length: f64) -> Self {
        Self {
            side_length,
            area: side_length * side_length,
        }
    }

    #[must_use]
    pub const fn side_length(&self) -> f64 {
        self.side_length
    }

    /// Replace the side length. The stored area is left as-is.
    pub fn set_side_length(&mut self, side_length: f64) {
        self.side_length = side_length;
    }

    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }

    /// Whether the stored area no longer matches the current side length.
    ///
    /// Compares bit patterns so a NaN side length that never changed is not stale.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.area.to_bits() != (self.side_length * self.side_length).to_bits()
    }
}

/// Outcome of [`DerivedAreaShape::set_area`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaUpdate {
    /// The side length was recomputed from the new area.
    Applied { side_length: SideLength },
    /// The area was not positive; the shape is unchanged.
    Rejected { requested: f64 },
}

impl AreaUpdate {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, AreaUpdate::Applied { .. })
    }
}

/// Square with a validated side length and an assignable derived area.
///
/// Construction and [`set_side_length`](Self::set_side_length) fail on a
/// non-positive side length. [`set_area`](Self::set_area) does not fail: a
/// non-positive area is logged and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedAreaShape {
    side_length: SideLength,
}

impl DerivedAreaShape {
    pub fn new(side_length: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            side_length: SideLength::new(side_length)?,
        })
    }

    #[must_use]
    pub const fn from_side_length(side_length: SideLength) -> Self {
        Self { side_length }
    }

    #[must_use]
    pub const fn side_length(&self) -> f64 {
        self.side_length.as_f64()
    }

    pub fn set_side_length(&mut self, side_length: f64) -> Result<(), ShapeError> {
        self.side_length = SideLength::new(side_length)?;
        Ok(())
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.side_length.squared()
    }

    /// Assign the area, recomputing the side length as `sqrt(new_area)`.
    ///
    /// Non-positive (or non-finite) areas leave the shape unchanged and emit a
    /// warning. Callers that care can inspect the returned [`AreaUpdate`].
    pub fn set_area(&mut self, new_area: f64) -> AreaUpdate {
        if new_area > 0.0
            && new_area.is_finite()
            && let Ok(side_length) = SideLength::new(new_area.sqrt())
        {
            self.side_length = side_length;
            return AreaUpdate::Applied { side_length };
        }

        tracing::warn!(
            requested = new_area,
            side_length = self.side_length.as_f64(),
            "Area must be a positive value; update ignored"
        );
        AreaUpdate::Rejected {
            requested: new_area,
        }
    }
}
