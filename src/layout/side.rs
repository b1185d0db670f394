//! Sides, directions and edge insets
//!
//! Every positioning call is expressed in terms of the four sides of a view.
//! A [`SideDirection`] names a side; a [`Side`] names a side together with the
//! inset to apply on it. Insets always mean "move inward from the named edge",
//! so they are added for `top`/`left` and subtracted for `right`/`bottom`.

use serde::Deserialize;

/// One of the four sides of a view, without an inset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideDirection {
    Top,
    Left,
    Right,
    Bottom,
}

impl SideDirection {
    /// All four directions in pinning order
    pub const ALL: [SideDirection; 4] = [Self::Top, Self::Left, Self::Right, Self::Bottom];

    /// Attach an inset to this direction
    pub fn with_offset(self, offset: f64) -> Side {
        match self {
            Self::Top => Side::Top(offset),
            Self::Left => Side::Left(offset),
            Self::Right => Side::Right(offset),
            Self::Bottom => Side::Bottom(offset),
        }
    }

    /// True for `left` and `right`
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// True for `top` and `bottom`
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Apply the inward sign convention to an inset on this side.
    ///
    /// `top` and `left` move inward by growing the coordinate, `right` and
    /// `bottom` by shrinking it.
    pub fn signed(self, inset: f64) -> f64 {
        match self {
            Self::Top | Self::Left => inset,
            Self::Right | Self::Bottom => -inset,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

/// A side of a view together with the inset applied on it
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top(f64),
    Left(f64),
    Right(f64),
    Bottom(f64),
}

impl Side {
    /// Split into the bare direction and the carried inset
    pub fn decompose(self) -> (SideDirection, f64) {
        match self {
            Self::Top(inset) => (SideDirection::Top, inset),
            Self::Left(inset) => (SideDirection::Left, inset),
            Self::Right(inset) => (SideDirection::Right, inset),
            Self::Bottom(inset) => (SideDirection::Bottom, inset),
        }
    }

    pub fn direction(self) -> SideDirection {
        self.decompose().0
    }

    pub fn inset(self) -> f64 {
        self.decompose().1
    }

    /// The inset with the inward sign convention of this side applied
    pub fn signed_inset(self) -> f64 {
        let (direction, inset) = self.decompose();
        direction.signed(inset)
    }
}

impl From<SideDirection> for Side {
    fn from(direction: SideDirection) -> Self {
        direction.with_offset(0.0)
    }
}

/// Insets for each of the four sides
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on every side
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Inset configured for one side
    pub fn inset(&self, direction: SideDirection) -> f64 {
        match direction {
            SideDirection::Top => self.top,
            SideDirection::Left => self.left,
            SideDirection::Right => self.right,
            SideDirection::Bottom => self.bottom,
        }
    }

    /// The [`Side`] for `direction` carrying this set's inset
    pub fn side(&self, direction: SideDirection) -> Side {
        direction.with_offset(self.inset(direction))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
