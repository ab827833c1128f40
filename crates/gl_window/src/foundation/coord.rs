//! Integer pixel coordinates
//!
//! Provides the small vector type used for window sizes and screen positions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Coordinates of a pixel on the window (or a size in pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Horizontal component
    pub x: i32,
    /// Vertical component
    pub y: i32,
}

/// Shorthand constructor for a [`Coord`]
pub const fn xy(x: i32, y: i32) -> Coord {
    Coord { x, y }
}

impl Coord {
    /// Create a new coordinate pair
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round floating point coordinates to the nearest pixel
    #[allow(clippy::cast_possible_truncation)]
    pub fn round(x: f64, y: f64) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }

    /// The vector with the sign of X flipped
    pub const fn flip_x(self) -> Self {
        Self { x: -self.x, y: self.y }
    }

    /// The vector with the sign of Y flipped
    pub const fn flip_y(self) -> Self {
        Self { x: self.x, y: -self.y }
    }

    /// Projection on the X axis
    pub const fn proj_x(self) -> Self {
        Self { x: self.x, y: 0 }
    }

    /// Projection on the Y axis
    pub const fn proj_y(self) -> Self {
        Self { x: 0, y: self.y }
    }

    /// The vector with X and Y swapped
    pub const fn yx(self) -> Self {
        Self { x: self.y, y: self.x }
    }

    /// The vector rotated by 90 degrees counter-clockwise
    pub const fn perp(self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    /// True if both components are zero
    pub const fn is_null(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// True if both components are strictly positive (a usable window size)
    pub const fn is_positive(self) -> bool {
        self.x > 0 && self.y > 0
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Coord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Coord {
    type Output = Self;

    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

/// Component-wise product
impl Mul for Coord {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self { x: self.x * rhs.x, y: self.y * rhs.y }
    }
}

/// Component-wise integer quotient; both components of `rhs` must be non-zero
impl Div for Coord {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self { x: self.x / rhs.x, y: self.y / rhs.y }
    }
}

/// Component-wise remainder; both components of `rhs` must be non-zero
impl Rem for Coord {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        Self { x: self.x % rhs.x, y: self.y % rhs.y }
    }
}
