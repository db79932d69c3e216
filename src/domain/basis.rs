//! Basic building blocks.
//!
//! All coordinates are integer pixels. A `Vector` is always a delta in pixels and must not be used
//! for anything measured in tiles.

use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    x: i64,
    y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn with_x(&self, x: i64) -> Self {
        Self { x, ..*self }
    }

    pub fn with_y(&self, y: i64) -> Self {
        Self { y, ..*self }
    }
}

impl Add<Vector> for Position {
    type Output = Position;

    fn add(self, rhs: Vector) -> Self::Output {
        Self {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl Sub<Vector> for Position {
    type Output = Position;

    fn sub(self, rhs: Vector) -> Self::Output {
        self + -rhs
    }
}

impl Sub for Position {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    dx: i64,
    dy: i64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0, 0);

    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    pub fn dx(&self) -> i64 {
        self.dx
    }

    pub fn dy(&self) -> i64 {
        self.dy
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Number of one-pixel steps needed to walk this vector along its dominant axis.
    pub fn chebyshev_length(&self) -> i64 {
        self.dx.abs().max(self.dy.abs())
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Mul<i64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.dx, -self.dy)
    }
}
