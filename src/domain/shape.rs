//! Axis-aligned shapes.

use super::{Position, Vector};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    width: i64,
    height: i64,
}

impl Rectangle {
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ellipse {
    radius_x: i64,
    radius_y: i64,
}

impl Ellipse {
    pub const fn new(radius_x: i64, radius_y: i64) -> Self {
        Self { radius_x, radius_y }
    }

    pub const fn circle(radius: i64) -> Self {
        Self::new(radius, radius)
    }

    pub fn radius_x(&self) -> i64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> i64 {
        self.radius_y
    }

    pub fn is_circle(&self) -> bool {
        self.radius_x == self.radius_y
    }
}

/// A rectangle whose position is its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PositionedRectangle {
    position: Position,
    rectangle: Rectangle,
}

impl PositionedRectangle {
    pub const fn new(position: Position, rectangle: Rectangle) -> Self {
        Self {
            position,
            rectangle,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn rectangle(&self) -> Rectangle {
        self.rectangle
    }

    pub fn x(&self) -> i64 {
        self.position.x()
    }

    pub fn y(&self) -> i64 {
        self.position.y()
    }

    pub fn width(&self) -> i64 {
        self.rectangle.width()
    }

    pub fn height(&self) -> i64 {
        self.rectangle.height()
    }

    pub fn right(&self) -> i64 {
        self.x() + self.width()
    }

    pub fn bottom(&self) -> i64 {
        self.y() + self.height()
    }

    pub fn corners(&self) -> [Position; 4] {
        [
            self.position,
            self.position + Vector::new(self.width(), 0),
            self.position + Vector::new(0, self.height()),
            self.position + Vector::new(self.width(), self.height()),
        ]
    }

    pub fn translated(&self, vector: Vector) -> Self {
        Self::new(self.position + vector, self.rectangle)
    }
}

/// An ellipse whose position is its centre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PositionedEllipse {
    position: Position,
    ellipse: Ellipse,
}

impl PositionedEllipse {
    pub const fn new(position: Position, ellipse: Ellipse) -> Self {
        Self { position, ellipse }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn ellipse(&self) -> Ellipse {
        self.ellipse
    }

    pub fn x(&self) -> i64 {
        self.position.x()
    }

    pub fn y(&self) -> i64 {
        self.position.y()
    }

    pub fn radius_x(&self) -> i64 {
        self.ellipse.radius_x()
    }

    pub fn radius_y(&self) -> i64 {
        self.ellipse.radius_y()
    }

    pub fn is_circle(&self) -> bool {
        self.ellipse.is_circle()
    }

    pub fn bounding_box(&self) -> PositionedRectangle {
        PositionedRectangle::new(
            self.position - Vector::new(self.radius_x(), self.radius_y()),
            Rectangle::new(2 * self.radius_x(), 2 * self.radius_y()),
        )
    }

    pub fn translated(&self, vector: Vector) -> Self {
        Self::new(self.position + vector, self.ellipse)
    }
}

/// The closed set of shapes a solid is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Rectangle(PositionedRectangle),
    Ellipse(PositionedEllipse),
}

impl Shape {
    pub fn translated(&self, vector: Vector) -> Self {
        match self {
            Shape::Rectangle(rectangle) => Shape::Rectangle(rectangle.translated(vector)),
            Shape::Ellipse(ellipse) => Shape::Ellipse(ellipse.translated(vector)),
        }
    }
}

impl From<PositionedRectangle> for Shape {
    fn from(value: PositionedRectangle) -> Self {
        Shape::Rectangle(value)
    }
}

impl From<PositionedEllipse> for Shape {
    fn from(value: PositionedEllipse) -> Self {
        Shape::Ellipse(value)
    }
}
