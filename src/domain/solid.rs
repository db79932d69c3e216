//! Solids: impassable areas made up of several shapes.

use std::collections::BTreeMap;

use thiserror::Error;

use super::{
    Ellipse, Position, PositionedEllipse, PositionedRectangle, Rectangle, Shape, Vector,
};

pub type SolidIndex = i64;

/// Solids by index, as referenced by a `TileSolidMapper`.
pub type Solids = BTreeMap<SolidIndex, Solid>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolidError {
    #[error("a solid needs at least one shape")]
    Empty,
}

/// Shapes in one local coordinate frame, plus the minimal rectangle covering all of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solid {
    ellipses: Vec<PositionedEllipse>,
    rectangles: Vec<PositionedRectangle>,
    bounding_box: PositionedRectangle,
}

impl Solid {
    pub fn new(
        ellipses: Vec<PositionedEllipse>,
        rectangles: Vec<PositionedRectangle>,
    ) -> Result<Self, SolidError> {
        let bounding_box = ellipses
            .iter()
            .map(PositionedEllipse::bounding_box)
            .chain(rectangles.iter().copied())
            .reduce(union)
            .ok_or(SolidError::Empty)?;

        Ok(Self {
            ellipses,
            rectangles,
            bounding_box,
        })
    }

    /// A single rectangle with its top-left corner at the local origin.
    pub fn rectangle(width: i64, height: i64) -> Self {
        let rectangle = PositionedRectangle::new(Position::default(), Rectangle::new(width, height));
        Self {
            ellipses: vec![],
            rectangles: vec![rectangle],
            bounding_box: rectangle,
        }
    }

    /// A single ellipse whose bounding box starts at the local origin.
    pub fn ellipse(radius_x: i64, radius_y: i64) -> Self {
        let ellipse = PositionedEllipse::new(
            Position::new(radius_x, radius_y),
            Ellipse::new(radius_x, radius_y),
        );
        Self {
            ellipses: vec![ellipse],
            rectangles: vec![],
            bounding_box: ellipse.bounding_box(),
        }
    }

    pub fn ellipses(&self) -> &[PositionedEllipse] {
        &self.ellipses
    }

    pub fn rectangles(&self) -> &[PositionedRectangle] {
        &self.rectangles
    }

    pub fn bounding_box(&self) -> PositionedRectangle {
        self.bounding_box
    }

    pub fn shapes(&self) -> impl Iterator<Item = Shape> + '_ {
        self.ellipses
            .iter()
            .copied()
            .map(Shape::from)
            .chain(self.rectangles.iter().copied().map(Shape::from))
    }
}

fn union(a: PositionedRectangle, b: PositionedRectangle) -> PositionedRectangle {
    let x_min = a.x().min(b.x());
    let y_min = a.y().min(b.y());
    let x_max = a.right().max(b.right());
    let y_max = a.bottom().max(b.bottom());
    PositionedRectangle::new(
        Position::new(x_min, y_min),
        Rectangle::new(x_max - x_min, y_max - y_min),
    )
}

/// A solid anchored at a world position.
///
/// The solid itself is borrowed, so anchoring one is cheap enough to do for every candidate
/// position tried during a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionedSolid<'s> {
    position: Position,
    solid: &'s Solid,
}

impl<'s> PositionedSolid<'s> {
    pub fn new(position: Position, solid: &'s Solid) -> Self {
        Self { position, solid }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn solid(&self) -> &'s Solid {
        self.solid
    }

    pub fn x(&self) -> i64 {
        self.position.x()
    }

    pub fn y(&self) -> i64 {
        self.position.y()
    }

    /// Bounding box in the solid's local frame.
    pub fn bounding_box(&self) -> PositionedRectangle {
        self.solid.bounding_box()
    }

    pub fn absolute_bounding_box(&self) -> PositionedRectangle {
        self.solid.bounding_box().translated(self.offset())
    }

    pub fn ellipses(&self) -> impl Iterator<Item = PositionedEllipse> + 's {
        let offset = self.offset();
        self.solid.ellipses().iter().map(move |e| e.translated(offset))
    }

    pub fn rectangles(&self) -> impl Iterator<Item = PositionedRectangle> + 's {
        let offset = self.offset();
        self.solid.rectangles().iter().map(move |r| r.translated(offset))
    }

    pub fn shapes(&self) -> impl Iterator<Item = Shape> + 's {
        let offset = self.offset();
        self.solid.shapes().map(move |s| s.translated(offset))
    }

    pub fn translated(&self, vector: Vector) -> Self {
        Self::new(self.position + vector, self.solid)
    }

    pub fn moved_to(&self, position: Position) -> Self {
        Self::new(position, self.solid)
    }

    fn offset(&self) -> Vector {
        self.position - Position::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn composite() -> Solid {
        Solid::new(
            vec![PositionedEllipse::new(
                Position::new(4, 4),
                Ellipse::new(4, 2),
            )],
            vec![PositionedRectangle::new(
                Position::new(2, 5),
                Rectangle::new(3, 10),
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_solid_bounding_box_covers_all_shapes() {
        assert_eq!(
            composite().bounding_box(),
            PositionedRectangle::new(Position::new(0, 2), Rectangle::new(8, 13))
        );
    }

    #[test]
    fn test_solid_without_shapes() {
        assert_eq!(Solid::new(vec![], vec![]), Err(SolidError::Empty));
    }

    #[test]
    fn test_single_shape_solids() {
        assert_eq!(
            Solid::rectangle(16, 8).bounding_box(),
            PositionedRectangle::new(Position::new(0, 0), Rectangle::new(16, 8))
        );
        assert_eq!(
            Solid::ellipse(8, 4).bounding_box(),
            PositionedRectangle::new(Position::new(0, 0), Rectangle::new(16, 8))
        );
    }

    #[test]
    fn test_positioned_solid_absolute_bounding_box() {
        let solid = composite();
        let positioned_solid = PositionedSolid::new(Position::new(100, 50), &solid);
        assert_eq!(
            positioned_solid.absolute_bounding_box(),
            PositionedRectangle::new(Position::new(100, 52), Rectangle::new(8, 13))
        );
        assert_eq!(positioned_solid.bounding_box(), solid.bounding_box());
    }

    #[rstest]
    #[case(Vector::new(0, 0))]
    #[case(Vector::new(7, -3))]
    #[case(Vector::new(-20, 45))]
    fn test_translation_commutes_with_shape_extraction(#[case] vector: Vector) {
        let solid = composite();
        let origin = Position::new(10, 10);
        let translated = PositionedSolid::new(origin, &solid).translated(vector);
        let constructed = PositionedSolid::new(origin + vector, &solid);

        assert_eq!(
            translated.shapes().collect::<Vec<_>>(),
            constructed.shapes().collect::<Vec<_>>()
        );
        assert_eq!(
            translated.absolute_bounding_box(),
            constructed.absolute_bounding_box()
        );
    }

    #[test]
    fn test_positioned_solid_shapes_are_absolute() {
        let solid = composite();
        let positioned_solid = PositionedSolid::new(Position::new(1, 2), &solid);
        assert_eq!(
            positioned_solid.ellipses().collect::<Vec<_>>(),
            vec![PositionedEllipse::new(Position::new(5, 6), Ellipse::new(4, 2))]
        );
        assert_eq!(
            positioned_solid.rectangles().collect::<Vec<_>>(),
            vec![PositionedRectangle::new(Position::new(3, 7), Rectangle::new(3, 10))]
        );
    }
}
