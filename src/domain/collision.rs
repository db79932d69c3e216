//! Collision detection based on basic shapes.
//!
//! All shapes are axis aligned. Touching is never a collision between two rectangles, and a point
//! on the outline of an ellipse is not inside it. Everything here is pure and deterministic.

use nalgebra::{Point2, Vector2};

use super::{Position, PositionedEllipse, PositionedRectangle, PositionedSolid, Shape};

/// Sample points per pixel along the major axis in the ellipse to ellipse approximation. The
/// greater it is, the better the accuracy (and the slower the check).
pub const RESOLUTION: f64 = 1.0;

impl Shape {
    pub fn has_intersection(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Rectangle(rectangle), Shape::Rectangle(other_rectangle)) => {
                collide_rectangles(rectangle, other_rectangle)
            }
            (Shape::Rectangle(rectangle), Shape::Ellipse(ellipse))
            | (Shape::Ellipse(ellipse), Shape::Rectangle(rectangle)) => {
                collide_rectangle_ellipse(rectangle, ellipse)
            }
            (Shape::Ellipse(ellipse), Shape::Ellipse(other_ellipse)) => {
                collide_ellipses(ellipse, other_ellipse)
            }
        }
    }
}

pub fn collide_rectangles(
    rectangle: &PositionedRectangle,
    other_rectangle: &PositionedRectangle,
) -> bool {
    !(rectangle.right() <= other_rectangle.x()
        || other_rectangle.right() <= rectangle.x()
        || rectangle.bottom() <= other_rectangle.y()
        || other_rectangle.bottom() <= rectangle.y())
}

/// Strict interior test, see https://math.stackexchange.com/a/76463.
pub fn collide_ellipse_point(ellipse: &PositionedEllipse, point: Position) -> bool {
    (ellipse.radius_y() * (point.x() - ellipse.x()).abs()).pow(2)
        + (ellipse.radius_x() * (point.y() - ellipse.y()).abs()).pow(2)
        < (ellipse.radius_x() * ellipse.radius_y()).pow(2)
}

/// Both shapes are axis aligned, so the check boils down to two tests:
/// - one of the rectangle's corners lies inside the ellipse,
/// - the ellipse's centre lies within the rectangle's span on one axis while its vertex or
///   co-vertex on the other axis crosses the rectangle's near edge. This covers rectangles larger
///   than the ellipse, which have no corner inside it.
pub fn collide_rectangle_ellipse(
    rectangle: &PositionedRectangle,
    ellipse: &PositionedEllipse,
) -> bool {
    if rectangle
        .corners()
        .iter()
        .any(|corner| collide_ellipse_point(ellipse, *corner))
    {
        return true;
    }

    let within_x_span = (rectangle.x()..=rectangle.right()).contains(&ellipse.x());
    if within_x_span
        && ellipse.y() + ellipse.radius_y() > rectangle.y()
        && ellipse.y() - ellipse.radius_y() < rectangle.bottom()
    {
        return true;
    }

    let within_y_span = (rectangle.y()..=rectangle.bottom()).contains(&ellipse.y());
    within_y_span
        && ellipse.x() + ellipse.radius_x() > rectangle.x()
        && ellipse.x() - ellipse.radius_x() < rectangle.right()
}

pub fn collide_ellipse_rectangle(
    ellipse: &PositionedEllipse,
    rectangle: &PositionedRectangle,
) -> bool {
    collide_rectangle_ellipse(rectangle, ellipse)
}

/// Exact for two circles, approximated otherwise.
///
/// The approximation works in a frame where `ellipse` sits at the origin with its major axis
/// along X and `other_ellipse` has been stretched into a circle. Points spread along the major
/// axis are projected onto the circle's outline, and any projection inside the ellipse (sum of
/// the distances to both foci no greater than the major axis) is a collision. Very eccentric
/// ellipses may be missed at low resolution.
pub fn collide_ellipses(ellipse: &PositionedEllipse, other_ellipse: &PositionedEllipse) -> bool {
    if ellipse.is_circle() && other_ellipse.is_circle() {
        return collide_circles(ellipse, other_ellipse);
    }

    if !bounding_boxes_overlap(ellipse, other_ellipse) {
        return false;
    }

    let frame = CircleFrame::new(ellipse, other_ellipse);

    if frame.circle_contains_origin() {
        return true;
    }

    frame
        .samples()
        .any(|sample| frame.ellipse_contains(frame.project_on_circle(sample)))
}

/// Full cross product of the shapes of both solids.
pub fn collide_solids(solid: &PositionedSolid, other_solid: &PositionedSolid) -> bool {
    solid.shapes().any(|shape| {
        other_solid
            .shapes()
            .any(|other_shape| shape.has_intersection(&other_shape))
    })
}

fn collide_circles(circle: &PositionedEllipse, other_circle: &PositionedEllipse) -> bool {
    let delta = other_circle.position() - circle.position();
    delta.dx().pow(2) + delta.dy().pow(2) <= (circle.radius_x() + other_circle.radius_x()).pow(2)
}

fn bounding_boxes_overlap(ellipse: &PositionedEllipse, other_ellipse: &PositionedEllipse) -> bool {
    let a = ellipse.bounding_box();
    let b = other_ellipse.bounding_box();
    !(a.right() < b.x() || b.right() < a.x() || a.bottom() < b.y() || b.bottom() < a.y())
}

/// First ellipse at the origin with its major axis along X, second ellipse scaled into a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
struct CircleFrame {
    semi_major: f64,
    semi_minor: f64,
    circle_center: Point2<f64>,
    circle_radius: f64,
}

impl CircleFrame {
    fn new(ellipse: &PositionedEllipse, other_ellipse: &PositionedEllipse) -> Self {
        let scale = Vector2::new(
            other_ellipse.radius_y() as f64,
            other_ellipse.radius_x() as f64,
        );
        let offset = other_ellipse.position() - ellipse.position();

        let mut circle_center = Point2::new(
            offset.dx() as f64 * scale.x,
            offset.dy() as f64 * scale.y,
        );
        let circle_radius = other_ellipse.radius_x() as f64 * scale.x;
        let mut semi_major = ellipse.radius_x() as f64 * scale.x;
        let mut semi_minor = ellipse.radius_y() as f64 * scale.y;

        if semi_major < semi_minor {
            std::mem::swap(&mut semi_major, &mut semi_minor);
            circle_center = Point2::new(circle_center.y, circle_center.x);
        }

        Self {
            semi_major,
            semi_minor,
            circle_center,
            circle_radius,
        }
    }

    fn linear_eccentricity(&self) -> f64 {
        (self.semi_major.powi(2) - self.semi_minor.powi(2)).abs().sqrt()
    }

    fn foci(&self) -> [Point2<f64>; 2] {
        let c = self.linear_eccentricity();
        [Point2::new(-c, 0.0), Point2::new(c, 0.0)]
    }

    /// The circle swallowing the whole ellipse leaves no outline point to sample inside it.
    fn circle_contains_origin(&self) -> bool {
        self.circle_center.coords.norm() < self.circle_radius
    }

    fn samples(&self) -> impl Iterator<Item = Point2<f64>> {
        let count = (2.0 * self.semi_major * RESOLUTION).ceil() as u64;
        let semi_major = self.semi_major;
        let step = if count > 1 {
            2.0 * semi_major / (count - 1) as f64
        } else {
            0.0
        };
        (0..count).map(move |i| {
            if count == 1 {
                Point2::origin()
            } else {
                Point2::new(-semi_major + i as f64 * step, 0.0)
            }
        })
    }

    /// Point of the circle's outline on the ray from its centre through `sample`. A sample on the
    /// centre itself is returned as is: the centre then lies on the major axis, inside the ellipse.
    fn project_on_circle(&self, sample: Point2<f64>) -> Point2<f64> {
        let ray = sample - self.circle_center;
        let length = ray.norm();
        if length == 0.0 {
            return sample;
        }
        self.circle_center + ray * (self.circle_radius / length)
    }

    fn ellipse_contains(&self, point: Point2<f64>) -> bool {
        let [f1, f2] = self.foci();
        nalgebra::distance(&point, &f1) + nalgebra::distance(&point, &f2) <= 2.0 * self.semi_major
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use super::super::{Ellipse, Rectangle, Solid};
    use super::*;

    fn rectangle(x: i64, y: i64, width: i64, height: i64) -> PositionedRectangle {
        PositionedRectangle::new(Position::new(x, y), Rectangle::new(width, height))
    }

    fn ellipse(x: i64, y: i64, radius_x: i64, radius_y: i64) -> PositionedEllipse {
        PositionedEllipse::new(Position::new(x, y), Ellipse::new(radius_x, radius_y))
    }

    #[rstest]
    #[case::overlap(rectangle(0, 0, 10, 10), rectangle(5, 5, 10, 10), true)]
    #[case::touching_right(rectangle(0, 0, 10, 10), rectangle(10, 0, 10, 10), false)]
    #[case::touching_below(rectangle(0, 0, 10, 10), rectangle(0, 10, 10, 10), false)]
    #[case::touching_corner(rectangle(0, 0, 10, 10), rectangle(10, 10, 10, 10), false)]
    #[case::one_pixel_overlap(rectangle(0, 0, 10, 10), rectangle(9, 9, 10, 10), true)]
    #[case::contained(rectangle(0, 0, 10, 10), rectangle(2, 2, 3, 3), true)]
    #[case::apart(rectangle(0, 0, 10, 10), rectangle(30, 0, 10, 10), false)]
    #[case::cross(rectangle(5, 0, 2, 20), rectangle(0, 8, 20, 2), true)]
    fn test_collide_rectangles(
        #[case] a: PositionedRectangle,
        #[case] b: PositionedRectangle,
        #[case] expected: bool,
    ) {
        assert_eq!(collide_rectangles(&a, &b), expected);
        assert_eq!(collide_rectangles(&b, &a), expected);
    }

    #[rstest]
    #[case::inside(Position::new(4, 0), true)]
    #[case::centre(Position::new(0, 0), true)]
    #[case::boundary(Position::new(5, 0), false)]
    #[case::outside(Position::new(6, 0), false)]
    #[case::diagonal_inside(Position::new(3, 3), true)]
    #[case::diagonal_outside(Position::new(4, 4), false)]
    fn test_collide_circle_point(#[case] point: Position, #[case] expected: bool) {
        assert_eq!(collide_ellipse_point(&ellipse(0, 0, 5, 5), point), expected);
    }

    #[rstest]
    #[case::on_major_axis(Position::new(9, 0), true)]
    #[case::vertex(Position::new(10, 0), false)]
    #[case::beyond_minor_axis(Position::new(0, 3), false)]
    #[case::inside_minor_axis(Position::new(0, 2), true)]
    fn test_collide_ellipse_point(#[case] point: Position, #[case] expected: bool) {
        assert_eq!(collide_ellipse_point(&ellipse(0, 0, 10, 3), point), expected);
    }

    #[rstest]
    #[case::corner_inside(rectangle(3, 3, 10, 10), ellipse(0, 0, 5, 5), true)]
    #[case::corner_on_outline(rectangle(5, 0, 10, 10), ellipse(0, 0, 5, 5), false)]
    #[case::wide_rectangle_through_centre(rectangle(-20, -1, 40, 2), ellipse(0, 0, 5, 5), true)]
    #[case::tall_rectangle_through_centre(rectangle(-1, -20, 2, 40), ellipse(0, 0, 5, 5), true)]
    #[case::wide_rectangle_crossing_bottom(rectangle(-20, 4, 40, 10), ellipse(0, 0, 5, 5), true)]
    #[case::wide_rectangle_touching_bottom(rectangle(-20, 5, 40, 10), ellipse(0, 0, 5, 5), false)]
    #[case::wide_rectangle_far_below(rectangle(-20, 50, 40, 10), ellipse(0, 0, 5, 5), false)]
    #[case::wide_rectangle_far_above(rectangle(-20, -60, 40, 10), ellipse(0, 0, 5, 5), false)]
    #[case::ellipse_inside_rectangle(rectangle(-20, -20, 40, 40), ellipse(0, 0, 5, 5), true)]
    #[case::diagonal_apart(rectangle(4, 4, 10, 10), ellipse(0, 0, 5, 5), false)]
    fn test_collide_rectangle_ellipse(
        #[case] r: PositionedRectangle,
        #[case] e: PositionedEllipse,
        #[case] expected: bool,
    ) {
        assert_eq!(collide_rectangle_ellipse(&r, &e), expected);
        assert_eq!(collide_ellipse_rectangle(&e, &r), expected);
    }

    #[rstest]
    #[case::overlapping(ellipse(0, 0, 5, 5), ellipse(6, 0, 3, 3), true)]
    #[case::touching(ellipse(0, 0, 5, 5), ellipse(8, 0, 3, 3), true)]
    #[case::one_pixel_apart(ellipse(0, 0, 5, 5), ellipse(9, 0, 3, 3), false)]
    #[case::touching_diagonally(ellipse(0, 0, 2, 2), ellipse(3, 4, 3, 3), true)]
    #[case::concentric(ellipse(0, 0, 5, 5), ellipse(0, 0, 1, 1), true)]
    fn test_collide_circles(
        #[case] a: PositionedEllipse,
        #[case] b: PositionedEllipse,
        #[case] expected: bool,
    ) {
        assert_eq!(collide_ellipses(&a, &b), expected);
        assert_eq!(collide_ellipses(&b, &a), expected);
    }

    #[rstest]
    #[case::overlapping_along_x(ellipse(0, 0, 10, 4), ellipse(15, 0, 6, 3), true)]
    #[case::overlapping_along_y(ellipse(0, 0, 3, 8), ellipse(0, 10, 6, 4), true)]
    #[case::separated_bounding_boxes(ellipse(0, 0, 10, 4), ellipse(40, 0, 6, 3), false)]
    #[case::enclosing(ellipse(0, 0, 2, 1), ellipse(0, 0, 30, 20), true)]
    #[case::enclosed(ellipse(0, 0, 30, 20), ellipse(1, 1, 2, 1), true)]
    #[case::corners_of_boxes_only(ellipse(0, 0, 10, 4), ellipse(18, 7, 8, 3), false)]
    fn test_collide_ellipses(
        #[case] a: PositionedEllipse,
        #[case] b: PositionedEllipse,
        #[case] expected: bool,
    ) {
        assert_eq!(collide_ellipses(&a, &b), expected);
    }

    #[test]
    fn test_collide_ellipses_is_repeatable() {
        let a = ellipse(3, -2, 17, 5);
        let b = ellipse(19, 6, 4, 9);
        let first = collide_ellipses(&a, &b);
        for _ in 0..10 {
            assert_eq!(collide_ellipses(&a, &b), first);
        }
    }

    #[test]
    fn test_circle_frame() {
        let frame = CircleFrame::new(&ellipse(10, 10, 2, 6), &ellipse(13, 14, 4, 2));
        // Scaling by (2, 4) turns the second ellipse into a circle of radius 8 centred on (6, 16),
        // and the first one into radii (4, 24), so the axes are swapped.
        assert_abs_diff_eq!(frame.semi_major, 24.0);
        assert_abs_diff_eq!(frame.semi_minor, 4.0);
        assert_abs_diff_eq!(frame.circle_radius, 8.0);
        assert_abs_diff_eq!(frame.circle_center.x, 16.0);
        assert_abs_diff_eq!(frame.circle_center.y, 6.0);
        assert_abs_diff_eq!(frame.linear_eccentricity(), 560.0_f64.sqrt());
    }

    #[test]
    fn test_circle_frame_samples() {
        let frame = CircleFrame::new(&ellipse(0, 0, 2, 1), &ellipse(100, 0, 1, 1));
        let samples = frame.samples().collect::<Vec<_>>();
        assert_eq!(samples.len(), 4);
        assert_abs_diff_eq!(samples[0].x, -2.0);
        assert_abs_diff_eq!(samples[3].x, 2.0);
        assert!(samples.iter().all(|s| s.y == 0.0));
    }

    #[test]
    fn test_circle_frame_projection() {
        let frame = CircleFrame::new(&ellipse(0, 0, 4, 2), &ellipse(0, 10, 3, 3));
        let projected = frame.project_on_circle(Point2::new(0.0, 0.0));
        assert_abs_diff_eq!(projected.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projected.y, 21.0, epsilon = 1e-9);
        assert!(!frame.ellipse_contains(projected));
    }

    #[test]
    fn test_collide_solids() {
        let player = Solid::ellipse(4, 4);
        let wall = Solid::rectangle(16, 16);
        let pillar = Solid::new(
            vec![PositionedEllipse::new(Position::new(8, 8), Ellipse::new(3, 3))],
            vec![],
        )
        .unwrap();

        let player_at = |x, y| PositionedSolid::new(Position::new(x, y), &player);
        let wall_at = PositionedSolid::new(Position::new(16, 0), &wall);
        let pillar_at = PositionedSolid::new(Position::new(0, 16), &pillar);

        assert!(!collide_solids(&player_at(8, 0), &wall_at));
        assert!(collide_solids(&player_at(9, 0), &wall_at));
        assert!(collide_solids(&wall_at, &player_at(9, 0)));
        assert!(collide_solids(&player_at(2, 16), &pillar_at));
        assert!(!collide_solids(&player_at(0, 0), &pillar_at));
    }

    #[test]
    fn test_collide_solids_checks_every_shape() {
        let composite = Solid::new(
            vec![PositionedEllipse::new(Position::new(4, 4), Ellipse::new(4, 4))],
            vec![rectangle(8, 2, 10, 4)],
        )
        .unwrap();
        let wall = Solid::rectangle(16, 16);
        let composite_at = PositionedSolid::new(Position::new(0, 0), &composite);
        let wall_at = |x, y| PositionedSolid::new(Position::new(x, y), &wall);

        assert!(collide_solids(&composite_at, &wall_at(17, 0)));
        assert!(collide_solids(&wall_at(17, 0), &composite_at));
        assert!(!collide_solids(&composite_at, &wall_at(18, 0)));
        assert!(!collide_solids(&composite_at, &wall_at(0, 8)));
    }

    #[rstest]
    #[case::rectangles(rectangle(0, 0, 10, 10).into(), rectangle(9, 9, 10, 10).into(), true)]
    #[case::rectangle_ellipse(rectangle(3, 3, 10, 10).into(), ellipse(0, 0, 5, 5).into(), true)]
    #[case::rectangle_ellipse_apart(rectangle(4, 4, 10, 10).into(), ellipse(0, 0, 5, 5).into(), false)]
    #[case::ellipses(ellipse(0, 0, 5, 5).into(), ellipse(8, 0, 3, 3).into(), true)]
    fn test_shape_has_intersection(#[case] a: Shape, #[case] b: Shape, #[case] expected: bool) {
        assert_eq!(a.has_intersection(&b), expected);
        assert_eq!(b.has_intersection(&a), expected);
    }
}
