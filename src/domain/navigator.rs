//! Movement of a solid through the tiles of a level.
//!
//! A move is resolved in one pass: clamp to the level, go straight to the destination when it is
//! free, otherwise stick to the obstacle, then slide or side-step around it when allowed.

use log::{trace, warn};

use super::{
    collision::collide_solids, Level, Position, PositionedSolid, Solid, Solids, Vector,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOptions {
    /// Lookahead in pixels when probing for a way around an obstacle. Zero disables it.
    pub sidestep_distance: i64,
    /// Pixels moved per tick toward a way around an obstacle.
    pub sidestep_speed: i64,
    pub allow_slide: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub position: Position,
    pub side_stepped: bool,
}

impl MoveResult {
    fn moved(position: Position) -> Self {
        Self {
            position,
            side_stepped: false,
        }
    }

    fn side_stepped(position: Position) -> Self {
        Self {
            position,
            side_stepped: true,
        }
    }
}

/// Moves solids to the closest reachable position. Holds nothing but a view of the solids the
/// tiles are mapped to.
#[derive(Clone, Copy, Debug)]
pub struct Navigator<'a> {
    solids: &'a Solids,
}

impl<'a> Navigator<'a> {
    pub fn new(solids: &'a Solids) -> Self {
        Self { solids }
    }

    pub fn move_by(
        &self,
        positioned_solid: &PositionedSolid,
        desired_displacement: Vector,
        level: &Level,
        options: MoveOptions,
    ) -> MoveResult {
        let current = positioned_solid.position();
        let destination = clamp_to_bounds(&positioned_solid.translated(desired_displacement), level);

        if destination == current {
            return MoveResult::moved(current);
        }

        if !self.collides_with_tiles(&positioned_solid.moved_to(destination), level) {
            return MoveResult::moved(destination);
        }

        let nearest = self.find_nearest_position_to_destination(positioned_solid, destination, level);
        if nearest != current {
            trace!("stopped at {nearest:?} on the way to {destination:?}");
            return MoveResult::moved(nearest);
        }

        if options.allow_slide {
            if let Some(result) = self.slide(positioned_solid, destination, level) {
                return result;
            }
        }

        if options.sidestep_distance > 0 {
            let side_stepped = self.bypass(positioned_solid, desired_displacement, level, options);
            if side_stepped != current {
                trace!("side-stepped from {current:?} to {side_stepped:?}");
                return MoveResult::side_stepped(side_stepped);
            }
        }

        trace!("blocked at {current:?}");
        MoveResult::moved(current)
    }

    /// Walks from the solid's position toward `destination` one step per pixel of the dominant
    /// axis and returns the last position before the first collision. Only positions on that line
    /// are considered.
    pub fn find_nearest_position_to_destination(
        &self,
        positioned_solid: &PositionedSolid,
        destination: Position,
        level: &Level,
    ) -> Position {
        let displacement = destination - positioned_solid.position();
        let steps = displacement.chebyshev_length();
        let partial = |step: i64| {
            Vector::new(
                step * displacement.dx() / steps,
                step * displacement.dy() / steps,
            )
        };

        for step in 1..=steps {
            if self.collides_with_tiles(&positioned_solid.translated(partial(step)), level) {
                return positioned_solid.position() + partial(step - 1);
            }
        }

        destination
    }

    pub fn collides_with_tiles(&self, positioned_solid: &PositionedSolid, level: &Level) -> bool {
        let bounding_box = positioned_solid.absolute_bounding_box();
        let (tile_width, tile_height) = (level.tile_width(), level.tile_height());
        let columns = bounding_box.x().div_euclid(tile_width)
            ..=(bounding_box.right() - 1).div_euclid(tile_width);
        let rows = bounding_box.y().div_euclid(tile_height)
            ..=(bounding_box.bottom() - 1).div_euclid(tile_height);

        rows.flat_map(|y| columns.clone().map(move |x| (x, y)))
            .any(|(x, y)| self.collides_with_tile(positioned_solid, x, y, level))
    }

    fn collides_with_tile(
        &self,
        positioned_solid: &PositionedSolid,
        x: i64,
        y: i64,
        level: &Level,
    ) -> bool {
        let Some(solid) = level
            .tile_index(x, y)
            .and_then(|tile_index| self.solid_for_tile_index(tile_index, level))
        else {
            return false;
        };

        let tile_position = Position::new(x * level.tile_width(), y * level.tile_height());
        collide_solids(positioned_solid, &PositionedSolid::new(tile_position, solid))
    }

    fn solid_for_tile_index(&self, tile_index: u16, level: &Level) -> Option<&'a Solid> {
        let solid_index = level
            .tile_solid_mapper()
            .solid_index_for_tile_index(tile_index)?;
        let solid = self.solids.get(&solid_index);
        if solid.is_none() {
            warn!("tile {tile_index} is mapped to unknown solid {solid_index}, treating it as passable");
        }
        solid
    }

    /// Slides along each axis, then side-steps the destination by one pixel in each direction.
    /// The order matters and is kept as is.
    fn slide(
        &self,
        positioned_solid: &PositionedSolid,
        destination: Position,
        level: &Level,
    ) -> Option<MoveResult> {
        let current = positioned_solid.position();
        let candidates = [
            (destination.with_y(current.y()), false),
            (destination.with_x(current.x()), false),
            (destination + Vector::new(1, 0), true),
            (destination - Vector::new(1, 0), true),
            (destination + Vector::new(0, 1), true),
            (destination - Vector::new(0, 1), true),
        ];

        for (candidate, side_stepped) in candidates {
            let candidate = clamp_to_bounds(&positioned_solid.moved_to(candidate), level);
            if candidate == current {
                continue;
            }

            let reached = if self.collides_with_tiles(&positioned_solid.moved_to(candidate), level) {
                self.find_nearest_position_to_destination(positioned_solid, candidate, level)
            } else {
                candidate
            };

            if reached != current {
                trace!("slid from {current:?} to {reached:?}");
                return Some(MoveResult {
                    position: reached,
                    side_stepped,
                });
            }
        }

        None
    }

    /// Applies the same desired displacement from parallax positions, `sidestep_distance` pixels
    /// away orthogonally to it. When one of them makes progress, moves `sidestep_speed` pixels
    /// toward it. Only axis-aligned displacements can be bypassed.
    fn bypass(
        &self,
        positioned_solid: &PositionedSolid,
        desired_displacement: Vector,
        level: &Level,
        options: MoveOptions,
    ) -> Position {
        let current = positioned_solid.position();
        let axes = [
            (desired_displacement.dx() == 0, Vector::new(1, 0)),
            (desired_displacement.dy() == 0, Vector::new(0, 1)),
        ];

        for (_, axis) in axes.into_iter().filter(|(applicable, _)| *applicable) {
            for direction in [-1, 1] {
                let parallax = clamp_to_bounds(
                    &positioned_solid.translated(axis * (options.sidestep_distance * direction)),
                    level,
                );
                let parallax_solid = positioned_solid.moved_to(parallax);
                if self.collides_with_tiles(&parallax_solid, level) {
                    continue;
                }

                let parallax_final = self
                    .move_by(&parallax_solid, desired_displacement, level, MoveOptions::default())
                    .position;
                if parallax_final == parallax {
                    continue;
                }

                let side_stepped = clamp_to_bounds(
                    &positioned_solid.translated(axis * (options.sidestep_speed * direction)),
                    level,
                );
                if side_stepped != current
                    && !self.collides_with_tiles(&positioned_solid.moved_to(side_stepped), level)
                {
                    return side_stepped;
                }
            }
        }

        current
    }
}

/// Position of the solid once its bounding box is pushed back inside the level.
pub fn clamp_to_bounds(positioned_solid: &PositionedSolid, level: &Level) -> Position {
    let absolute = positioned_solid.absolute_bounding_box();
    let local = positioned_solid.bounding_box();
    Position::new(
        clamp_axis(absolute.x(), absolute.width(), level.width_in_pixels()) - local.x(),
        clamp_axis(absolute.y(), absolute.height(), level.height_in_pixels()) - local.y(),
    )
}

fn clamp_axis(position: i64, size: i64, upper_bound: i64) -> i64 {
    if position < 0 {
        0
    } else if position + size >= upper_bound {
        upper_bound - size
    } else {
        position
    }
}
