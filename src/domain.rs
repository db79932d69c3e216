//! The domain module encapsulates the core logic. It defines solids made of rectangles and
//! ellipses, the tile grid of a level, and the rules deciding where a moving solid ends up when it
//! runs into the tiles of that grid.
//!
//! The module has no dependency on Bevy, so the movement resolution can be driven by any game loop.

mod basis;
mod behavior;
pub mod collision;
mod level;
mod navigator;
mod shape;
mod solid;

pub use basis::{Position, Vector};
pub use behavior::{Direction, SideStepTracker, Stroll};
pub use level::{Level, LevelError, TileSolidMapper};
pub use navigator::{clamp_to_bounds, MoveOptions, MoveResult, Navigator};
pub use shape::{Ellipse, PositionedEllipse, PositionedRectangle, Rectangle, Shape};
pub use solid::{PositionedSolid, Solid, SolidError, SolidIndex, Solids};
