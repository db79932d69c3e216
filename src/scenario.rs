//! Demo level: a walled room with a few obstacles, a player and a couple of strollers.

use bevy::prelude::*;
use thiserror::Error;

use crate::{
    config::SimulationConfig,
    domain::{
        Level, LevelError, Position, PositionedRectangle, Rectangle, Solid, SolidError,
        SolidIndex, Solids, TileSolidMapper,
    },
    resource::{ConfigRes, LevelRes, RngRes, SolidsRes},
    simulator::{Body, KeyboardControlled, Strolling},
};

const TILE_SIZE: i64 = 16;

const ROWS: [&str; 12] = [
    "####################",
    "#..................#",
    "#..o.....=====.....#",
    "#..................#",
    "#......#.....o.....#",
    "#......#...........#",
    "#......#####.......#",
    "#..............o...#",
    "#..o...............#",
    "#.........=====....#",
    "#..................#",
    "####################",
];

/// Tile character, tile index and the solid blocking the tile if any.
const TILES: [(char, u16, Option<SolidIndex>); 4] = [
    ('.', 0, None),
    ('#', 1, Some(WALL_SOLID)),
    ('o', 2, Some(PILLAR_SOLID)),
    ('=', 3, Some(LOW_WALL_SOLID)),
];

const WALL_SOLID: SolidIndex = 0;
const PILLAR_SOLID: SolidIndex = 1;
const LOW_WALL_SOLID: SolidIndex = 2;
const PLAYER_SOLID: SolidIndex = 10;
const STROLLER_SOLID: SolidIndex = 11;

const PLAYER_START: Position = Position::new(24, 24);
const STROLLER_STARTS: [Position; 2] = [Position::new(162, 50), Position::new(242, 130)];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("unknown tile {0:?}")]
    UnknownTile(char),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Solid(#[from] SolidError),
}

pub struct Scenario {
    level: Level,
    solids: Solids,
}

impl Scenario {
    pub fn demo() -> Result<Self, ScenarioError> {
        Ok(Self {
            level: level()?,
            solids: solids()?,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn solids(&self) -> &Solids {
        &self.solids
    }

    /// Inserts the resources of the simulation and spawns its entities.
    pub fn setup(self, app: &mut App, config: SimulationConfig) {
        let tracker = config.movement.side_step_tracker();
        let stroll = config.stroll.stroll();

        app.insert_resource(RngRes::from_seed(config.simulation.seed))
            .insert_resource(ConfigRes::from(config))
            .insert_resource(LevelRes::from(self.level))
            .insert_resource(SolidsRes::from(self.solids));

        app.world.spawn((
            Name::new("player"),
            Body {
                solid: PLAYER_SOLID,
                position: PLAYER_START,
            },
            KeyboardControlled(tracker),
        ));
        for (i, position) in STROLLER_STARTS.into_iter().enumerate() {
            app.world.spawn((
                Name::new(format!("stroller {i}")),
                Body {
                    solid: STROLLER_SOLID,
                    position,
                },
                Strolling(stroll),
            ));
        }
    }
}

fn level() -> Result<Level, ScenarioError> {
    let tiles = ROWS
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| {
            TILES
                .iter()
                .find(|(tile_char, _, _)| *tile_char == c)
                .map(|(_, tile_index, _)| *tile_index)
                .ok_or(ScenarioError::UnknownTile(c))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mapper = TILES
        .iter()
        .filter_map(|(_, tile_index, solid)| solid.map(|solid| (*tile_index, solid)))
        .collect::<TileSolidMapper>();

    Ok(Level::new(
        tiles,
        ROWS[0].len() as i64,
        ROWS.len() as i64,
        TILE_SIZE,
        TILE_SIZE,
        mapper,
    )?)
}

fn solids() -> Result<Solids, ScenarioError> {
    let low_wall = Solid::new(
        vec![],
        vec![PositionedRectangle::new(
            Position::new(0, TILE_SIZE / 2),
            Rectangle::new(TILE_SIZE, TILE_SIZE / 2),
        )],
    )?;

    Ok(Solids::from_iter([
        (WALL_SOLID, Solid::rectangle(TILE_SIZE, TILE_SIZE)),
        (PILLAR_SOLID, Solid::ellipse(TILE_SIZE / 2, TILE_SIZE / 2)),
        (LOW_WALL_SOLID, low_wall),
        (PLAYER_SOLID, Solid::rectangle(12, 12)),
        (STROLLER_SOLID, Solid::ellipse(6, 6)),
    ]))
}
