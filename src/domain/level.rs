//! Tile grid a level is made of, and the mapping from tiles to the solids blocking them.

use std::collections::BTreeMap;

use thiserror::Error;

use super::SolidIndex;

/// Maps tile indices to solid indices. Tiles without a solid are passable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileSolidMapper {
    tiles_to_solids: BTreeMap<u16, SolidIndex>,
}

impl TileSolidMapper {
    pub fn new(tiles_to_solids: BTreeMap<u16, SolidIndex>) -> Self {
        Self { tiles_to_solids }
    }

    pub fn contains(&self, tile_index: u16) -> bool {
        self.tiles_to_solids.contains_key(&tile_index)
    }

    pub fn solid_index_for_tile_index(&self, tile_index: u16) -> Option<SolidIndex> {
        self.tiles_to_solids.get(&tile_index).copied()
    }
}

impl FromIterator<(u16, SolidIndex)> for TileSolidMapper {
    fn from_iter<T: IntoIterator<Item = (u16, SolidIndex)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LevelError {
    #[error("expected {expected} tiles for a {width}x{height} level, got {actual}")]
    TileCount {
        width: i64,
        height: i64,
        expected: usize,
        actual: usize,
    },
    #[error("invalid {0}, it must be positive")]
    InvalidDimension(&'static str),
}

/// A row-major grid of tile indices with a fixed tile size in pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    tiles: Vec<u16>,
    width_in_tiles: i64,
    height_in_tiles: i64,
    tile_width: i64,
    tile_height: i64,
    tile_solid_mapper: TileSolidMapper,
}

impl Level {
    pub fn new(
        tiles: Vec<u16>,
        width_in_tiles: i64,
        height_in_tiles: i64,
        tile_width: i64,
        tile_height: i64,
        tile_solid_mapper: TileSolidMapper,
    ) -> Result<Self, LevelError> {
        for (value, name) in [
            (width_in_tiles, "width in tiles"),
            (height_in_tiles, "height in tiles"),
            (tile_width, "tile width"),
            (tile_height, "tile height"),
        ] {
            if value <= 0 {
                return Err(LevelError::InvalidDimension(name));
            }
        }

        let expected = (width_in_tiles * height_in_tiles) as usize;
        if tiles.len() != expected {
            return Err(LevelError::TileCount {
                width: width_in_tiles,
                height: height_in_tiles,
                expected,
                actual: tiles.len(),
            });
        }

        Ok(Self {
            tiles,
            width_in_tiles,
            height_in_tiles,
            tile_width,
            tile_height,
            tile_solid_mapper,
        })
    }

    pub fn width_in_tiles(&self) -> i64 {
        self.width_in_tiles
    }

    pub fn height_in_tiles(&self) -> i64 {
        self.height_in_tiles
    }

    pub fn tile_width(&self) -> i64 {
        self.tile_width
    }

    pub fn tile_height(&self) -> i64 {
        self.tile_height
    }

    pub fn width_in_pixels(&self) -> i64 {
        self.width_in_tiles * self.tile_width
    }

    pub fn height_in_pixels(&self) -> i64 {
        self.height_in_tiles * self.tile_height
    }

    pub fn tile_solid_mapper(&self) -> &TileSolidMapper {
        &self.tile_solid_mapper
    }

    /// Tile at column `x` and row `y`, or `None` outside of the grid.
    pub fn tile_index(&self, x: i64, y: i64) -> Option<u16> {
        if !(0..self.width_in_tiles).contains(&x) || !(0..self.height_in_tiles).contains(&y) {
            return None;
        }
        self.tiles
            .get((y * self.width_in_tiles + x) as usize)
            .copied()
    }
}
