//! # Level Module
//!
//! Tile-maps arrive with pixel origins and a raw tile string.
//! Here the tile string becomes a grid of cells, and each level gets a
//! bounding box in tile units.


use log::debug;
use crate::TILE_SIZE;

/// Rows of cells, empty cells are empty strings.  Rows may be ragged.
pub type Grid = Vec<Vec<String>>;

/// Split raw tiles on newlines into rows, and rows on commas into cells.
/// A trailing carriage return is dropped from each row.
pub fn split_tiles(raw: &str) -> Grid {
    raw.split('\n')
        .map(|row| row.strip_suffix('\r').unwrap_or(row))
        .map(|row| row.split(',').map(|cell| cell.to_string()).collect())
        .collect()
}

/// Convert a pixel coordinate to tile units, truncating toward zero.
pub fn to_tile_units(px: i32) -> i32 {
    px / TILE_SIZE
}

#[derive(Debug,Clone,PartialEq)]
pub struct TileMap {
    /// pixel origin
    pub x: i32,
    /// pixel origin
    pub y: i32,
    pub zorder: i32,
    pub tiles: Grid
}

impl TileMap {
    pub fn new(x: i32, y: i32, zorder: i32, raw_tiles: &str) -> Self {
        Self {
            x,
            y,
            zorder,
            tiles: split_tiles(raw_tiles)
        }
    }
    /// length of the longest row
    pub fn width(&self) -> usize {
        self.tiles.iter().map(|row| row.len()).max().unwrap_or(0)
    }
    pub fn height(&self) -> usize {
        self.tiles.len()
    }
    pub fn tile_x(&self) -> i32 {
        to_tile_units(self.x)
    }
    pub fn tile_y(&self) -> i32 {
        to_tile_units(self.y)
    }
}

/// The tile-maps of one level together with the level's extent in tile units.
/// The box always contains the origin.
#[derive(Debug,Clone)]
pub struct BoundedLevel {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
    pub maps: Vec<TileMap>
}

impl BoundedLevel {
    pub fn new(maps: Vec<TileMap>) -> Self {
        let (mut min_x,mut min_y,mut max_x,mut max_y) = (0,0,0,0);
        for map in &maps {
            let (x,y) = (map.tile_x(),map.tile_y());
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x + map.width() as i32);
            max_y = max_y.max(y + map.height() as i32);
            debug!("map at tile ({},{}) size {}x{}",x,y,map.width(),map.height());
        }
        Self { min_x, min_y, max_x, max_y, maps }
    }
    /// Offset of the level's top left corner.
    /// Placement in the merged layer does not use this, levels are laid out in order.
    pub fn offset(&self) -> (i32,i32) {
        (self.min_x,self.min_y)
    }
    pub fn width(&self) -> usize {
        (self.max_x - self.min_x) as usize
    }
    pub fn height(&self) -> usize {
        (self.max_y - self.min_y) as usize
    }
}
