//! # Layer Module
//!
//! Tile-maps that share a z-order are merged into one layer.
//! Within a layer the source levels are set side by side in the order they
//! were given, each followed by a `MARGIN` of empty columns.
//!
//! Level offsets are not used for placement, only the level extents are.


use std::collections::BTreeSet;
use log::{debug,warn};
use crate::level::{BoundedLevel,Grid,TileMap};
use crate::MARGIN;

#[derive(Debug,Clone,PartialEq)]
pub struct MergedLayer {
    pub zorder: i32,
    /// running width, advanced by each level's width plus the margin
    pub width: usize,
    /// tallest level seen so far
    pub height: usize,
    pub rows: Grid
}

impl MergedLayer {
    pub fn new(zorder: i32) -> Self {
        Self {
            zorder,
            width: 0,
            height: 0,
            rows: Vec::new()
        }
    }
    /// Add rows until there are `height`, and right pad every row to `width` with empty cells.
    fn square_to(&mut self, width: usize, height: usize) {
        while self.rows.len() < height {
            self.rows.push(Vec::new());
        }
        for row in self.rows.iter_mut() {
            while row.len() < width {
                row.push(String::new());
            }
        }
    }
    /// Append a tile-map coming from a level with the given extent.
    fn append(&mut self, map: &TileMap, level_width: usize, level_height: usize) {
        self.height = self.height.max(level_height);
        self.square_to(self.width,self.height);
        for (row_no,row) in map.tiles.iter().enumerate() {
            self.rows[row_no].extend(row.iter().cloned());
        }
        debug!("zorder {}: placed {}x{} map at column {}",self.zorder,map.width(),map.height(),self.width);
        self.width += level_width + MARGIN;
    }
    /// Right pad every row to the longest row, leaving the grid rectangular.
    fn square_up(&mut self) {
        let w = self.grid_width();
        self.square_to(w,self.height);
    }
    /// length of the longest row actually present
    pub fn grid_width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }
}

/// Distinct z-orders of every tile-map in every level, ascending.
pub fn collect_zorders(levels: &[BoundedLevel]) -> Vec<i32> {
    let zs: BTreeSet<i32> = levels.iter()
        .flat_map(|level| level.maps.iter())
        .map(|map| map.zorder)
        .collect();
    zs.into_iter().collect()
}

/// Keep only tile-maps whose z-order is listed, an empty list keeps everything.
/// Levels stay in place even if all their maps are dropped.
pub fn filter_zorders(levels: Vec<Vec<TileMap>>, zorders: &[i32]) -> Vec<Vec<TileMap>> {
    if zorders.len()==0 {
        return levels;
    }
    let ans: Vec<Vec<TileMap>> = levels.into_iter()
        .map(|maps| maps.into_iter().filter(|map| zorders.contains(&map.zorder)).collect())
        .collect();
    if ans.iter().all(|maps| maps.len()==0) {
        warn!("no tile maps matched zorders {:?}",zorders);
    }
    ans
}

/// Produce one merged layer per distinct z-order, sorted by z-order.
/// Every row of a merged layer has the same length.
pub fn combine(levels: &[BoundedLevel]) -> Vec<MergedLayer> {
    let zs = collect_zorders(levels);
    let mut layers: Vec<MergedLayer> = zs.iter().map(|z| MergedLayer::new(*z)).collect();
    for level in levels {
        let (w,h) = (level.width(),level.height());
        debug!("level offset {:?}, extent {}x{}",level.offset(),w,h);
        for map in &level.maps {
            // every zorder was collected above
            if let Ok(idx) = zs.binary_search(&map.zorder) {
                layers[idx].append(map,w,h);
            }
        }
    }
    for layer in layers.iter_mut() {
        layer.square_up();
    }
    layers
}
