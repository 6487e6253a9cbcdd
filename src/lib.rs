//! # `tilemerge` main library
//!
//! Merges the tile layers of one or more FML levels into a single FSON level.
//! Tile-maps that share a z-order become one layer, with the source levels
//! set beside each other and a margin of empty tiles between them.
//!
//! ## Pipeline
//!
//! Each stage fully materializes its output before the next stage runs:
//! * `fml` extracts `[tile_map]` tags and parses their `key="value"` attributes
//! * `level` splits the tiles into grids and bounds each level in tile units
//! * `layer` filters by z-order and combines the grids, one layer per z-order
//! * `fson` renders the layers inside the FSON level template
//!
//! The command line grammar is in `cli`, the front end is in `commands`.

pub mod fml;
pub mod level;
pub mod layer;
pub mod fson;
pub mod commands;
pub mod cli;

#[cfg(test)]
mod merge_test;

use log::{info,warn,error};
use level::BoundedLevel;
use layer::MergedLayer;

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Width and height of a tile in pixels.
pub const TILE_SIZE: i32 = 16;
/// Empty columns left after each source level within a merged layer.
pub const MARGIN: usize = 5;

/// Run the whole merge on raw level texts.
/// An empty `zorders` slice keeps every z-order.
pub fn merge_levels<S: AsRef<str>>(texts: &[S], zorders: &[i32]) -> Result<Vec<MergedLayer>,DYNERR> {
    let mut parsed = Vec::new();
    for (idx,text) in texts.iter().enumerate() {
        let maps = match fml::parse_level(text.as_ref()) {
            Ok(maps) => maps,
            Err(e) => {
                error!("level {} could not be parsed: {}",idx+1,e);
                return Err(Box::new(e));
            }
        };
        match maps.len() {
            0 => warn!("level {} has no [tile_map] tags",idx+1),
            n => info!("found {} tile maps in level {}",n,idx+1)
        }
        parsed.push(maps);
    }
    let filtered = layer::filter_zorders(parsed,zorders);
    let bounded: Vec<BoundedLevel> = filtered.into_iter().map(BoundedLevel::new).collect();
    let layers = layer::combine(&bounded);
    info!("merged {} levels into {} layers",bounded.len(),layers.len());
    Ok(layers)
}
