//! # FML Module
//!
//! FML is the tagged plain-text level format, e.g.
//! ```text
//! [tile_map]
//! x="-32"
//! y="0"
//! zorder="-2"
//! tiles="1,2
//! 3,4"
//! [/tile_map]
//! ```
//! Tags do not nest, and attribute values
//! cannot contain quote characters.

#[cfg(test)]
mod extract_test;
#[cfg(test)]
mod attribute_test;

use std::collections::HashMap;
use thiserror::Error;
use log::{debug,warn};
use crate::level::TileMap;

#[derive(Error,Debug)]
pub enum Error {
    #[error("attribute `{key}` should be an integer, found `{value}`")]
    BadInteger { key: String, value: String }
}

/// Return the substrings strictly between each `start`...`end` pair, scanning left to right.
/// The scan stops at the first `start` that has no `end` after it.
/// Tags do not nest, the first `end` after a `start` closes it.
pub fn extract_from_to<'a>(start: &str, end: &str, data: &'a str) -> Vec<&'a str> {
    let mut found = Vec::new();
    if start.len()==0 {
        return found;
    }
    let mut ptr = 0;
    while let Some(open_at) = data[ptr..].find(start) {
        let body_beg = ptr + open_at + start.len();
        let body_end = match data[body_beg..].find(end) {
            Some(close_at) => body_beg + close_at,
            None => break
        };
        found.push(&data[body_beg..body_end]);
        ptr = body_end + end.len();
    }
    found
}

/// Return the bodies of every `[tag]...[/tag]` region in `data`.
pub fn extract_tags<'a>(tag: &str, data: &'a str) -> Vec<&'a str> {
    let start = ["[",tag,"]"].concat();
    let end = ["[/",tag,"]"].concat();
    extract_from_to(&start,&end,data)
}

/// Parse whitespace separated `key="value"` pairs, keys and values are trimmed.
/// A repeated key keeps its last value.
/// Parsing stops quietly when there is no further `=` followed by a quote pair.
pub fn parse_tag_contents(data: &str) -> HashMap<String,String> {
    let mut ans = HashMap::new();
    let mut ptr = 0;
    while data[ptr..].trim().len() > 0 {
        let equals_at = match data[ptr..].find('=') {
            Some(i) => ptr + i,
            None => {
                warn!("ignoring trailing text `{}`",data[ptr..].trim());
                break;
            }
        };
        let open_quote = match data[equals_at+1..].find('"') {
            Some(i) => equals_at + 1 + i,
            None => {
                warn!("attribute `{}` has no quoted value",data[ptr..equals_at].trim());
                break;
            }
        };
        let close_quote = match data[open_quote+1..].find('"') {
            Some(i) => open_quote + 1 + i,
            None => {
                warn!("attribute `{}` has an unterminated value",data[ptr..equals_at].trim());
                break;
            }
        };
        let key = data[ptr..equals_at].trim().to_string();
        let val = data[open_quote+1..close_quote].trim().to_string();
        ans.insert(key,val);
        ptr = close_quote + 1;
    }
    ans
}

/// Parse an optional integer attribute, absent means 0.
fn int_attribute(attributes: &HashMap<String,String>, key: &str) -> Result<i32,Error> {
    match attributes.get(key) {
        Some(val) => val.parse::<i32>().map_err(|_| Error::BadInteger {
            key: key.to_string(),
            value: val.to_string()
        }),
        None => Ok(0)
    }
}

/// Build a tile-map from its parsed attributes.
pub fn tile_map_from_attributes(attributes: &HashMap<String,String>) -> Result<TileMap,Error> {
    let x = int_attribute(attributes,"x")?;
    let y = int_attribute(attributes,"y")?;
    let zorder = int_attribute(attributes,"zorder")?;
    let tiles = match attributes.get("tiles") {
        Some(raw) => raw.as_str(),
        None => ""
    };
    Ok(TileMap::new(x,y,zorder,tiles))
}

/// Find every `[tile_map]` in a level and parse it.
pub fn parse_level(level: &str) -> Result<Vec<TileMap>,Error> {
    let mut ans = Vec::new();
    for body in extract_tags("tile_map",level) {
        let attributes = parse_tag_contents(body);
        let tile_map = tile_map_from_attributes(&attributes)?;
        debug!("tile map at ({},{}) zorder {} with {} rows",tile_map.x,tile_map.y,tile_map.zorder,tile_map.height());
        ans.push(tile_map);
    }
    Ok(ans)
}
