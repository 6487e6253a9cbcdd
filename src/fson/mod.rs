//! # FSON Module
//!
//! Renders merged layers as an FSON level.  Only the `tile_map` array carries
//! information, the rest of the level is boilerplate the editor expects.


use std::collections::BTreeSet;
use std::fmt::Write;
use chrono::NaiveDateTime;
use crate::layer::MergedLayer;
use crate::TILE_SIZE;

/// Scroll speed written for every layer, in percent.
const LAYER_SPEED: i32 = 100;

/// Every distinct cell value in the layer, including the empty cell if present.
pub fn unique_tiles(layer: &MergedLayer) -> BTreeSet<&str> {
    layer.rows.iter()
        .flat_map(|row| row.iter())
        .map(|cell| cell.as_str())
        .collect()
}

/// Body of one `tile_map` object, without the enclosing braces.
pub fn layer_to_string(layer: &MergedLayer) -> String {
    let mut ans = String::new();
    // writing to a String cannot fail
    let _ = write!(ans,"\t\"x_speed\": {},\n\t\"y_speed\": {},\n\t\"x\": 0,\n\t\"y\": 0,\n\t\"zorder\": {},\n\t\"tiles\": \"",
        LAYER_SPEED,LAYER_SPEED,layer.zorder);
    for row in &layer.rows {
        ans += &row.join(",");
        ans += "\n";
    }
    let uniques: Vec<&str> = unique_tiles(layer).into_iter().collect();
    let _ = write!(ans,"\",\t\n\"unique_tiles\": \"{}\",",uniques.join(","));
    ans
}

/// Level dimensions in pixels, twice the widest and tallest layer.
pub fn dimensions(layers: &[MergedLayer]) -> (usize,usize) {
    let w = layers.iter().map(|l| l.width).max().unwrap_or(0);
    let h = layers.iter().map(|l| l.height).max().unwrap_or(0);
    (2 * w * TILE_SIZE as usize, 2 * h * TILE_SIZE as usize)
}

/// The wrapping FSON level.
pub struct Document {
    /// level id, from `--output`
    pub id: String,
    /// session arguments, echoed in the header comment
    pub args: Vec<String>,
    pub generated: NaiveDateTime
}

impl Document {
    pub fn new(id: &str, args: &[String]) -> Self {
        Self {
            id: id.to_string(),
            args: args.to_vec(),
            generated: chrono::Local::now().naive_local()
        }
    }
    /// Session arguments as a bracketed list of single quoted strings.
    pub fn args_list(&self) -> String {
        let quoted: Vec<String> = self.args.iter().map(|a| ["'",a.as_str(),"'"].concat()).collect();
        ["[",quoted.join(", ").as_str(),"]"].concat()
    }
    pub fn header(&self) -> String {
        format!("//Generated by {} on {}. Session args were: {}.",
            env!("CARGO_PKG_NAME"),
            self.generated.format("%Y/%-m/%-d at %-H:%-M"),
            self.args_list())
    }
    pub fn render(&self, layers: &[MergedLayer]) -> String {
        let (w,h) = dimensions(layers);
        let tile_maps = match layers.len() {
            0 => "tile_map: [],".to_string(),
            _ => {
                let bodies: Vec<String> = layers.iter().map(layer_to_string).collect();
                ["tile_map: [{\n",bodies.join("\n},{\n").as_str(),"\n}],"].concat()
            }
        };
        let mut ans = self.header();
        ans += "\n{\n";
        ans += "air_resistance: 20,\n";
        ans += "auto_move_camera: [0,0],\n";
        let _ = writeln!(ans,"dimensions: [0,0,{},{}],",w,h);
        let _ = writeln!(ans,"id: \"{}\",",self.id);
        ans += "music: \"\",\n";
        ans += "preloads: \"\",\n";
        ans += "segment_height: 0,\n";
        ans += "segment_width: 0,\n";
        ans += "gui: \"null\",\n";
        ans += &tile_maps;
        ans += "\ntitle: \"\",\n";
        ans += "version: 1.2,\n";
        ans += "water_resistance: 100,\n";
        ans += "xscale: 100,\n";
        ans += "yscale: 100,\n";
        ans += "serialized_objects: {\n},\n}";
        ans
    }
}
