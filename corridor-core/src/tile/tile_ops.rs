use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::model::CorridorBBox;

/// latitude at which the Web-Mercator square ends
const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// slippy-map tile address. `y` grows southward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

/// Web-Mercator tile containing the given position at zoom `z`. indices
/// are clamped into the valid `[0, 2^z - 1]` range so positions on the
/// antimeridian or past the Mercator latitude limit stay addressable.
pub fn point_to_tile(lat: f64, lon: f64, z: u8) -> TileCoord {
    let n = 2f64.powi(z as i32);
    let max_index = n - 1.0;
    let lat_rad = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT) * PI / 180.0;

    let x = ((lon + 180.0) / 360.0 * n).floor();
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n).floor();

    TileCoord {
        x: clamp_index(x, max_index),
        y: clamp_index(y, max_index),
        z,
    }
}

fn clamp_index(value: f64, max_index: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, max_index) as u32
}

/// every tile covering the bbox at zoom `z`, x-major then y.
pub fn tiles_for_bbox(bbox: &CorridorBBox, z: u8) -> Vec<TileCoord> {
    let nw = point_to_tile(bbox.max_lat, bbox.min_lon, z);
    let se = point_to_tile(bbox.min_lat, bbox.max_lon, z);
    (nw.x..=se.x)
        .flat_map(|x| (nw.y..=se.y).map(move |y| TileCoord { x, y, z }))
        .collect()
}

/// renders a tile url from a template with `{x}`, `{y}` and `{z}` placeholders.
pub fn tile_url(template: &str, tile: &TileCoord) -> String {
    template
        .replace("{x}", &tile.x.to_string())
        .replace("{y}", &tile.y.to_string())
        .replace("{z}", &tile.z.to_string())
}

/// urls of every tile covering the bbox at zoom `z`. no imagery is fetched.
pub fn tile_urls_for_bbox(bbox: &CorridorBBox, z: u8, template: &str) -> Vec<String> {
    tiles_for_bbox(bbox, z)
        .iter()
        .map(|t| tile_url(template, t))
        .collect()
}
