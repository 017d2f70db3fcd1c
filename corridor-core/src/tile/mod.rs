mod tile_ops;

pub use tile_ops::{point_to_tile, tile_url, tile_urls_for_bbox, tiles_for_bbox, TileCoord};
