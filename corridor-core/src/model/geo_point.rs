use geo::Coord;
use serde::{Deserialize, Serialize};

/// a WGS84 position in degrees. feeds encode locations as a
/// two-element `[lat, lon]` array, which is also how it is written back out.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from(value: [f64; 2]) -> Self {
        let [lat, lon] = value;
        Self { lat, lon }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(value: GeoPoint) -> Self {
        [value.lat, value.lon]
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(value: GeoPoint) -> Self {
        Coord {
            x: value.lon,
            y: value.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_lat_lon_array() {
        let point: GeoPoint = serde_json::from_str("[43.77, -79.23]").unwrap();
        assert_eq!(point, GeoPoint::new(43.77, -79.23));
    }

    #[test]
    fn test_coord_is_lon_lat() {
        let coord: Coord<f64> = GeoPoint::new(43.77, -79.23).into();
        assert_eq!(coord.x, -79.23);
        assert_eq!(coord.y, 43.77);
    }
}
