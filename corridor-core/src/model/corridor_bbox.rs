use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

use crate::CorridorReportError;

/// axis-aligned lat/lon rectangle surrounding the corridor. all four
/// bounds are inclusive.
#[derive(Clone, Debug, Serialize, Deserialize, Copy, PartialEq)]
pub struct CorridorBBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl CorridorBBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    pub fn validate(&self) -> Result<(), CorridorReportError> {
        let finite = [self.min_lat, self.max_lat, self.min_lon, self.max_lon]
            .iter()
            .all(|v| v.is_finite());
        let in_range = [self.min_lat, self.max_lat]
            .iter()
            .all(|lat| (-90.0..=90.0).contains(lat))
            && [self.min_lon, self.max_lon]
                .iter()
                .all(|lon| (-180.0..=180.0).contains(lon));
        if !finite || !in_range || self.max_lat < self.min_lat || self.max_lon < self.min_lon {
            return Err(CorridorReportError::InvalidUserInput(format!(
                "The provided corridor bbox is invalid: {self:?}"
            )));
        }

        Ok(())
    }

    pub fn as_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord {
                x: self.min_lon,
                y: self.min_lat,
            },
            Coord {
                x: self.max_lon,
                y: self.max_lat,
            },
        )
    }
}

impl std::fmt::Display for CorridorBBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat [{}, {}] lon [{}, {}]",
            self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let inverted_lat = CorridorBBox::new(44.0, 43.0, -79.5, -78.6);
        assert!(inverted_lat.validate().is_err());
        let inverted_lon = CorridorBBox::new(43.0, 44.0, -78.6, -79.5);
        assert!(inverted_lon.validate().is_err());
        let nan = CorridorBBox::new(f64::NAN, 44.0, -79.5, -78.6);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_coordinates() {
        let south_of_pole = CorridorBBox::new(-95.0, -80.0, 0.0, 10.0);
        assert!(south_of_pole.validate().is_err());
        let north_of_pole = CorridorBBox::new(80.0, 90.5, 0.0, 10.0);
        assert!(north_of_pole.validate().is_err());
        let past_antimeridian = CorridorBBox::new(43.0, 44.0, 170.0, 190.0);
        assert!(past_antimeridian.validate().is_err());
        let whole_world = CorridorBBox::new(-90.0, 90.0, -180.0, 180.0);
        assert!(whole_world.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_degenerate_box() {
        let point_box = CorridorBBox::new(43.8, 43.8, -79.0, -79.0);
        assert!(point_box.validate().is_ok());
    }
}
