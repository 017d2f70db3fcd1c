use geo::{Coord, Intersects};

use crate::model::{CameraCandidate, CorridorBBox, GeoPoint, MapIcon};

/// true if the point lies within the corridor bbox, edges included.
pub fn in_corridor(point: &GeoPoint, bbox: &CorridorBBox) -> bool {
    let coord: Coord<f64> = (*point).into();
    bbox.as_rect().intersects(&coord)
}

/// anything carrying a position that can be tested against the corridor.
pub trait Located {
    fn location(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn location(&self) -> GeoPoint {
        *self
    }
}

impl Located for MapIcon {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

impl Located for CameraCandidate {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

/// keeps the items inside the corridor, preserving feed order.
pub fn filter_in_corridor<T, I>(items: I, bbox: &CorridorBBox) -> Vec<T>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .filter(|item| in_corridor(&item.location(), bbox))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox() -> CorridorBBox {
        CorridorBBox::new(43.65, 44.02, -79.55, -78.65)
    }

    #[test]
    fn test_interior_point() {
        assert!(in_corridor(&GeoPoint::new(43.85, -79.0), &bbox()));
    }

    #[test]
    fn test_edges_and_corners_are_included() {
        let b = bbox();
        assert!(in_corridor(&GeoPoint::new(43.65, -79.0), &b));
        assert!(in_corridor(&GeoPoint::new(44.02, -79.0), &b));
        assert!(in_corridor(&GeoPoint::new(43.85, -79.55), &b));
        assert!(in_corridor(&GeoPoint::new(43.85, -78.65), &b));
        assert!(in_corridor(&GeoPoint::new(43.65, -79.55), &b));
        assert!(in_corridor(&GeoPoint::new(44.02, -78.65), &b));
    }

    #[test]
    fn test_outside_on_each_axis() {
        let b = bbox();
        assert!(!in_corridor(&GeoPoint::new(43.6499, -79.0), &b));
        assert!(!in_corridor(&GeoPoint::new(44.0201, -79.0), &b));
        assert!(!in_corridor(&GeoPoint::new(43.85, -79.5501), &b));
        assert!(!in_corridor(&GeoPoint::new(43.85, -78.6499), &b));
        // swapped lat/lon must not pass
        assert!(!in_corridor(&GeoPoint::new(-79.0, 43.85), &b));
    }

    #[test]
    fn test_filter_preserves_order() {
        let points = vec![
            GeoPoint::new(43.9, -79.1),
            GeoPoint::new(45.0, -79.1),
            GeoPoint::new(43.7, -78.7),
        ];
        let kept = filter_in_corridor(points, &bbox());
        assert_eq!(
            kept,
            vec![GeoPoint::new(43.9, -79.1), GeoPoint::new(43.7, -78.7)]
        );
    }
}
