use serde::{Serialize, Serializer};

/// total travel time stated on the route summary, in whole minutes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TravelTime {
    pub minutes: u32,
}

impl std::fmt::Display for TravelTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.minutes)
    }
}

impl Serialize for TravelTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// total travel distance stated on the route summary. the source text is
/// kept alongside the parsed value so the report echoes what the service said.
#[derive(Clone, Debug, PartialEq)]
pub struct TravelDistance {
    pub kilometres: f64,
    pub text: String,
}

impl Serialize for TravelDistance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDetails {
    pub time: Option<TravelTime>,
    pub distance: Option<TravelDistance>,
    pub events: u32,
    pub current_roadwork: Option<String>,
    pub construction_items: Vec<String>,
    pub camera_count: u32,
    pub camera_names: Vec<String>,
    pub avg_speed_kmh: Option<f64>,
}

impl RouteDetails {
    /// builds a RouteDetails, deriving the average speed from time and distance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        time: Option<TravelTime>,
        distance: Option<TravelDistance>,
        events: u32,
        current_roadwork: Option<String>,
        construction_items: Vec<String>,
        camera_count: u32,
        camera_names: Vec<String>,
    ) -> Self {
        let avg_speed_kmh = average_speed_kmh(time.as_ref(), distance.as_ref());
        Self {
            time,
            distance,
            events,
            current_roadwork,
            construction_items,
            camera_count,
            camera_names,
            avg_speed_kmh,
        }
    }
}

/// route-average speed in km/h rounded to one decimal. a zero-minute
/// travel time has no meaningful speed and yields None.
pub fn average_speed_kmh(
    time: Option<&TravelTime>,
    distance: Option<&TravelDistance>,
) -> Option<f64> {
    match (time, distance) {
        (Some(t), Some(d)) if t.minutes > 0 => {
            let kmh = d.kilometres / (t.minutes as f64 / 60.0);
            Some((kmh * 10.0).round() / 10.0)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(km: f64) -> TravelDistance {
        TravelDistance {
            kilometres: km,
            text: format!("{km} km"),
        }
    }

    #[test]
    fn test_average_speed_rounds_to_one_decimal() {
        let t = TravelTime { minutes: 45 };
        assert_eq!(average_speed_kmh(Some(&t), Some(&distance(38.4))), Some(51.2));
        let t = TravelTime { minutes: 37 };
        // 50 / (37/60) = 81.081...
        assert_eq!(average_speed_kmh(Some(&t), Some(&distance(50.0))), Some(81.1));
    }

    #[test]
    fn test_average_speed_requires_both_fields() {
        let t = TravelTime { minutes: 45 };
        assert_eq!(average_speed_kmh(Some(&t), None), None);
        assert_eq!(average_speed_kmh(None, Some(&distance(10.0))), None);
        assert_eq!(average_speed_kmh(None, None), None);
    }

    #[test]
    fn test_zero_minutes_has_no_speed() {
        let t = TravelTime { minutes: 0 };
        assert_eq!(average_speed_kmh(Some(&t), Some(&distance(10.0))), None);
    }

    #[test]
    fn test_serialize_time_and_distance_as_text() {
        let details = RouteDetails::new(
            Some(TravelTime { minutes: 45 }),
            Some(TravelDistance {
                kilometres: 38.4,
                text: String::from("38.4 km"),
            }),
            0,
            None,
            vec![],
            0,
            vec![],
        );
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["time"], "45 min");
        assert_eq!(json["distance"], "38.4 km");
        assert_eq!(json["avgSpeedKmh"], 51.2);
        assert!(json["currentRoadwork"].is_null());
    }
}
