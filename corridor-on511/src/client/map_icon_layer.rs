use serde::{Deserialize, Serialize};

/// map icon layers published by the service.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MapIconLayer {
    Cameras,
    ServiceVehicles,
    WazeIncidents,
    WazeTraffic,
    WazeWeather,
}

impl MapIconLayer {
    pub fn path_segment(&self) -> &'static str {
        match self {
            MapIconLayer::Cameras => "Cameras",
            MapIconLayer::ServiceVehicles => "ServiceVehicles",
            MapIconLayer::WazeIncidents => "WazeIncidents",
            MapIconLayer::WazeTraffic => "WazeTraffic",
            MapIconLayer::WazeWeather => "WazeWeather",
        }
    }
}

impl std::fmt::Display for MapIconLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}
