mod camera_record;
mod corridor_bbox;
mod geo_point;
mod list_row;
mod map_icon;
mod route_details;

pub use camera_record::{CameraCandidate, CameraTooltip, MatchedCamera};
pub use corridor_bbox::CorridorBBox;
pub use geo_point::GeoPoint;
pub use list_row::{ListPage, ListRow};
pub use map_icon::{MapIcon, MapIconFeed};
pub use route_details::{average_speed_kmh, RouteDetails, TravelDistance, TravelTime};
