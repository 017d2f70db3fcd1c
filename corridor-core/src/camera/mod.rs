mod camera_matcher;
mod tooltip_parser;
mod wanted_name_set;

pub use camera_matcher::{match_cameras, CameraMatchResult, TooltipSource};
pub use tooltip_parser::{absolute_url, CameraTooltipParser};
pub use wanted_name_set::{normalize_camera_name, WantedNameSet};
