use serde::{Deserialize, Serialize};

use crate::model::CorridorBBox;
use crate::CorridorReportError;

/// Serializable description of the corridor a report is built for.
/// The defaults describe Highway 401 between Scarborough and Oshawa.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorridorConfig {
    /// label of the route origin, echoed in the report
    pub start_label: String,
    /// label of the route destination, echoed in the report
    pub end_label: String,
    pub bbox: CorridorBBox,
    /// designation every camera name on the route begins with
    pub highway_marker: String,
    /// accepted spellings of the highway in list feed `roadway` columns
    pub highway_aliases: Vec<String>,
    /// place names that tie a list row to this corridor
    pub place_keywords: Vec<String>,
    /// turn/exit phrases that close the camera and construction sections
    pub instruction_markers: Vec<String>,
    /// rows requested per list feed page
    pub page_size: usize,
    pub tile_zoom: u8,
    /// traffic tile url with `{x}`, `{y}` and `{z}` placeholders
    pub tile_url_template: String,
    /// number of tile urls written to the report
    pub tile_sample_size: usize,
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            start_label: String::from("4 Agincourt Drive, Scarborough, ON"),
            end_label: String::from("1908 Colonel Sam Drive, Oshawa, ON"),
            bbox: CorridorBBox::new(43.65, 44.02, -79.55, -78.65),
            highway_marker: String::from("Highway 401"),
            highway_aliases: vec![String::from("401"), String::from("highway 401")],
            place_keywords: [
                "morningside",
                "scarborough",
                "pickering",
                "brock",
                "westney",
                "salem",
                "lakeridge",
                "harmony",
                "oshawa",
                "thickson",
                "ajax",
                "whitby",
                "boundary road",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            instruction_markers: ["Take exit", "Turn left", "Turn right", "Arrive at"]
                .into_iter()
                .map(String::from)
                .collect(),
            page_size: 100,
            tile_zoom: 11,
            tile_url_template: String::from(
                "https://tiles.ibi511.com/Geoservice/GetTrafficTile?x={x}&y={y}&z={z}",
            ),
            tile_sample_size: 12,
        }
    }
}

impl CorridorConfig {
    pub fn validate(&self) -> Result<(), CorridorReportError> {
        self.bbox.validate()?;
        if self.page_size == 0 {
            return Err(CorridorReportError::InvalidUserInput(String::from(
                "page_size must be greater than zero",
            )));
        }
        if self.highway_marker.trim().is_empty() {
            return Err(CorridorReportError::InvalidUserInput(String::from(
                "highway_marker must not be empty",
            )));
        }
        if self.tile_zoom > 22 {
            return Err(CorridorReportError::InvalidUserInput(format!(
                "tile_zoom {} is outside of [0, 22]",
                self.tile_zoom
            )));
        }
        let missing = ["{x}", "{y}", "{z}"]
            .into_iter()
            .filter(|p| !self.tile_url_template.contains(p))
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(CorridorReportError::InvalidUserInput(format!(
                "tile_url_template '{}' is missing placeholders {missing:?}",
                self.tile_url_template
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CorridorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let conf = CorridorConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(conf.validate().is_err());
    }

    #[test]
    fn test_template_without_placeholders_rejected() {
        let conf = CorridorConfig {
            tile_url_template: String::from("https://tiles.example.com/{z}/{x}.png"),
            ..Default::default()
        };
        let err = conf.validate().unwrap_err();
        assert!(err.to_string().contains("{y}"));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let json = r#"{ "highway_marker": "Highway 400", "page_size": 25 }"#;
        let conf: CorridorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(conf.highway_marker, "Highway 400");
        assert_eq!(conf.page_size, 25);
        assert_eq!(conf.tile_zoom, 11);
        assert_eq!(conf.bbox, CorridorConfig::default().bbox);
    }
}
