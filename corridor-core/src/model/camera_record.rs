use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::{GeoPoint, MapIcon};

/// an unnamed camera icon. names are only available through the tooltip lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraCandidate {
    pub item_id: String,
    pub location: GeoPoint,
}

impl CameraCandidate {
    /// icons without an identifier cannot be looked up and are dropped.
    pub fn from_icon(icon: &MapIcon) -> Option<Self> {
        let item_id = icon.item_id.clone()?;
        Some(Self {
            item_id,
            location: icon.location,
        })
    }
}

/// the parsed contents of a camera tooltip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraTooltip {
    pub name: Option<String>,
    pub images: IndexSet<String>,
}

/// a camera candidate whose tooltip name matched a camera listed on the route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedCamera {
    pub item_id: String,
    pub location: GeoPoint,
    pub name: String,
    pub images: IndexSet<String>,
}
