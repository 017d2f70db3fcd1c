use corridor_core::CorridorReportError;
use serde::de::DeserializeOwned;

use super::MapIconLayer;

/// map icon layer lookup. `T` is [`corridor_core::model::MapIcon`] for layers
/// that get filtered, or a raw json value for pass-through layers.
#[allow(async_fn_in_trait)]
pub trait MapIconSource {
    async fn map_icons<T: DeserializeOwned>(
        &self,
        layer: MapIconLayer,
    ) -> Result<Vec<T>, CorridorReportError>;
}
