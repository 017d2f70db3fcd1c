mod map_icon_layer;
mod map_icon_source;
mod on511_client;
mod service_config;

pub use map_icon_layer::MapIconLayer;
pub use map_icon_source::MapIconSource;
pub use on511_client::On511Client;
pub use service_config::ServiceConfig;
