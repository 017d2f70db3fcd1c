mod corridor_config;

pub use corridor_config::CorridorConfig;
