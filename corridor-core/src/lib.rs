pub mod camera;
pub mod config;
pub mod extract;
pub mod filter;
pub mod model;
pub mod paginate;
pub mod report;
pub mod tile;

mod error;

pub use error::CorridorReportError;
