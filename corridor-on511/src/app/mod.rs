mod corridor_app;
pub mod report_run;
mod report_settings;

pub use corridor_app::{CorridorApp, CorridorOperation, DEFAULT_OUTPUT_DIRECTORY};
pub use report_settings::ReportSettings;
