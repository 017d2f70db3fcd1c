mod report_assembler;
mod report_document;

pub use report_assembler::{
    assemble_report, ReportInputs, CAVEATS, THIRD_PARTY_NOTE, TRAFFIC_SPEED_NOTE,
};
pub use report_document::{
    CameraSection, EventsAndRoadworkSection, ListRowSection, Report, RouteSection,
    ServiceVehicleSection, ThirdPartySection, TileLegend, TrafficSpeedSection,
};
