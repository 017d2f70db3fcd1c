use clap::Parser;
use corridor_core::CorridorReportError;
use corridor_on511::app::CorridorApp;

fn main() -> Result<(), CorridorReportError> {
    env_logger::init();
    let args = CorridorApp::parse();
    args.op.run()
}
