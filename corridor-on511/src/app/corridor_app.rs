use std::path::Path;

use clap::{Parser, Subcommand};
use corridor_core::{tile::tile_urls_for_bbox, CorridorReportError};
use serde::{Deserialize, Serialize};

use super::{report_run, ReportSettings};
use crate::util::fs;

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "corridor-report-output";

/// Command line tool that builds a route health report for a highway
/// corridor from a 511 traveller information service
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CorridorApp {
    #[command(subcommand)]
    pub op: CorridorOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum CorridorOperation {
    /// collect every feed and write route_report.json
    Report {
        /// file holding the copied route summary text, or '-' to read stdin
        #[arg(short, long)]
        route_text: String,

        /// TOML file with [corridor] and [service] sections. if not provided,
        /// the built-in Highway 401 corridor is used.
        #[arg(short, long)]
        configuration_file: Option<String>,

        /// location on disk to write the report. if not provided,
        /// use ./corridor-report-output
        #[arg(short, long)]
        output_directory: Option<String>,
    },
    /// parse the route summary text and print the extracted fields as JSON
    Extract {
        /// file holding the copied route summary text, or '-' to read stdin
        #[arg(short, long)]
        route_text: String,

        #[arg(short, long)]
        configuration_file: Option<String>,
    },
    /// print the traffic tile urls covering the corridor
    Tiles {
        #[arg(short, long)]
        configuration_file: Option<String>,
    },
}

impl CorridorOperation {
    pub fn run(&self) -> Result<(), CorridorReportError> {
        match self {
            CorridorOperation::Report {
                route_text,
                configuration_file,
                output_directory,
            } => {
                let settings = ReportSettings::load(configuration_file.as_deref())?;
                let outdir = Path::new(
                    output_directory
                        .as_deref()
                        .unwrap_or(DEFAULT_OUTPUT_DIRECTORY),
                );
                let path = report_run::run(route_text, &settings, outdir)?;
                println!("{}", path.display());
                Ok(())
            }
            CorridorOperation::Extract {
                route_text,
                configuration_file,
            } => {
                let settings = ReportSettings::load(configuration_file.as_deref())?;
                let text = fs::read_route_block(route_text)?;
                let route = report_run::extract_route(&text, &settings)?;
                let json = serde_json::to_string_pretty(&route).map_err(|e| {
                    CorridorReportError::SerializationError(format!(
                        "failure serializing route details: {e}"
                    ))
                })?;
                println!("{json}");
                Ok(())
            }
            CorridorOperation::Tiles { configuration_file } => {
                let settings = ReportSettings::load(configuration_file.as_deref())?;
                let corridor = &settings.corridor;
                let urls = tile_urls_for_bbox(
                    &corridor.bbox,
                    corridor.tile_zoom,
                    &corridor.tile_url_template,
                );
                log::info!("{} tiles at zoom {}", urls.len(), corridor.tile_zoom);
                for url in urls {
                    println!("{url}");
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_arguments() {
        let app = CorridorApp::try_parse_from([
            "corridor-on511",
            "report",
            "--route-text",
            "-",
            "--output-directory",
            "out",
        ])
        .unwrap();
        match app.op {
            CorridorOperation::Report {
                route_text,
                configuration_file,
                output_directory,
            } => {
                assert_eq!(route_text, "-");
                assert_eq!(configuration_file, None);
                assert_eq!(output_directory.as_deref(), Some("out"));
            }
            other => panic!("unexpected operation {other:?}"),
        }
    }

    #[test]
    fn test_report_requires_route_text() {
        assert!(CorridorApp::try_parse_from(["corridor-on511", "report"]).is_err());
    }
}
