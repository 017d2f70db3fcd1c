use itertools::Itertools;
use regex::Regex;

use super::section_tokenizer::{camera_section, construction_sections, SectionTokenizer};
use crate::config::CorridorConfig;
use crate::model::{RouteDetails, TravelDistance, TravelTime};
use crate::CorridorReportError;

const TOTAL_TIME_PATTERN: &str = r"(?i)Total Time:\s*([0-9]+)\s*min";
const TOTAL_DISTANCE_PATTERN: &str =
    r"(?i)Total Travel Distance:\s*(([0-9]+(?:\.[0-9]+)?)\s*km)";
const EVENTS_PATTERN: &str = r"(?i)Events\s*([0-9]+)";
const CURRENT_ROADWORK_PATTERN: &str = r"(?is)Current Roadwork(.*?)Show more";

/// collapses every run of whitespace into a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

/// parses the free-text route summary into [`RouteDetails`]. every field
/// is best-effort: a field that cannot be found takes its empty value.
#[derive(Debug, Clone)]
pub struct RouteTextExtractor {
    tokenizer: SectionTokenizer,
    highway_marker: Regex,
    total_time: Regex,
    total_distance: Regex,
    events: Regex,
    current_roadwork: Regex,
}

impl RouteTextExtractor {
    pub fn new<S: AsRef<str>>(
        highway_marker: &str,
        instruction_markers: &[S],
    ) -> Result<Self, CorridorReportError> {
        let marker = highway_marker.trim();
        if marker.is_empty() {
            return Err(CorridorReportError::InvalidUserInput(String::from(
                "highway marker for camera names must not be empty",
            )));
        }
        let marker_source = format!("(?i){}", regex::escape(marker).replace(' ', r"\s+"));
        Ok(Self {
            tokenizer: SectionTokenizer::new(instruction_markers)?,
            highway_marker: build_regex(&marker_source)?,
            total_time: build_regex(TOTAL_TIME_PATTERN)?,
            total_distance: build_regex(TOTAL_DISTANCE_PATTERN)?,
            events: build_regex(EVENTS_PATTERN)?,
            current_roadwork: build_regex(CURRENT_ROADWORK_PATTERN)?,
        })
    }

    /// true if the text carries both of the labels a route summary always has.
    pub fn looks_like_route_block(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains("total time:") && lower.contains("total travel distance:")
    }

    /// extracts route details from the route block. the block being absent
    /// or blank means the route summary could not be located at all, which
    /// is fatal for the run.
    pub fn extract(&self, block: Option<&str>) -> Result<RouteDetails, CorridorReportError> {
        let text = block
            .map(collapse_whitespace)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                CorridorReportError::ExtractionError(String::from(
                    "could not isolate the primary route block",
                ))
            })?;
        Ok(self.extract_fields(&text))
    }

    fn extract_fields(&self, text: &str) -> RouteDetails {
        let time = self
            .total_time
            .captures(text)
            .and_then(|c| c.get(1)?.as_str().parse::<u32>().ok())
            .map(|minutes| TravelTime { minutes });

        let distance = self.total_distance.captures(text).and_then(|c| {
            let kilometres = c.get(2)?.as_str().parse::<f64>().ok()?;
            let text = collapse_whitespace(c.get(1)?.as_str());
            Some(TravelDistance { kilometres, text })
        });

        let events = self
            .events
            .captures(text)
            .and_then(|c| c.get(1)?.as_str().parse::<u32>().ok())
            .unwrap_or(0);

        let current_roadwork = self
            .current_roadwork
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty());

        let markers = self.tokenizer.markers(text);
        let construction_items = construction_sections(text, &markers)
            .into_iter()
            .map(collapse_whitespace)
            .filter(|s| !s.is_empty())
            .collect_vec();

        let (camera_count, camera_names) = match camera_section(text, &markers) {
            Some((count, body)) => (count, self.camera_names(body)),
            None => (0, vec![]),
        };

        log::debug!(
            "route block: time={time:?} distance={distance:?} events={events} construction={} cameras={camera_count}/{}",
            construction_items.len(),
            camera_names.len()
        );

        RouteDetails::new(
            time,
            distance,
            events,
            current_roadwork,
            construction_items,
            camera_count,
            camera_names,
        )
    }

    /// splits the camera list body into names. each name starts at the
    /// highway marker and runs up to the next marker.
    fn camera_names(&self, body: &str) -> Vec<String> {
        let starts = self
            .highway_marker
            .find_iter(body)
            .map(|m| m.start())
            .collect_vec();
        starts
            .iter()
            .enumerate()
            .map(|(idx, start)| {
                let stop = starts.get(idx + 1).copied().unwrap_or(body.len());
                collapse_whitespace(&body[*start..stop])
            })
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl TryFrom<&CorridorConfig> for RouteTextExtractor {
    type Error = CorridorReportError;

    fn try_from(value: &CorridorConfig) -> Result<Self, Self::Error> {
        Self::new(&value.highway_marker, &value.instruction_markers)
    }
}

fn build_regex(source: &str) -> Result<Regex, CorridorReportError> {
    Regex::new(source).map_err(|e| {
        CorridorReportError::InternalError(format!("failure building pattern '{source}': {e}"))
    })
}
