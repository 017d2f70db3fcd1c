use itertools::Itertools;
use regex::Regex;

use crate::CorridorReportError;

/// the delimiter keywords that split a route block into sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Construction,
    /// "Cameras" label with its declared count
    Cameras(u32),
    /// a turn/exit instruction such as "Take exit"
    Instruction,
    Notes,
}

/// a delimiter keyword located in the route block, as a byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub start: usize,
    pub end: usize,
}

/// splits a route block into labelled sections by scanning for
/// delimiter keywords. matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct SectionTokenizer {
    pattern: Regex,
}

impl SectionTokenizer {
    pub fn new<S: AsRef<str>>(instruction_markers: &[S]) -> Result<Self, CorridorReportError> {
        let instructions = instruction_markers
            .iter()
            .map(|m| m.as_ref().trim())
            .filter(|m| !m.is_empty())
            .map(|m| regex::escape(m).replace(' ', r"\s+"))
            .join("|");
        let mut alternatives = vec![
            String::from(r"(?P<construction>Construction)"),
            String::from(r"(?P<cameras>Cameras\s*(?P<count>[0-9]+))"),
            String::from(r"(?P<notes>Notes)"),
        ];
        if !instructions.is_empty() {
            alternatives.push(format!("(?P<instruction>{instructions})"));
        }
        let source = format!("(?i){}", alternatives.join("|"));
        let pattern = Regex::new(&source).map_err(|e| {
            CorridorReportError::InternalError(format!("failure building section pattern: {e}"))
        })?;
        Ok(Self { pattern })
    }

    /// all markers in the text, in order of appearance.
    pub fn markers(&self, text: &str) -> Vec<Marker> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let kind = if caps.name("construction").is_some() {
                    MarkerKind::Construction
                } else if caps.name("cameras").is_some() {
                    // a count too large for u32 is not a usable camera label
                    let count = caps.name("count")?.as_str().parse::<u32>().ok()?;
                    MarkerKind::Cameras(count)
                } else if caps.name("notes").is_some() {
                    MarkerKind::Notes
                } else {
                    MarkerKind::Instruction
                };
                Some(Marker {
                    kind,
                    start: whole.start(),
                    end: whole.end(),
                })
            })
            .collect()
    }
}

/// the bodies of every construction section. each section runs from its
/// label to the next marker of any kind, or the end of the text.
pub fn construction_sections<'a>(text: &'a str, markers: &[Marker]) -> Vec<&'a str> {
    markers
        .iter()
        .enumerate()
        .filter(|(_, m)| m.kind == MarkerKind::Construction)
        .map(|(idx, m)| {
            let stop = markers.get(idx + 1).map(|n| n.start).unwrap_or(text.len());
            &text[m.end..stop]
        })
        .collect()
}

/// the declared camera count and the camera list body. the body runs from
/// the first cameras label to the next instruction or notes marker.
pub fn camera_section<'a>(text: &'a str, markers: &[Marker]) -> Option<(u32, &'a str)> {
    let (idx, label) = markers
        .iter()
        .find_position(|m| matches!(m.kind, MarkerKind::Cameras(_)))?;
    let count = match label.kind {
        MarkerKind::Cameras(count) => count,
        _ => return None,
    };
    let stop = markers[idx + 1..]
        .iter()
        .find(|m| matches!(m.kind, MarkerKind::Instruction | MarkerKind::Notes))
        .map(|m| m.start)
        .unwrap_or(text.len());
    Some((count, &text[label.end..stop]))
}
