use serde::Serialize;

use super::WantedNameSet;
use crate::model::{CameraCandidate, CameraTooltip, MatchedCamera};
use crate::CorridorReportError;

/// per-camera tooltip lookup.
#[allow(async_fn_in_trait)]
pub trait TooltipSource {
    async fn camera_tooltip(&self, item_id: &str) -> Result<CameraTooltip, CorridorReportError>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CameraMatchResult {
    pub matched: Vec<MatchedCamera>,
    /// normalized route camera names no candidate resolved to
    pub unresolved: Vec<String>,
}

/// resolves candidates to the cameras named on the route.
///
/// candidates are looked up one at a time in feed order. each wanted name
/// is consumed by at most one candidate, and lookups stop as soon as every
/// wanted name has been found. a tooltip without a name skips the candidate.
pub async fn match_cameras<S, N>(
    camera_names: &[N],
    candidates: &[CameraCandidate],
    source: &S,
) -> Result<CameraMatchResult, CorridorReportError>
where
    S: TooltipSource,
    N: AsRef<str>,
{
    let mut wanted = WantedNameSet::from_names(camera_names);
    let mut matched = vec![];
    let mut lookups = 0;

    for candidate in candidates {
        if wanted.is_empty() {
            break;
        }
        lookups += 1;
        let tooltip = source.camera_tooltip(&candidate.item_id).await?;
        let Some(name) = tooltip.name else {
            log::debug!("camera {} has no tooltip name, skipping", candidate.item_id);
            continue;
        };
        if wanted.claim(&name) {
            log::debug!("matched camera {} to '{name}'", candidate.item_id);
            matched.push(MatchedCamera {
                item_id: candidate.item_id.clone(),
                location: candidate.location,
                name,
                images: tooltip.images,
            });
        }
    }

    let unresolved = wanted.into_remaining();
    log::info!(
        "matched {} cameras after {lookups}/{} tooltip lookups, {} unresolved",
        matched.len(),
        candidates.len(),
        unresolved.len()
    );
    Ok(CameraMatchResult {
        matched,
        unresolved,
    })
}
