use indexmap::IndexSet;
use regex::Regex;

use crate::model::CameraTooltip;
use crate::CorridorReportError;

const NAME_PATTERN: &str = r"(?is)<strong>\s*([^<]+?)\s*</strong>";
const IMAGE_PATTERN: &str = r#"data-lazy="([^"]+)""#;

/// parses camera tooltip html. the camera name is the first bolded text,
/// images are the lazy-loaded sources resolved against the service base url.
#[derive(Debug, Clone)]
pub struct CameraTooltipParser {
    base_url: String,
    name: Regex,
    image: Regex,
}

impl CameraTooltipParser {
    pub fn new(base_url: &str) -> Result<Self, CorridorReportError> {
        let build = |source: &str| {
            Regex::new(source).map_err(|e| {
                CorridorReportError::InternalError(format!(
                    "failure building tooltip pattern '{source}': {e}"
                ))
            })
        };
        Ok(Self {
            base_url: base_url.to_string(),
            name: build(NAME_PATTERN)?,
            image: build(IMAGE_PATTERN)?,
        })
    }

    pub fn parse(&self, html: &str) -> CameraTooltip {
        let name = self
            .name
            .captures(html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|n| !n.is_empty());
        let images: IndexSet<String> = self
            .image
            .captures_iter(html)
            .filter_map(|c| c.get(1))
            .map(|m| absolute_url(&self.base_url, m.as_str()))
            .collect();
        CameraTooltip { name, images }
    }
}

/// joins a root-relative or relative reference onto the service base url.
pub fn absolute_url(base_url: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }
    if let Some(rest) = reference.strip_prefix("//") {
        return format!("https://{rest}");
    }
    let base = base_url.trim_end_matches('/');
    match reference.strip_prefix('/') {
        Some(path) => format!("{base}/{path}"),
        None => format!("{base}/{reference}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://511on.ca";

    #[test]
    fn test_parse_name_and_images() {
        let html = r#"
            <div class="tooltip">
              <strong>
                Highway 401 near Brock Road
              </strong>
              <img data-lazy="/map/Cctv/1001" />
              <img data-lazy="/map/Cctv/1002" />
              <img data-lazy="/map/Cctv/1001" />
            </div>"#;
        let tip = CameraTooltipParser::new(BASE).unwrap().parse(html);
        assert_eq!(tip.name.as_deref(), Some("Highway 401 near Brock Road"));
        let images: Vec<&String> = tip.images.iter().collect();
        assert_eq!(
            images,
            vec![
                "https://511on.ca/map/Cctv/1001",
                "https://511on.ca/map/Cctv/1002"
            ]
        );
    }

    #[test]
    fn test_missing_name() {
        let tip = CameraTooltipParser::new(BASE).unwrap().parse("<div>offline</div>");
        assert_eq!(tip.name, None);
        assert!(tip.images.is_empty());
    }

    #[test]
    fn test_absolute_url_forms() {
        assert_eq!(absolute_url("https://a.ca/", "/x/1"), "https://a.ca/x/1");
        assert_eq!(absolute_url("https://a.ca", "x/1"), "https://a.ca/x/1");
        assert_eq!(absolute_url("https://a.ca", "https://b.ca/y"), "https://b.ca/y");
        assert_eq!(absolute_url("https://a.ca", "//c.ca/z"), "https://c.ca/z");
    }
}
