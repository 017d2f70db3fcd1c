use std::time::Duration;

use corridor_core::camera::{CameraTooltipParser, TooltipSource};
use corridor_core::model::{CameraTooltip, ListPage, MapIconFeed};
use corridor_core::paginate::{ListFeedKind, ListQuery, PageSource};
use corridor_core::CorridorReportError;
use serde::de::DeserializeOwned;

use super::{MapIconLayer, MapIconSource, ServiceConfig};

/// async HTTP client for the map icon, tooltip and list endpoints.
/// every request is a plain GET; failures are not retried.
#[derive(Debug, Clone)]
pub struct On511Client {
    http: reqwest::Client,
    base_url: String,
    language: String,
    tooltip_parser: CameraTooltipParser,
}

impl TryFrom<&ServiceConfig> for On511Client {
    type Error = CorridorReportError;

    fn try_from(value: &ServiceConfig) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl On511Client {
    pub fn new(config: &ServiceConfig) -> Result<Self, CorridorReportError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CorridorReportError::InvalidUserInput(format!(
                "service base_url must be an http(s) url, found '{}'",
                config.base_url
            )));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                CorridorReportError::InternalError(format!("failure building http client: {e}"))
            })?;
        Ok(Self {
            http,
            tooltip_parser: CameraTooltipParser::new(&base_url)?,
            base_url,
            language: config.language.clone(),
        })
    }

    pub fn map_icon_url(&self, layer: MapIconLayer) -> String {
        format!("{}/map/mapIcons/{layer}", self.base_url)
    }

    pub fn tooltip_url(&self, item_id: &str) -> String {
        format!("{}/tooltip/Cameras/{item_id}", self.base_url)
    }

    pub fn list_url(&self, kind: ListFeedKind) -> String {
        format!("{}/List/GetData/{kind}", self.base_url)
    }

    async fn get_text(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<String, CorridorReportError> {
        log::debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| CorridorReportError::network(url, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CorridorReportError::network(url, format!("HTTP {status}")));
        }
        response
            .text()
            .await
            .map_err(|e| CorridorReportError::network(url, format!("failed reading body: {e}")))
    }
}

impl MapIconSource for On511Client {
    async fn map_icons<T: DeserializeOwned>(
        &self,
        layer: MapIconLayer,
    ) -> Result<Vec<T>, CorridorReportError> {
        let url = self.map_icon_url(layer);
        let body = self.get_text(&url, &[]).await?;
        let feed: MapIconFeed<T> = decode_json(&url, &body)?;
        let items = feed.into_items();
        log::info!("{layer}: {} icons", items.len());
        Ok(items)
    }
}

impl PageSource for On511Client {
    async fn fetch_page(
        &self,
        kind: ListFeedKind,
        query: &ListQuery,
    ) -> Result<ListPage, CorridorReportError> {
        let url = self.list_url(kind);
        let encoded = serde_json::to_string(query).map_err(|e| {
            CorridorReportError::SerializationError(format!("failure encoding list query: {e}"))
        })?;
        let body = self
            .get_text(&url, &[("query", encoded), ("lang", self.language.clone())])
            .await?;
        decode_json(&url, &body)
    }
}

impl TooltipSource for On511Client {
    async fn camera_tooltip(&self, item_id: &str) -> Result<CameraTooltip, CorridorReportError> {
        let url = self.tooltip_url(item_id);
        let html = self
            .get_text(&url, &[("lang", self.language.clone())])
            .await?;
        Ok(self.tooltip_parser.parse(&html))
    }
}

fn decode_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, CorridorReportError> {
    serde_json::from_str(body)
        .map_err(|e| CorridorReportError::network(url, format!("unexpected response body: {e}")))
}
