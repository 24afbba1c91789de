//! Vehicle make/model lookup service used to populate brand and model pickers.

use crate::infra::api::{ApiError, ApiResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;

#[async_trait]
pub trait VehicleCatalog: Send + Sync {
    async fn makes(&self) -> ApiResult<Vec<String>>;
    async fn models(&self, make: &str) -> ApiResult<Vec<String>>;
}

#[derive(Debug, Default, Deserialize)]
struct MakesResponse {
    #[serde(rename = "Makes", default)]
    makes: Option<Vec<MakeEntry>>,
}

#[derive(Debug, Deserialize)]
struct MakeEntry {
    #[serde(default)]
    make_display: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ModelsResponse {
    #[serde(rename = "Results", default)]
    results: Option<Vec<ModelEntry>>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    #[serde(rename = "Model_Name", default)]
    model_name: Option<String>,
}

/// Names from a `GET /api/makes` body, sorted, empties dropped.
pub fn parse_makes(body: &str) -> ApiResult<Vec<String>> {
    let parsed: MakesResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(sorted_names(
        parsed
            .makes
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| m.make_display),
    ))
}

/// Names from a `GET /api/models/{make}` body, sorted, empties dropped.
pub fn parse_models(body: &str) -> ApiResult<Vec<String>> {
    let parsed: ModelsResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(sorted_names(
        parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| m.model_name),
    ))
}

fn sorted_names(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = names.filter(|n| !n.trim().is_empty()).collect();
    names.sort_by_key(|n| n.to_lowercase());
    names
}

#[derive(Clone)]
pub struct HttpVehicleCatalog {
    http: reqwest::Client,
    base_url: String,
}

impl HttpVehicleCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Lookup URL for `segments`, each percent-encoded as a single path segment.
    pub fn url(&self, segments: &[&str]) -> ApiResult<reqwest::Url> {
        let invalid = |reason: String| {
            ApiError::Transport(format!("invalid lookup URL {}: {}", self.base_url, reason))
        };
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot be a base".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_text(&self, segments: &[&str]) -> ApiResult<String> {
        let url = self.url(segments)?;
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body, false));
        }
        Ok(body)
    }
}

#[async_trait]
impl VehicleCatalog for HttpVehicleCatalog {
    async fn makes(&self) -> ApiResult<Vec<String>> {
        parse_makes(&self.get_text(&["api", "makes"]).await?)
    }

    async fn models(&self, make: &str) -> ApiResult<Vec<String>> {
        parse_models(&self.get_text(&["api", "models", make]).await?)
    }
}

/// Fixed make/model table for offline sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    models: BTreeMap<String, Vec<String>>,
    unavailable: bool,
}

impl StaticCatalog {
    pub fn new<I, M, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, M)>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let models = entries
            .into_iter()
            .map(|(make, models)| (make.into(), models.into_iter().map(Into::into).collect()))
            .collect();
        Self {
            models,
            unavailable: false,
        }
    }

    /// A catalog whose every lookup fails, as when the lookup service is down.
    pub fn unavailable() -> Self {
        Self {
            models: BTreeMap::new(),
            unavailable: true,
        }
    }

    pub fn demo() -> Self {
        Self::new([
            ("Dacia", vec!["Duster", "Logan", "Sandero"]),
            ("Hyundai", vec!["i10", "Tucson"]),
            ("Peugeot", vec!["208", "3008"]),
            ("Renault", vec!["Clio", "Megane"]),
            ("Tesla", vec!["Model 3", "Model Y"]),
            ("Toyota", vec!["Corolla", "Yaris"]),
            ("Volkswagen", vec!["Golf", "Polo"]),
        ])
    }

    fn check(&self) -> ApiResult<()> {
        if self.unavailable {
            Err(ApiError::Transport("lookup service unavailable".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl VehicleCatalog for StaticCatalog {
    async fn makes(&self) -> ApiResult<Vec<String>> {
        self.check()?;
        Ok(sorted_names(self.models.keys().cloned()))
    }

    async fn models(&self, make: &str) -> ApiResult<Vec<String>> {
        self.check()?;
        let models = self
            .models
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(make))
            .map(|(_, models)| models.clone())
            .unwrap_or_default();
        Ok(sorted_names(models.into_iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn makes_are_sorted_and_filtered() {
        let body = r#"{"Makes": [
            {"make_display": "Toyota"},
            {"make_display": ""},
            {"make_display": null},
            {"make_display": "audi"},
            {"make_display": "BMW"}
        ]}"#;
        assert_eq!(parse_makes(body).unwrap(), vec!["audi", "BMW", "Toyota"]);
    }

    #[test]
    fn models_missing_key_is_empty() {
        assert!(parse_models("{}").unwrap().is_empty());
        assert_eq!(
            parse_models(r#"{"Results": [{"Model_Name": "Yaris"}, {"Model_Name": "Corolla"}]}"#)
                .unwrap(),
            vec!["Corolla", "Yaris"]
        );
    }

    #[test]
    fn malformed_body_is_decode_error() {
        assert!(matches!(parse_makes("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn model_path_encodes_the_make() {
        let catalog = HttpVehicleCatalog::new("http://localhost:3001/");
        assert_eq!(
            catalog.url(&["api", "makes"]).unwrap().as_str(),
            "http://localhost:3001/api/makes"
        );
        let url = catalog.url(&["api", "models", "Rolls/Royce?x#1"]).unwrap();
        assert_eq!(url.path(), "/api/models/Rolls%2FRoyce%3Fx%231");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());

        let prefixed = HttpVehicleCatalog::new("http://lookup.local/v2");
        assert_eq!(
            prefixed.url(&["api", "models", "Land Rover"]).unwrap().as_str(),
            "http://lookup.local/v2/api/models/Land%20Rover"
        );
    }

    #[tokio::test]
    async fn static_catalog_lookups() {
        let catalog = StaticCatalog::demo();
        assert!(catalog.makes().await.unwrap().contains(&"Toyota".to_string()));
        assert_eq!(catalog.models("toyota").await.unwrap(), vec!["Corolla", "Yaris"]);
        assert!(catalog.models("Lada").await.unwrap().is_empty());
        assert!(StaticCatalog::unavailable().makes().await.is_err());
    }
}
