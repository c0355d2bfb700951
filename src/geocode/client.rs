use super::{parse_results, GeocodeError, Place};
use crate::config::GeocoderConfig;
use crate::i18n::Language;
use reqwest::Url;
use tracing::{debug, info, warn};

/// HTTP geocoding client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: reqwest::Client,
    endpoint: String,
    send_language: bool,
}

impl Geocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self::with_client(client, &config.endpoint, config.send_language))
    }

    pub fn with_client(client: reqwest::Client, endpoint: &str, send_language: bool) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
            send_language,
        }
    }

    /// Builds `endpoint?format=json&q=...&limit=1[&accept-language=..]`.
    pub fn search_url(&self, query: &str, language: Language) -> Result<Url, GeocodeError> {
        let mut params = vec![("format", "json"), ("q", query), ("limit", "1")];
        if self.send_language {
            params.push(("accept-language", language.code()));
        }
        Url::parse_with_params(&self.endpoint, &params)
            .map_err(|e| GeocodeError::Search(format!("invalid endpoint {}: {}", self.endpoint, e)))
    }

    pub async fn search(&self, query: &str, language: Language) -> Result<Place, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodeError::NotFound);
        }

        let url = self.search_url(query, language)?;
        debug!(%url, "geocoding request");

        let result = self.fetch(url).await;
        match &result {
            Ok(place) => info!(query, name = %place.name, lat = place.position.lat, lng = place.position.lng, "geocoded"),
            Err(GeocodeError::NotFound) => info!(query, "no geocoding match"),
            Err(e) => warn!(query, error = %e, "geocoding failed"),
        }
        result
    }

    async fn fetch(&self, url: Url) -> Result<Place, GeocodeError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        parse_results(&body)
    }
}
