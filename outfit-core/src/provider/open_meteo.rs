use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::config::OpenMeteoConfig;

use super::{CurrentConditions, GeoMatch, LookupError, WeatherProvider};

const GEOCODING: &str = "Open-Meteo geocoding";
const FORECAST: &str = "Open-Meteo forecast";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    geocoding_url: String,
    forecast_url: String,
    language: String,
    http: Client,
}

impl OpenMeteoProvider {
    /// `geocoding_url` and `forecast_url` are base URLs without the `/v1/...` path.
    pub fn new(geocoding_url: String, forecast_url: String, language: String) -> Self {
        Self {
            geocoding_url: geocoding_url.trim_end_matches('/').to_string(),
            forecast_url: forecast_url.trim_end_matches('/').to_string(),
            language,
            http: Client::new(),
        }
    }

    pub fn from_config(config: &OpenMeteoConfig) -> Self {
        Self::new(
            config.geocoding_url.clone(),
            config.forecast_url.clone(),
            config.language.clone(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct OmGeoResult {
    latitude: f64,
    longitude: f64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OmGeoResponse {
    #[serde(default)]
    results: Vec<OmGeoResult>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: i32,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: OmCurrent,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn geocode(&self, location: &str) -> Result<GeoMatch, LookupError> {
        let url = format!("{}/v1/search", self.geocoding_url);
        debug!(%location, %url, "Geocoding location");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("name", location),
                ("count", "1"),
                ("language", self.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|source| LookupError::Http { service: GEOCODING, source })?;

        let parsed: OmGeoResponse = read_json(GEOCODING, res).await?;

        parsed
            .results
            .into_iter()
            .next()
            .map(|r| GeoMatch { latitude: r.latitude, longitude: r.longitude, name: r.name })
            .ok_or_else(|| LookupError::NoMatch(location.to_string()))
    }

    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, LookupError> {
        let url = format!("{}/v1/forecast", self.forecast_url);
        debug!(latitude, longitude, %url, "Fetching current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string().as_str()),
                ("longitude", longitude.to_string().as_str()),
                ("current", "temperature_2m,relative_humidity_2m,weather_code"),
                ("timezone", "auto"),
            ])
            .send()
            .await
            .map_err(|source| LookupError::Http { service: FORECAST, source })?;

        let parsed: OmForecastResponse = read_json(FORECAST, res).await?;
        let current = parsed.current;

        Ok(CurrentConditions {
            temperature_c: current.temperature_2m,
            humidity_pct: current.relative_humidity_2m.round().clamp(0.0, 100.0) as u8,
            weather_code: current.weather_code,
        })
    }
}

async fn read_json<T: DeserializeOwned>(
    service: &'static str,
    res: Response,
) -> Result<T, LookupError> {
    let status = res.status();
    let body = res.text().await.map_err(|source| LookupError::Http { service, source })?;

    if !status.is_success() {
        return Err(LookupError::Status { service, status, body: truncate_body(&body) });
    }

    serde_json::from_str(&body).map_err(|source| LookupError::Parse { service, source })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
