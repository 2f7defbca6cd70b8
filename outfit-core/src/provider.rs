use crate::{config::OpenMeteoConfig, provider::open_meteo::OpenMeteoProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Coordinates and canonical name for a free-text place.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoMatch {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Raw current conditions as reported by a forecast service.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub weather_code: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Failed to send request to {service}: {source}")]
    Http {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse {service} JSON: {source}")]
    Parse {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("No location found matching '{0}'")]
    NoMatch(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolve a place name to coordinates. Zero matches is [`LookupError::NoMatch`].
    async fn geocode(&self, location: &str) -> Result<GeoMatch, LookupError>;

    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, LookupError>;
}

/// Construct the Open-Meteo provider from its config section.
pub fn provider_from_config(config: &OpenMeteoConfig) -> Box<dyn WeatherProvider> {
    Box::new(OpenMeteoProvider::from_config(config))
}
