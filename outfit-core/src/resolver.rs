use tracing::{error, warn};

use crate::{
    model::WeatherObservation,
    provider::{LookupError, WeatherProvider},
};

/// Turns a free-text location into a [`WeatherObservation`], degrading to
/// [`WeatherObservation::fallback`] whenever a lookup fails.
#[derive(Debug)]
pub struct WeatherResolver {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherResolver {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Never fails. On the success path `city` is the geocoder's canonical name; on any
    /// fallback it is `location` unchanged.
    pub async fn resolve(&self, location: &str) -> WeatherObservation {
        match self.try_resolve(location).await {
            Ok(observation) => observation,
            Err(LookupError::NoMatch(_)) => {
                warn!(%location, "Location not found, using default weather");
                WeatherObservation::fallback(location)
            }
            Err(err) => {
                error!(%location, error = %err, "Weather lookup failed, using default weather");
                WeatherObservation::fallback(location)
            }
        }
    }

    async fn try_resolve(&self, location: &str) -> Result<WeatherObservation, LookupError> {
        let place = self.provider.geocode(location).await?;
        let current = self.provider.current_conditions(place.latitude, place.longitude).await?;

        // Halves round up, so -2.5 becomes -2.
        let temperature = (current.temperature_c + 0.5).floor() as i32;

        Ok(WeatherObservation::from_conditions(
            temperature,
            current.weather_code,
            current.humidity_pct,
            place.name,
        ))
    }
}
