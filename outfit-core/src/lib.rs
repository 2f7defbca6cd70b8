//! Core library for the `outfit` CLI.
//!
//! This crate defines:
//! - Domain models (user inputs, weather observations, recommendations)
//! - Static clothing rule tables and the recommendation engine
//! - Weather lookup over Open-Meteo with a graceful fallback
//! - Configuration handling
//!
//! It is used by `outfit-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod engine;
pub mod model;
pub mod provider;
pub mod resolver;
pub mod rules;

pub use config::{Config, OpenMeteoConfig};
pub use engine::{RandomSource, generate, shuffle, shuffle_with};
pub use model::{
    DEFAULT_LOCATION, Mood, Occasion, OutfitRecommendation, StylePreference, UserInputs,
    WeatherCondition, WeatherObservation,
};
pub use provider::{LookupError, WeatherProvider, provider_from_config};
pub use resolver::WeatherResolver;
