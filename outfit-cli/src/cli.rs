use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, CustomUserError, Text, validator::Validation};
use outfit_core::{
    Config, Mood, Occasion, OutfitRecommendation, StylePreference, UserInputs, WeatherObservation,
    WeatherResolver, provider_from_config,
};
use serde::Serialize;
use tracing::warn;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "outfit", version, about = "Weather-aware outfit recommendations")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the default location and lookup options.
    Configure,

    /// Show current weather for a location.
    Weather {
        /// City or place name; the configured default is used when omitted.
        location: Option<String>,
    },

    /// Recommend an outfit for a location and occasion.
    Recommend {
        /// City or place name; the configured default is used when omitted.
        location: Option<String>,

        /// college, work, casual or event.
        #[arg(long, short, value_parser = parse_occasion, default_value = "casual")]
        occasion: Occasion,

        /// casual, formal, comfortable or trendy.
        #[arg(long, short, value_parser = parse_style, default_value = "casual")]
        style: StylePreference,

        /// confident, relaxed, energetic, sophisticated or none.
        #[arg(long, short, value_parser = parse_mood, default_value = "none")]
        mood: Mood,

        /// Number of extra shuffled variants to print.
        #[arg(long, short, default_value_t = 0)]
        regenerate: usize,

        /// Print JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },
}

fn parse_occasion(value: &str) -> anyhow::Result<Occasion> {
    Occasion::try_from(value)
}

fn parse_style(value: &str) -> anyhow::Result<StylePreference> {
    StylePreference::try_from(value)
}

fn parse_mood(value: &str) -> anyhow::Result<Mood> {
    Mood::try_from(value)
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    inputs: &'a UserInputs,
    weather: &'a WeatherObservation,
    recommendations: &'a [OutfitRecommendation],
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Weather { location } => {
                let config = Config::load()?;
                let location = config.location_or_default(location.as_deref());
                let weather = resolve_weather(&config, &location).await;
                println!("{}", output::weather_card(&weather));
            }
            Command::Recommend { location, occasion, style, mood, regenerate, json } => {
                let config = Config::load()?;
                let location = config.location_or_default(location.as_deref());
                let inputs = UserInputs::new(&location, occasion, style, mood);

                let weather = resolve_weather(&config, &inputs.location).await;
                let recommendations = recommend(&inputs, &weather, regenerate);

                if json {
                    let report = Report {
                        inputs: &inputs,
                        weather: &weather,
                        recommendations: &recommendations,
                    };
                    let text = serde_json::to_string_pretty(&report)
                        .context("Failed to serialize recommendation to JSON")?;
                    println!("{text}");
                } else {
                    println!("{}", output::weather_card(&weather));
                    println!("{}", output::inputs_line(&inputs));
                    for (idx, rec) in recommendations.iter().enumerate() {
                        println!();
                        if idx > 0 {
                            println!("Variant {idx}");
                        }
                        println!("{}", output::recommendation_card(rec));
                    }
                }
            }
        }

        Ok(())
    }
}

/// First recommendation followed by `regenerate` shuffled variants.
fn recommend(
    inputs: &UserInputs,
    weather: &WeatherObservation,
    regenerate: usize,
) -> Vec<OutfitRecommendation> {
    let first = outfit_core::generate(inputs, weather);

    std::iter::successors(Some(first), |previous| {
        Some(outfit_core::shuffle(inputs, weather, previous))
    })
    .take(regenerate + 1)
    .collect()
}

async fn resolve_weather(config: &Config, location: &str) -> WeatherObservation {
    let resolver = WeatherResolver::new(provider_from_config(&config.open_meteo));

    let Some(limit) = config.timeout() else {
        return resolver.resolve(location).await;
    };

    match tokio::time::timeout(limit, resolver.resolve(location)).await {
        Ok(weather) => weather,
        Err(_) => {
            warn!(
                %location,
                timeout_secs = config.timeout_secs,
                "Weather lookup timed out, using default weather"
            );
            WeatherObservation::fallback(location)
        }
    }
}

fn validate_timeout(secs: &u64) -> Result<Validation, CustomUserError> {
    if *secs == 0 {
        Ok(Validation::Invalid("Timeout must be at least 1 second".into()))
    } else {
        Ok(Validation::Valid)
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let location = Text::new("Default location:")
        .with_default(config.default_location())
        .with_help_message("Used when no location is given")
        .prompt()
        .context("Failed to read default location")?;
    config.set_default_location(&location);

    let language = Text::new("Geocoding language:")
        .with_default(&config.open_meteo.language)
        .prompt()
        .context("Failed to read geocoding language")?;
    config.open_meteo.language = language.trim().to_string();

    config.timeout_secs = CustomType::<u64>::new("Weather lookup timeout (seconds):")
        .with_default(config.timeout_secs.max(1))
        .with_validator(validate_timeout)
        .prompt()
        .context("Failed to read timeout")?;

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
