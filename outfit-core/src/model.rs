use serde::{Deserialize, Serialize};
use std::fmt;

/// Location used when the user leaves the location field blank.
pub const DEFAULT_LOCATION: &str = "New York";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    College,
    Work,
    Casual,
    Event,
}

impl Occasion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::College => "college",
            Occasion::Work => "work",
            Occasion::Casual => "casual",
            Occasion::Event => "event",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Occasion::College => "College",
            Occasion::Work => "Work",
            Occasion::Casual => "Casual Day",
            Occasion::Event => "Special Event",
        }
    }

    pub const fn all() -> &'static [Occasion] {
        &[Occasion::College, Occasion::Work, Occasion::Casual, Occasion::Event]
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Occasion {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "college" => Ok(Occasion::College),
            "work" => Ok(Occasion::Work),
            "casual" => Ok(Occasion::Casual),
            "event" => Ok(Occasion::Event),
            _ => Err(anyhow::anyhow!(
                "Unknown occasion '{value}'. Supported occasions: college, work, casual, event."
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreference {
    Casual,
    Formal,
    Comfortable,
    Trendy,
}

impl StylePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreference::Casual => "casual",
            StylePreference::Formal => "formal",
            StylePreference::Comfortable => "comfortable",
            StylePreference::Trendy => "trendy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StylePreference::Casual => "Casual",
            StylePreference::Formal => "Formal",
            StylePreference::Comfortable => "Comfortable",
            StylePreference::Trendy => "Trendy",
        }
    }

    pub const fn all() -> &'static [StylePreference] {
        &[
            StylePreference::Casual,
            StylePreference::Formal,
            StylePreference::Comfortable,
            StylePreference::Trendy,
        ]
    }
}

impl fmt::Display for StylePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StylePreference {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "casual" => Ok(StylePreference::Casual),
            "formal" => Ok(StylePreference::Formal),
            "comfortable" => Ok(StylePreference::Comfortable),
            "trendy" => Ok(StylePreference::Trendy),
            _ => Err(anyhow::anyhow!(
                "Unknown style '{value}'. Supported styles: casual, formal, comfortable, trendy."
            )),
        }
    }
}

/// Optional tone for the outfit. `None` means "no preference" and contributes no tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Confident,
    Relaxed,
    Energetic,
    Sophisticated,
    #[default]
    None,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Confident => "confident",
            Mood::Relaxed => "relaxed",
            Mood::Energetic => "energetic",
            Mood::Sophisticated => "sophisticated",
            Mood::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Confident => "Confident",
            Mood::Relaxed => "Relaxed",
            Mood::Energetic => "Energetic",
            Mood::Sophisticated => "Sophisticated",
            Mood::None => "No preference",
        }
    }

    pub const fn all() -> &'static [Mood] {
        &[Mood::Confident, Mood::Relaxed, Mood::Energetic, Mood::Sophisticated, Mood::None]
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Mood {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "confident" => Ok(Mood::Confident),
            "relaxed" => Ok(Mood::Relaxed),
            "energetic" => Ok(Mood::Energetic),
            "sophisticated" => Ok(Mood::Sophisticated),
            "" | "none" => Ok(Mood::None),
            _ => Err(anyhow::anyhow!(
                "Unknown mood '{value}'. Supported moods: confident, relaxed, energetic, sophisticated, none."
            )),
        }
    }
}

/// Categorical weather bucket derived from temperature and weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Hot,
    Warm,
    Mild,
    Cold,
    Rainy,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Hot => "hot",
            WeatherCondition::Warm => "warm",
            WeatherCondition::Mild => "mild",
            WeatherCondition::Cold => "cold",
            WeatherCondition::Rainy => "rainy",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Hot => "🌡️",
            WeatherCondition::Warm => "☀️",
            WeatherCondition::Mild => "🌤️",
            WeatherCondition::Cold => "❄️",
            WeatherCondition::Rainy => "🌧️",
        }
    }

    /// Human-readable summary embedding the rounded temperature.
    pub fn describe(&self, temperature: i32) -> String {
        match self {
            WeatherCondition::Hot => format!("Hot day at {temperature}°C - stay cool!"),
            WeatherCondition::Warm => format!("Warm and pleasant at {temperature}°C"),
            WeatherCondition::Mild => format!("Comfortable {temperature}°C - perfect for layers"),
            WeatherCondition::Cold => format!("Chilly {temperature}°C - bundle up!"),
            WeatherCondition::Rainy => {
                format!("Rainy conditions at {temperature}°C - bring an umbrella")
            }
        }
    }

    /// Classify a rounded temperature and raw weather code. Codes in `200..600` win over
    /// temperature.
    pub fn classify(temperature: i32, weather_code: i32) -> Self {
        if (200..600).contains(&weather_code) {
            return WeatherCondition::Rainy;
        }

        match temperature {
            t if t >= 30 => WeatherCondition::Hot,
            t if t >= 22 => WeatherCondition::Warm,
            t if t >= 12 => WeatherCondition::Mild,
            _ => WeatherCondition::Cold,
        }
    }

    pub const fn all() -> &'static [WeatherCondition] {
        &[
            WeatherCondition::Hot,
            WeatherCondition::Warm,
            WeatherCondition::Mild,
            WeatherCondition::Cold,
            WeatherCondition::Rainy,
        ]
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInputs {
    pub location: String,
    pub occasion: Occasion,
    pub style_preference: StylePreference,
    pub mood: Mood,
}

impl UserInputs {
    /// Build inputs, replacing a blank location with [`DEFAULT_LOCATION`].
    pub fn new(
        location: &str,
        occasion: Occasion,
        style_preference: StylePreference,
        mood: Mood,
    ) -> Self {
        Self {
            location: normalize_location(location, DEFAULT_LOCATION),
            occasion,
            style_preference,
            mood,
        }
    }
}

/// `raw` unchanged, or `fallback` when `raw` is blank.
pub fn normalize_location(raw: &str, fallback: &str) -> String {
    if raw.trim().is_empty() { fallback.to_string() } else { raw.to_string() }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature: i32,
    pub condition: WeatherCondition,
    pub description: String,
    pub humidity: u8,
    pub city: String,
    pub icon: String,
}

impl WeatherObservation {
    /// Build an observation from a rounded temperature and weather code.
    pub fn from_conditions(temperature: i32, weather_code: i32, humidity: u8, city: String) -> Self {
        let condition = WeatherCondition::classify(temperature, weather_code);

        Self {
            temperature,
            condition,
            description: condition.describe(temperature),
            humidity,
            city,
            icon: condition.icon().to_string(),
        }
    }

    /// Plausible default used whenever the weather lookup fails.
    pub fn fallback(city: &str) -> Self {
        Self {
            temperature: 22,
            condition: WeatherCondition::Mild,
            description: "Pleasant weather".to_string(),
            humidity: 50,
            city: city.to_string(),
            icon: WeatherCondition::Mild.icon().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRecommendation {
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
    pub tips: Vec<String>,
    pub color_palette: Vec<String>,
}
