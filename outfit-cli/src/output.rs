use outfit_core::{OutfitRecommendation, UserInputs, WeatherObservation};
use std::fmt::Write;

pub fn weather_card(weather: &WeatherObservation) -> String {
    format!(
        "{} {}\n   {}\n   Temperature: {}°C | Humidity: {}%",
        weather.icon, weather.city, weather.description, weather.temperature, weather.humidity
    )
}

pub fn inputs_line(inputs: &UserInputs) -> String {
    format!(
        "{} | {} | Mood: {}",
        inputs.occasion.label(),
        inputs.style_preference.label(),
        inputs.mood.label()
    )
}

pub fn recommendation_card(rec: &OutfitRecommendation) -> String {
    let mut out = format!("{}\n{}\n", rec.title, rec.description);

    out.push_str("\nOutfit:\n");
    for item in &rec.items {
        let _ = writeln!(out, "  - {item}");
    }

    out.push_str("\nTips:\n");
    for tip in &rec.tips {
        let _ = writeln!(out, "  * {tip}");
    }

    let _ = write!(out, "\nColors: {}", rec.color_palette.join(", "));
    out
}
