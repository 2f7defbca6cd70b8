//! Recommendation assembly from the rule tables.
//!
//! [`generate`] is a pure function of its inputs. [`shuffle`] and [`shuffle_with`] rebuild the
//! same recommendation and reorder its items and tips.

use rand::{
    rngs::{StdRng, ThreadRng},
    seq::SliceRandom,
};
use tracing::debug;

use crate::{
    model::{OutfitRecommendation, UserInputs, WeatherCondition, WeatherObservation},
    rules::{mood_tips, occasion_rule, style_rule, weather_rule},
};

const BASE_ITEMS: usize = 2;
const OCCASION_ITEMS: usize = 2;
const ACCESSORIES: usize = 1;
const OCCASION_TIPS: usize = 2;
const MOOD_TIPS: usize = 1;

/// Source of permutations for [`shuffle_with`].
pub trait RandomSource {
    fn permute(&mut self, values: &mut [String]);
}

impl RandomSource for ThreadRng {
    fn permute(&mut self, values: &mut [String]) {
        values.shuffle(self);
    }
}

impl RandomSource for StdRng {
    fn permute(&mut self, values: &mut [String]) {
        values.shuffle(self);
    }
}

pub fn generate(inputs: &UserInputs, weather: &WeatherObservation) -> OutfitRecommendation {
    let clothing = weather_rule(weather.condition);
    let occasion = occasion_rule(inputs.occasion);
    let style = style_rule(inputs.style_preference);
    let adjective = style.adjectives.first().copied().unwrap_or_default();

    let items: Vec<String> = clothing
        .base
        .iter()
        .take(BASE_ITEMS)
        .chain(occasion.items.iter().take(OCCASION_ITEMS))
        .chain(clothing.accessories.iter().take(ACCESSORIES))
        .map(|item| item.to_string())
        .collect();

    let style_tip = format!(
        "Consider {adjective} pieces for your {} style.",
        inputs.style_preference
    );
    let tips: Vec<String> = occasion
        .tips
        .iter()
        .take(OCCASION_TIPS)
        .chain(mood_tips(inputs.mood).iter().take(MOOD_TIPS))
        .map(|tip| tip.to_string())
        .chain(std::iter::once(style_tip))
        .filter(|tip| !tip.is_empty())
        .collect();

    let recommendation = OutfitRecommendation {
        title: format!(
            "{} {} Look",
            capitalize(adjective),
            capitalize(inputs.occasion.as_str())
        ),
        description: describe(inputs, weather.condition, adjective),
        items,
        tips,
        color_palette: style.colors.iter().map(|c| c.to_string()).collect(),
    };

    debug!(
        title = %recommendation.title,
        condition = %weather.condition,
        items = recommendation.items.len(),
        tips = recommendation.tips.len(),
        "Generated outfit recommendation"
    );

    recommendation
}

/// Regenerate with the thread-local RNG.
pub fn shuffle(
    inputs: &UserInputs,
    weather: &WeatherObservation,
    previous: &OutfitRecommendation,
) -> OutfitRecommendation {
    shuffle_with(inputs, weather, previous, &mut rand::thread_rng())
}

/// Rebuild the recommendation and independently permute items and tips. `previous` is not
/// consulted; there is no guarantee the order differs from it.
pub fn shuffle_with<R: RandomSource + ?Sized>(
    inputs: &UserInputs,
    weather: &WeatherObservation,
    _previous: &OutfitRecommendation,
    rng: &mut R,
) -> OutfitRecommendation {
    let mut recommendation = generate(inputs, weather);
    rng.permute(&mut recommendation.items);
    rng.permute(&mut recommendation.tips);
    recommendation
}

fn describe(inputs: &UserInputs, condition: WeatherCondition, adjective: &str) -> String {
    let phrase = match condition {
        WeatherCondition::Rainy => "rain-ready",
        WeatherCondition::Cold => "cozy and warm",
        _ => "weather-appropriate",
    };

    format!(
        "A {adjective} outfit perfect for {}. This {phrase} ensemble combines comfort with style, \
         featuring versatile pieces that work beautifully together.",
        inputs.occasion
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
