//! Static rule tables keyed by the closed input enums.
//!
//! Every lookup is an exhaustive `match`, so adding an enum variant without a rule is a
//! compile error.

use crate::model::{Mood, Occasion, StylePreference, WeatherCondition};

#[derive(Debug)]
pub struct WeatherRule {
    pub base: &'static [&'static str],
    pub accessories: &'static [&'static str],
}

#[derive(Debug)]
pub struct OccasionRule {
    pub items: &'static [&'static str],
    pub tips: &'static [&'static str],
}

#[derive(Debug)]
pub struct StyleRule {
    pub adjectives: &'static [&'static str],
    pub colors: &'static [&'static str],
}

static HOT: WeatherRule = WeatherRule {
    base: &["Light cotton shirt", "Breathable linen pants", "Shorts", "Flowy dress", "Tank top"],
    accessories: &["Sunglasses", "Sun hat", "Light scarf"],
};

static WARM: WeatherRule = WeatherRule {
    base: &["Cotton t-shirt", "Light blouse", "Chinos", "Midi skirt", "Short-sleeve button-up"],
    accessories: &["Sunglasses", "Light cardigan for evening"],
};

static MILD: WeatherRule = WeatherRule {
    base: &["Long-sleeve shirt", "Light sweater", "Jeans", "Blazer", "Cardigan"],
    accessories: &["Light jacket", "Scarf"],
};

static COLD: WeatherRule = WeatherRule {
    base: &["Warm sweater", "Wool coat", "Layered top", "Thermal base", "Heavy jeans"],
    accessories: &["Warm scarf", "Beanie", "Gloves", "Warm boots"],
};

static RAINY: WeatherRule = WeatherRule {
    base: &["Water-resistant jacket", "Quick-dry pants", "Layered outfit"],
    accessories: &["Umbrella", "Waterproof boots", "Rain hat"],
};

static COLLEGE: OccasionRule = OccasionRule {
    items: &["Comfortable sneakers", "Backpack-friendly layers", "Casual denim"],
    tips: &["Prioritize comfort for long days", "Choose versatile pieces", "Easy to wash fabrics"],
};

static WORK: OccasionRule = OccasionRule {
    items: &["Tailored trousers", "Collared shirt", "Blazer", "Loafers or dress shoes"],
    tips: &[
        "Keep it professional yet comfortable",
        "Neutral colors are safe choices",
        "Iron your clothes",
    ],
};

static CASUAL_DAY: OccasionRule = OccasionRule {
    items: &["Relaxed jeans", "Comfortable tee", "Sneakers", "Hoodie"],
    tips: &["Express your personal style", "Mix patterns if you feel bold", "Comfort is key"],
};

static EVENT: OccasionRule = OccasionRule {
    items: &["Elegant dress or suit", "Statement piece", "Dress shoes", "Minimal jewelry"],
    tips: &["Check the dress code", "Choose quality over quantity", "Add one statement accessory"],
};

static CASUAL_STYLE: StyleRule = StyleRule {
    adjectives: &["relaxed", "effortless", "easy-going"],
    colors: &["Denim blue", "White", "Earth tones", "Soft grey"],
};

static FORMAL: StyleRule = StyleRule {
    adjectives: &["polished", "sophisticated", "refined"],
    colors: &["Navy", "Charcoal", "Burgundy", "Classic black"],
};

static COMFORTABLE: StyleRule = StyleRule {
    adjectives: &["cozy", "soft", "stretchy"],
    colors: &["Cream", "Soft pastels", "Warm neutrals", "Olive"],
};

static TRENDY: StyleRule = StyleRule {
    adjectives: &["bold", "statement-making", "contemporary"],
    colors: &["Trending colors", "Bold patterns", "Mixed textures", "Metallics"],
};

pub fn weather_rule(condition: WeatherCondition) -> &'static WeatherRule {
    match condition {
        WeatherCondition::Hot => &HOT,
        WeatherCondition::Warm => &WARM,
        WeatherCondition::Mild => &MILD,
        WeatherCondition::Cold => &COLD,
        WeatherCondition::Rainy => &RAINY,
    }
}

pub fn occasion_rule(occasion: Occasion) -> &'static OccasionRule {
    match occasion {
        Occasion::College => &COLLEGE,
        Occasion::Work => &WORK,
        Occasion::Casual => &CASUAL_DAY,
        Occasion::Event => &EVENT,
    }
}

pub fn style_rule(style: StylePreference) -> &'static StyleRule {
    match style {
        StylePreference::Casual => &CASUAL_STYLE,
        StylePreference::Formal => &FORMAL,
        StylePreference::Comfortable => &COMFORTABLE,
        StylePreference::Trendy => &TRENDY,
    }
}

pub fn mood_tips(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Confident => &[
            "Power colors like red or black",
            "Well-fitted silhouettes",
            "Statement accessories",
        ],
        Mood::Relaxed => &["Flowing fabrics", "Neutral tones", "Comfortable fits"],
        Mood::Energetic => &["Bright colors", "Bold patterns", "Athletic-inspired pieces"],
        Mood::Sophisticated => &["Monochromatic looks", "Quality fabrics", "Minimal jewelry"],
        Mood::None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_condition_has_clothing_and_accessories() {
        for condition in WeatherCondition::all() {
            let rule = weather_rule(*condition);
            assert!(rule.base.len() >= 2, "{condition} needs at least two base items");
            assert!(!rule.accessories.is_empty(), "{condition} needs an accessory");
        }
    }

    #[test]
    fn every_occasion_has_items_and_tips() {
        for occasion in Occasion::all() {
            let rule = occasion_rule(*occasion);
            assert!(rule.items.len() >= 2, "{occasion} needs at least two items");
            assert!(rule.tips.len() >= 2, "{occasion} needs at least two tips");
        }
    }

    #[test]
    fn every_style_has_adjectives_and_colors() {
        for style in StylePreference::all() {
            let rule = style_rule(*style);
            assert!(!rule.adjectives.is_empty(), "{style} needs an adjective");
            assert!(!rule.colors.is_empty(), "{style} needs colors");
        }
    }

    #[test]
    fn only_no_preference_mood_is_empty() {
        for mood in Mood::all() {
            let tips = mood_tips(*mood);
            if *mood == Mood::None {
                assert!(tips.is_empty());
            } else {
                assert!(!tips.is_empty(), "{mood} needs tips");
            }
        }
    }
}
