// ── Condition-code classification ──
//
// Maps weatherapi.com condition codes to a small set of icon
// categories. The code lists come from the provider's published
// condition table; each code belongs to exactly one category and the
// lookup map builder rejects duplicates.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Coarse weather category, independent of day or night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Thunder,
    Sleet,
}

/// Concrete icon to draw. Day/night variants exist only where the sky
/// itself looks different (clear and partly cloudy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconId {
    Sun,
    Moon,
    CloudSun,
    CloudMoon,
    CloudFog,
    CloudRain,
    Snowflake,
    Lightning,
    CloudSnow,
    /// Code missing from the table. Rendered as a neutral placeholder.
    Unknown,
}

// Provider condition codes per category.
const CLEAR: &[u16] = &[1000];
const PARTLY_CLOUDY: &[u16] = &[1003, 1006, 1009];
const FOG: &[u16] = &[1030, 1135, 1147];
const RAIN: &[u16] = &[
    1063, 1150, 1153, 1180, 1183, 1186, 1189, 1192, 1195, 1240, 1243, 1246,
];
const SNOW: &[u16] = &[
    1066, 1114, 1117, 1210, 1213, 1216, 1219, 1222, 1225, 1255, 1258,
];
const THUNDER: &[u16] = &[1087, 1273, 1276, 1279, 1282];
const SLEET: &[u16] = &[
    1069, 1072, 1168, 1171, 1198, 1201, 1204, 1207, 1237, 1249, 1252, 1261, 1264,
];

const CATEGORIES: &[(Category, &[u16])] = &[
    (Category::Clear, CLEAR),
    (Category::PartlyCloudy, PARTLY_CLOUDY),
    (Category::Fog, FOG),
    (Category::Rain, RAIN),
    (Category::Snow, SNOW),
    (Category::Thunder, THUNDER),
    (Category::Sleet, SLEET),
];

static CODE_TABLE: LazyLock<HashMap<u16, Category>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for &(category, codes) in CATEGORIES {
        for &code in codes {
            let previous = table.insert(code, category);
            assert!(
                previous.is_none(),
                "condition code {code} listed under two categories"
            );
        }
    }
    table
});

/// Category for a provider condition code, if the code is known.
pub fn category_for(code: u16) -> Option<Category> {
    CODE_TABLE.get(&code).copied()
}

/// Icon for a condition code and time of day.
pub fn classify(code: u16, is_day: bool) -> IconId {
    match category_for(code) {
        Some(Category::Clear) => {
            if is_day {
                IconId::Sun
            } else {
                IconId::Moon
            }
        }
        Some(Category::PartlyCloudy) => {
            if is_day {
                IconId::CloudSun
            } else {
                IconId::CloudMoon
            }
        }
        Some(Category::Fog) => IconId::CloudFog,
        Some(Category::Rain) => IconId::CloudRain,
        Some(Category::Snow) => IconId::Snowflake,
        Some(Category::Thunder) => IconId::Lightning,
        Some(Category::Sleet) => IconId::CloudSnow,
        None => IconId::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lists_are_pairwise_disjoint() {
        for (i, &(cat_a, codes_a)) in CATEGORIES.iter().enumerate() {
            for &(cat_b, codes_b) in &CATEGORIES[i + 1..] {
                for code in codes_a {
                    assert!(
                        !codes_b.contains(code),
                        "code {code} appears in both {cat_a:?} and {cat_b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_table_covers_every_listed_code() {
        let listed: usize = CATEGORIES.iter().map(|(_, codes)| codes.len()).sum();
        assert_eq!(CODE_TABLE.len(), listed);
        for &(category, codes) in CATEGORIES {
            for &code in codes {
                assert_eq!(category_for(code), Some(category));
            }
        }
    }

    #[test]
    fn test_day_night_variants() {
        assert_eq!(classify(1000, true), IconId::Sun);
        assert_eq!(classify(1000, false), IconId::Moon);
        assert_eq!(classify(1003, true), IconId::CloudSun);
        assert_eq!(classify(1003, false), IconId::CloudMoon);
    }

    #[test]
    fn test_non_variant_categories_ignore_time_of_day() {
        for code in [1030u16, 1183, 1225, 1273, 1204] {
            assert_eq!(classify(code, true), classify(code, false), "code {code}");
        }
    }

    #[test]
    fn test_unlisted_code_is_unknown() {
        assert_eq!(classify(9999, true), IconId::Unknown);
        assert_eq!(classify(1001, false), IconId::Unknown);
    }

    #[test]
    fn test_spot_checks_match_provider_table() {
        assert_eq!(classify(1195, true), IconId::CloudRain);
        assert_eq!(classify(1117, false), IconId::Snowflake);
        assert_eq!(classify(1087, true), IconId::Lightning);
        assert_eq!(classify(1264, false), IconId::CloudSnow);
        assert_eq!(classify(1147, true), IconId::CloudFog);
    }
}
