//! Terminal glyphs for the weather icon categories.

use skycast_core::IconId;

/// Single-cell glyph for an icon.
pub fn glyph(icon: IconId) -> &'static str {
    match icon {
        IconId::Sun => "☀",
        IconId::Moon => "☾",
        IconId::CloudSun => "⛅",
        IconId::CloudMoon => "☁",
        IconId::CloudFog => "≋",
        IconId::CloudRain => "☂",
        IconId::Snowflake => "❄",
        IconId::Lightning => "↯",
        IconId::CloudSnow => "❆",
        IconId::Unknown => "?",
    }
}
