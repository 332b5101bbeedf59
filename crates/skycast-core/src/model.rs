// ── Domain types ──

use serde::{Deserialize, Serialize};

/// One complete weather observation for a resolved place.
///
/// Built from a provider response by [`crate::convert`]; every field is
/// populated or the conversion never happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Resolved place name as the provider spells it.
    pub name: String,
    pub country: String,
    /// Air temperature, degrees Celsius.
    pub temp_c: f64,
    /// Apparent temperature, degrees Celsius.
    pub feelslike_c: f64,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Wind speed, km/h.
    pub wind_kph: f64,
    /// Atmospheric pressure, millibars.
    pub pressure_mb: f64,
    /// Provider's human-readable condition label.
    pub condition_text: String,
    /// Provider condition code, input to [`crate::icons::classify`].
    pub condition_code: u16,
    /// Daytime at the observed place.
    pub is_day: bool,
    pub lat: f64,
    pub lon: f64,
}

impl Reading {
    /// "Name, Country" as shown in the header line.
    pub fn place_label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }

    /// Temperature rounded to the nearest whole degree for display.
    pub fn temp_rounded(&self) -> i64 {
        self.temp_c.round() as i64
    }

    /// Apparent temperature rounded for display.
    pub fn feelslike_rounded(&self) -> i64 {
        self.feelslike_c.round() as i64
    }
}

/// UI color scheme. Persisted across runs in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reading() -> Reading {
        Reading {
            name: "Paris".into(),
            country: "France".into(),
            temp_c: 18.4,
            feelslike_c: 17.5,
            humidity: 63,
            wind_kph: 14.8,
            pressure_mb: 1016.0,
            condition_text: "Partly cloudy".into(),
            condition_code: 1003,
            is_day: true,
            lat: 48.85,
            lon: 2.35,
        }
    }

    #[test]
    fn test_place_label() {
        assert_eq!(reading().place_label(), "Paris, France");
    }

    #[test]
    fn test_rounding_is_nearest_not_truncation() {
        let mut r = reading();
        r.temp_c = 18.5;
        r.feelslike_c = -0.6;
        assert_eq!(r.temp_rounded(), 19);
        assert_eq!(r.feelslike_rounded(), -1);
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let parsed: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemeMode::Light);
    }
}
