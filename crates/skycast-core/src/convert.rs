// ── API-to-domain conversions ──
//
// Bridges the raw `skycast_api` wire types into the canonical
// `skycast_core::model` types. The wire layer already rejected
// incomplete bodies, so conversion is total.

use skycast_api::CurrentResponse;

use crate::model::Reading;

impl From<CurrentResponse> for Reading {
    fn from(resp: CurrentResponse) -> Self {
        let loc = resp.location;
        let cur = resp.current;
        Reading {
            name: loc.name,
            country: loc.country,
            temp_c: cur.temp_c,
            feelslike_c: cur.feelslike_c,
            humidity: cur.humidity,
            wind_kph: cur.wind_kph,
            pressure_mb: cur.pressure_mb,
            condition_text: cur.condition.text,
            condition_code: cur.condition.code,
            // The provider uses 1 for day; any other value means night.
            is_day: cur.is_day == 1,
            lat: loc.lat,
            lon: loc.lon,
        }
    }
}
