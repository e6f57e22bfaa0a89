use reqwest::Url;
use wonders_shared::GeoCoordinate;

pub const DIRECTIONS_BASE_URL: &str = "http://maps.apple.com/";

/// URL that hands a destination to the external maps application for
/// turn-by-turn directions.
pub fn directions_url(to: GeoCoordinate) -> Url {
    let raw = format!("{DIRECTIONS_BASE_URL}?daddr={},{}", to.latitude, to.longitude);
    Url::parse(&raw).unwrap_or_else(|e| panic!("directions URL failed to parse: {e}"))
}
