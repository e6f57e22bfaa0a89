use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::GeoCoordinate;

/// A named point of interest on the map. Immutable once constructed;
/// equality is by value (name and both coordinates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monument {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Monument {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Display title for list rows and marker callouts.
    pub fn title(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

/// Wire form of a [`Monument`]: the catalog API encodes both coordinates
/// as decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMonument {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
}

impl From<&Monument> for WireMonument {
    fn from(monument: &Monument) -> Self {
        Self {
            name: monument.name.clone(),
            latitude: monument.latitude.to_string(),
            longitude: monument.longitude.to_string(),
        }
    }
}

/// A wire record carried a coordinate string that does not parse as a
/// decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} is not a decimal number: {value:?}")]
pub struct InvalidCoordinate {
    pub field: &'static str,
    pub value: String,
}

impl TryFrom<WireMonument> for Monument {
    type Error = InvalidCoordinate;

    fn try_from(wire: WireMonument) -> Result<Self, Self::Error> {
        let latitude = parse_coordinate("latitude", &wire.latitude)?;
        let longitude = parse_coordinate("longitude", &wire.longitude)?;
        Ok(Self {
            name: wire.name,
            latitude,
            longitude,
        })
    }
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64, InvalidCoordinate> {
    value.parse::<f64>().map_err(|_| InvalidCoordinate {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{Monument, WireMonument};

    #[test]
    fn wire_record_converts_with_exact_coordinates() {
        let wire = WireMonument {
            name: "Giza".to_string(),
            latitude: "29.9792".to_string(),
            longitude: "31.1342".to_string(),
        };

        let monument = Monument::try_from(wire).expect("numeric strings should convert");
        assert_eq!(monument.name, "Giza");
        assert_eq!(monument.latitude, 29.9792);
        assert_eq!(monument.longitude, 31.1342);
    }

    #[test]
    fn non_numeric_coordinate_is_rejected_with_field_name() {
        let wire = WireMonument {
            name: "Giza".to_string(),
            latitude: "north".to_string(),
            longitude: "31.1342".to_string(),
        };

        let err = Monument::try_from(wire).expect_err("non-numeric latitude should fail");
        assert_eq!(err.field, "latitude");
        assert_eq!(err.value, "north");
    }

    #[test]
    fn wire_round_trip_preserves_value_equality() {
        let monument = Monument::new("Petra", 30.3285, 35.4444);
        let wire = WireMonument::from(&monument);
        assert_eq!(wire.latitude, "30.3285");

        let back = Monument::try_from(wire).expect("own wire output should convert");
        assert_eq!(back, monument);
    }

    #[test]
    fn wire_record_deserializes_from_catalog_json() {
        let wire: WireMonument = serde_json::from_str(
            r#"{"name":"Giza","latitude":"29.9792","longitude":"31.1342"}"#,
        )
        .expect("catalog record should deserialize");
        assert_eq!(wire.name, "Giza");
        assert_eq!(wire.latitude, "29.9792");
    }

    #[test]
    fn missing_field_fails_wire_deserialization() {
        let result: Result<WireMonument, _> =
            serde_json::from_str(r#"{"name":"Petra","longitude":"35.4444"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn title_and_coordinate_expose_record_fields() {
        let monument = Monument::new("Taj Mahal", 27.1751, 78.0421);
        assert_eq!(monument.title(), "Taj Mahal");
        let coordinate = monument.coordinate();
        assert_eq!(coordinate.latitude, 27.1751);
        assert_eq!(coordinate.longitude, 78.0421);
    }
}
