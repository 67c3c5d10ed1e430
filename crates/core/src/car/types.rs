use serde::{Deserialize, Deserializer, Serialize};

use super::CarError;

/// A car record.
///
/// The `id` is supplied by the caller and is the storage key. Writing a car
/// whose `id` already exists replaces every field of the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    #[serde(default, deserialize_with = "string_or_null")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub make: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub model: String,
    pub year: i64,
}

/// Reads a JSON string field, treating `null` as an empty string.
fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Car {
    /// Creates a new car record.
    pub fn new(
        id: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i64,
    ) -> Self {
        Self {
            id: id.into(),
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    /// Parses a car from a raw JSON request body.
    ///
    /// `year` must be present and an integer. Missing or `null` string fields
    /// become empty strings; a string field of another JSON type is rejected.
    /// Unknown fields are ignored.
    pub fn from_json(body: &[u8]) -> Result<Self, CarError> {
        serde_json::from_slice(body).map_err(|e| CarError::InvalidBody(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_valid_body() {
        let car =
            Car::from_json(br#"{"id":"c1","make":"Toyota","model":"Corolla","year":2020}"#)
                .unwrap();

        assert_eq!(car, Car::new("c1", "Toyota", "Corolla", 2020));
    }

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let car = Car::from_json(
            br#"{"id":"c1","make":"Toyota","model":"Corolla","year":2020,"color":"red"}"#,
        )
        .unwrap();

        assert_eq!(car.id, "c1");
    }

    #[test]
    fn test_from_json_missing_year() {
        let result = Car::from_json(br#"{"id":"c1","make":"Toyota","model":"Corolla"}"#);
        assert!(matches!(result, Err(CarError::InvalidBody(_))));
    }

    #[test]
    fn test_from_json_missing_string_fields_are_empty() {
        let car = Car::from_json(br#"{"id":"c9","model":"X","year":2001}"#).unwrap();

        assert_eq!(car, Car::new("c9", "", "X", 2001));
    }

    #[test]
    fn test_from_json_null_string_fields_are_empty() {
        let car =
            Car::from_json(br#"{"id":null,"make":null,"model":"X","year":2001}"#).unwrap();

        assert_eq!(car, Car::new("", "", "X", 2001));
    }

    #[test]
    fn test_from_json_numeric_make() {
        let result = Car::from_json(br#"{"id":"c1","make":7,"model":"X","year":2001}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_string_year() {
        let result =
            Car::from_json(br#"{"id":"c1","make":"Toyota","model":"Corolla","year":"2020"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_fractional_year() {
        let result =
            Car::from_json(br#"{"id":"c1","make":"Toyota","model":"Corolla","year":2020.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(Car::from_json(b"{not json").is_err());
        assert!(Car::from_json(b"").is_err());
        assert!(Car::from_json(b"[]").is_err());
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let car = Car::new("c1", "Toyota", "Corolla", 2020);

        let json = serde_json::to_string(&car).unwrap();

        assert_eq!(
            json,
            r#"{"id":"c1","make":"Toyota","model":"Corolla","year":2020}"#
        );
    }
}
