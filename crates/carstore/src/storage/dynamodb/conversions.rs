//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and cars.
//! These are testable in isolation without DynamoDB access.
//!
//! Decoding applies one policy to every read path: an absent attribute decodes
//! to the zero value, while an attribute of the wrong kind (or a number that is
//! not an integer) is reported as [`RepositoryError::InvalidData`].

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use carstore_core::car::Car;
use carstore_core::storage::RepositoryError;

// ============================================================================
// Attribute names
// ============================================================================

/// Hash key of the table.
pub const ATTR_ID: &str = "ID";
pub const ATTR_MAKE: &str = "Make";
pub const ATTR_MODEL: &str = "Model";
pub const ATTR_YEAR: &str = "Year";

// ============================================================================
// Car conversions
// ============================================================================

/// Convert a Car to DynamoDB item.
pub fn car_to_item(car: &Car) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ATTR_ID.to_string(), AttributeValue::S(car.id.clone()));
    item.insert(ATTR_MAKE.to_string(), AttributeValue::S(car.make.clone()));
    item.insert(ATTR_MODEL.to_string(), AttributeValue::S(car.model.clone()));
    item.insert(ATTR_YEAR.to_string(), AttributeValue::N(car.year.to_string()));

    item
}

/// Convert a DynamoDB item to Car.
pub fn item_to_car(item: &HashMap<String, AttributeValue>) -> Result<Car, RepositoryError> {
    Ok(Car {
        id: get_string(item, ATTR_ID)?,
        make: get_string(item, ATTR_MAKE)?,
        model: get_string(item, ATTR_MODEL)?,
        year: get_integer(item, ATTR_YEAR)?,
    })
}

/// Build the key map for a point lookup.
pub fn car_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(ATTR_ID.to_string(), AttributeValue::S(id.to_string()))])
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a string attribute, defaulting to an empty string when absent.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    match item.get(key) {
        None => Ok(String::new()),
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(other) => Err(wrong_kind(key, "S", other)),
    }
}

/// Get an integer stored as a number attribute, defaulting to 0 when absent.
fn get_integer(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, RepositoryError> {
    match item.get(key) {
        None => Ok(0),
        Some(AttributeValue::N(n)) => n.parse().map_err(|_| {
            RepositoryError::InvalidData(format!("{} attribute is not an integer: {}", key, n))
        }),
        Some(other) => Err(wrong_kind(key, "N", other)),
    }
}

fn wrong_kind(key: &str, expected: &str, found: &AttributeValue) -> RepositoryError {
    RepositoryError::InvalidData(format!(
        "{} attribute: expected {}, found {}",
        key,
        expected,
        attribute_kind(found)
    ))
}

/// DynamoDB type descriptor of an attribute value.
fn attribute_kind(value: &AttributeValue) -> &'static str {
    match value {
        AttributeValue::S(_) => "S",
        AttributeValue::N(_) => "N",
        AttributeValue::B(_) => "B",
        AttributeValue::Bool(_) => "BOOL",
        AttributeValue::Null(_) => "NULL",
        AttributeValue::M(_) => "M",
        AttributeValue::L(_) => "L",
        AttributeValue::Ss(_) => "SS",
        AttributeValue::Ns(_) => "NS",
        AttributeValue::Bs(_) => "BS",
        _ => "unknown",
    }
}
