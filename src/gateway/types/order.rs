//! Order-flow request types
//!
//! Absent or `null` fields decode to their zero value, so a body like
//! `{"itemId": "x"}` reaches business validation instead of being
//! rejected as malformed.

use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// POST /validate
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidateOrderRequest {
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "nebula-latte")]
    pub item_id: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 2)]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "Ada")]
    pub customer_name: String,
}

/// POST /calculate-price
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatePriceRequest {
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "galaxy-mocha")]
    pub item_id: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 3)]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 4.5)]
    pub base_price: f64,
}

/// POST /check-inventory
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckInventoryRequest {
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "rocket-fuel")]
    pub item_id: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 1)]
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_fields() {
        let req: ValidateOrderRequest = serde_json::from_str(
            r#"{"itemId":"nebula-latte","quantity":3,"customerName":"Ada"}"#,
        )
        .unwrap();
        assert_eq!(req.item_id, "nebula-latte");
        assert_eq!(req.quantity, 3);
        assert_eq!(req.customer_name, "Ada");
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let req: ValidateOrderRequest =
            serde_json::from_str(r#"{"itemId":null,"quantity":2}"#).unwrap();
        assert_eq!(req.item_id, "");
        assert_eq!(req.quantity, 2);
        assert_eq!(req.customer_name, "");

        let req: CalculatePriceRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.base_price, 0.0);
        assert_eq!(req.quantity, 0);
    }

    #[test]
    fn test_integer_price_accepted() {
        let req: CalculatePriceRequest =
            serde_json::from_str(r#"{"itemId":"x","quantity":1,"basePrice":10}"#).unwrap();
        assert_eq!(req.base_price, 10.0);
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(serde_json::from_str::<CheckInventoryRequest>(r#"{"quantity":"two"}"#).is_err());
        assert!(serde_json::from_str::<CheckInventoryRequest>(r#"{"quantity":1.5}"#).is_err());
        assert!(serde_json::from_str::<CheckInventoryRequest>(r#""rocket-fuel""#).is_err());
    }
}
