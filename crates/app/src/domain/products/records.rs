//! Product Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use uuid::Uuid;

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Product identifier
///
/// Opaque to the service: generated ids are hyphenated v4 UUIDs, but seeded
/// records may carry any string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Non-negative product price
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Returns `None` for negative or non-finite values.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Self(value))
    }

    #[must_use]
    pub const fn as_f64(self) -> f64 {
        self.0
    }

    fn as_whole(self) -> Option<u64> {
        #[expect(clippy::float_cmp, reason = "exact integral check")]
        let whole = self.0.trunc() == self.0 && self.0 <= MAX_EXACT_INTEGER;

        if !whole {
            return None;
        }

        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is a non-negative integer below 2^53"
        )]
        let value = self.0 as u64;

        Some(value)
    }
}

impl From<u32> for Price {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.as_whole() {
            Some(whole) => Display::fmt(&whole, f),
            None => Display::fmt(&self.0, f),
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_whole() {
            Some(whole) => serializer.serialize_u64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;

        Self::new(value).ok_or_else(|| D::Error::custom("price must be a non-negative number"))
    }
}

/// Product Record, as stored in the products collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
}

/// Stock Record, as stored in the stocks collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub product_id: ProductId,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn whole_prices_serialize_without_fraction() -> TestResult {
        let price = Price::from(999);

        assert_eq!(serde_json::to_value(price)?, json!(999));
        assert_eq!(price.to_string(), "999");

        Ok(())
    }

    #[test]
    fn fractional_prices_keep_their_fraction() -> TestResult {
        let price = Price::new(19.99).ok_or("valid price")?;

        assert_eq!(serde_json::to_value(price)?, json!(19.99));

        Ok(())
    }

    #[test]
    fn negative_prices_are_rejected() {
        assert!(Price::new(-0.01).is_none());
        assert!(Price::new(f64::NAN).is_none());
        assert!(serde_json::from_value::<Price>(json!(-5)).is_err());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ProductId::new(), ProductId::new());
    }

    #[test]
    fn product_record_defaults_missing_description() -> TestResult {
        let record: ProductRecord = serde_json::from_value(json!({
            "id": "1",
            "title": "Laptop",
            "price": 999
        }))?;

        assert_eq!(record.description, "");
        assert_eq!(record.id.as_str(), "1");

        Ok(())
    }
}
