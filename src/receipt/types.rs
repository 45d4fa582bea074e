use serde::{Deserialize, Serialize};

/// A purchase receipt as submitted by a client.
///
/// Every field is optional on the wire so that absence can be reported as a
/// named missing field instead of a generic decode error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub retailer: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    #[serde(default)]
    pub purchase_date: Option<String>,
    /// 24-hour clock, `HH:MM`
    #[serde(default)]
    pub purchase_time: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<Item>>,
    /// Decimal string, e.g. "35.35"
    #[serde(default)]
    pub total: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

impl Item {
    pub fn new(short_description: &str, price: &str) -> Self {
        Self {
            short_description: Some(short_description.to_string()),
            price: Some(price.to_string()),
        }
    }
}

/// Borrowed view of a receipt whose required fields are all present.
///
/// Only produced by [`super::validate_receipt`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidReceipt<'a> {
    pub retailer: &'a str,
    pub purchase_date: &'a str,
    pub purchase_time: &'a str,
    pub total: &'a str,
    pub items: Vec<ValidItem<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidItem<'a> {
    pub short_description: &'a str,
    pub price: &'a str,
}

/// Response body for a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmitResponse {
    pub id: String,
}

/// Response body for a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}
