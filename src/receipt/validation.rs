use super::types::{Item, Receipt, ValidItem, ValidReceipt};
use crate::error::{ReceiptError, Result};

/// Check that every required field of a receipt is present.
///
/// Fields are checked in a fixed order and the first absent one is reported:
/// `retailer`, `purchaseDate`, `purchaseTime`, `total`, `items`, then each
/// item's `shortDescription` and `price` in sequence order. A missing receipt
/// is reported as `receipt`. Values are not parsed here.
pub fn validate_receipt(receipt: Option<&Receipt>) -> Result<ValidReceipt<'_>> {
    let receipt = receipt.ok_or_else(|| ReceiptError::missing("receipt"))?;

    let retailer = required(&receipt.retailer, "retailer")?;
    let purchase_date = required(&receipt.purchase_date, "purchaseDate")?;
    let purchase_time = required(&receipt.purchase_time, "purchaseTime")?;
    let total = required(&receipt.total, "total")?;
    let items = receipt
        .items
        .as_ref()
        .ok_or_else(|| ReceiptError::missing("items"))?;

    let items = items
        .iter()
        .map(validate_item)
        .collect::<Result<Vec<_>>>()?;

    Ok(ValidReceipt {
        retailer,
        purchase_date,
        purchase_time,
        total,
        items,
    })
}

fn validate_item(item: &Item) -> Result<ValidItem<'_>> {
    Ok(ValidItem {
        short_description: required(&item.short_description, "shortDescription")?,
        price: required(&item.price, "price")?,
    })
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    value.as_deref().ok_or_else(|| ReceiptError::missing(name))
}
