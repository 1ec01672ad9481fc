use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Merchant, Product};

/// Payload for creating a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialReceipt {
    /// Merchant the receipt belongs to.
    pub merchant_id: i64,
    /// Date of purchase.
    pub purchase_date: NaiveDate,
    /// Barcode printed on the receipt, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Server-side path of the receipt photo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_photo: Option<String>,
}

/// A receipt with its merchant and line items resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Server-assigned identifier.
    pub id: i64,

    /// The receipt fields.
    #[serde(flatten)]
    pub data: PartialReceipt,

    /// Sum of `price * quantity` over all line items, computed server-side.
    pub total_price: f64,
    /// Resolved merchant record.
    pub merchant: Merchant,
    /// Line items in server order.
    #[serde(default)]
    pub products: Vec<LineItem>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp, absent until the first update.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update for a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatchReceipt {
    /// New merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<i64>,
    /// New purchase date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    /// New barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// New photo path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_photo: Option<String>,
}

/// Payload for attaching a product entry to a receipt.
///
/// Price and quantity live on the line item, independent of the catalog
/// product's own attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialLineItem {
    /// Unit price paid.
    pub price: f64,
    /// Quantity purchased, fractional for weighed goods.
    pub quantity: f64,
    /// Free-form note on the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Catalog product this entry refers to.
    pub product_list_id: i64,
}

/// A product entry on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Server-assigned identifier.
    pub id: i64,

    /// The line-item fields.
    #[serde(flatten)]
    pub data: PartialLineItem,

    /// Resolved catalog product.
    pub product_list: Product,
}
