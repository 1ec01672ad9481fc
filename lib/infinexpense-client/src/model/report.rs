use serde::{Deserialize, Serialize};

/// One bar or slice of a spending chart.
///
/// Serves both spending-by-category and spending-by-merchant shapes; the
/// entity id is a category or merchant id depending on the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingByEntity {
    /// Category or merchant id.
    pub entity_id: i64,
    /// Display name of the entity.
    pub name: String,
    /// Total amount spent on this entity.
    pub total_spent: f64,
}

/// A merchant enriched with aggregate spending data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantReport {
    /// Merchant identifier.
    pub id: i64,
    /// Merchant name.
    pub name: String,
    /// Merchant location, when recorded.
    #[serde(default)]
    pub location: Option<String>,
    /// Total amount spent at this merchant.
    pub total_spent: f64,
    /// Number of receipts from this merchant.
    pub receipt_count: u64,
}

/// The dashboard's three headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardKpis {
    /// Total spent over the queried period.
    pub total_spent: f64,
    /// Number of receipts in the period.
    pub receipt_count: u64,
    /// Number of product entries across those receipts.
    pub product_item_count: u64,
}
