use serde::{Deserialize, Serialize};

use super::{Category, MeasurementUnit};

/// Payload for creating a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialProduct {
    /// Product name.
    pub name: String,
    /// Barcode printed on the product, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Unit the product is measured in.
    pub measurement_unit_id: i64,
    /// Category the product belongs to.
    pub category_id: i64,
}

/// A catalog product.
///
/// The server embeds the resolved category and measurement unit alongside the
/// raw foreign keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: i64,

    /// The product fields.
    #[serde(flatten)]
    pub data: PartialProduct,

    /// Resolved category record.
    pub category: Category,
    /// Resolved measurement unit record.
    pub measurement_unit: MeasurementUnit,
}

/// Partial update for a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatchProduct {
    /// New product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// New measurement unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_unit_id: Option<i64>,
    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}
