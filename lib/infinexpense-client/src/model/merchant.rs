use serde::{Deserialize, Serialize};

/// Payload for creating a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialMerchant {
    /// Merchant name; unique server-side.
    pub name: String,
    /// Free-form notes about the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A merchant receipts are attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    /// Server-assigned identifier.
    pub id: i64,

    /// The merchant fields.
    #[serde(flatten)]
    pub data: PartialMerchant,
}

/// Partial update for a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatchMerchant {
    /// New merchant name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
