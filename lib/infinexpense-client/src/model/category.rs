use serde::{Deserialize, Serialize};

/// Payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialCategory {
    /// Category name, e.g. `"Fruits"`.
    pub name: String,
}

/// A spending category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned identifier.
    pub id: i64,

    /// The category fields.
    #[serde(flatten)]
    pub data: PartialCategory,
}

/// Partial update for a category; `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatchCategory {
    /// New category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
