use serde::{Deserialize, Serialize};

/// Payload for creating a measurement unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialMeasurementUnit {
    /// Full unit name, e.g. `"Kilogram"`.
    pub name: String,
    /// Short form, e.g. `"kg"`.
    pub abbreviation: String,
}

/// A unit products are measured in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementUnit {
    /// Server-assigned identifier.
    pub id: i64,

    /// The unit fields.
    #[serde(flatten)]
    pub data: PartialMeasurementUnit,
}

/// Partial update for a measurement unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatchMeasurementUnit {
    /// New unit name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New abbreviation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}
