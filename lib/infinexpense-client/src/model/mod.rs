//! Wire-exact records for the InfinExpense API.
//!
//! Naming convention: `PartialX` is the create payload (no id, no
//! server-computed fields), `X` is the read record and flattens its
//! `PartialX`, `PatchX` is the update payload with every field optional.
//! `None` fields are skipped during serialization so the server's
//! "absent means unchanged" semantics hold.

mod category;
pub use self::category::{Category, PartialCategory, PatchCategory};

mod measurement_unit;
pub use self::measurement_unit::{MeasurementUnit, PartialMeasurementUnit, PatchMeasurementUnit};

mod merchant;
pub use self::merchant::{Merchant, PartialMerchant, PatchMerchant};

mod product;
pub use self::product::{PartialProduct, PatchProduct, Product};

mod receipt;
pub use self::receipt::{LineItem, PartialLineItem, PartialReceipt, PatchReceipt, Receipt};

mod report;
pub use self::report::{DashboardKpis, MerchantReport, SpendingByEntity};
