//! Per-resource function sets.
//!
//! Each resource exposes one function per operation, all thin adapters over
//! the shared request executor: build the request, send it, decode the typed
//! response. No resource function adds error handling of its own; every
//! failure propagates as [`ClientError`](crate::ClientError).

mod categories;
pub use self::categories::Categories;

mod measurement_units;
pub use self::measurement_units::MeasurementUnits;

mod merchants;
pub use self::merchants::Merchants;

mod products;
pub use self::products::Products;

mod receipts;
pub use self::receipts::Receipts;

mod reports;
pub use self::reports::Reports;
