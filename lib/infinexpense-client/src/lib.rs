//! # InfinExpense Client
//!
//! Typed async client for the InfinExpense expense-tracker REST API.
//!
//! Every managed resource (categories, measurement units, merchants, products,
//! receipts, reports) is exposed as a small set of functions, one per
//! operation. All of them funnel through a single request executor that builds
//! the URL, performs the HTTP call, and normalizes server failures into
//! [`ClientError`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use infinexpense_client::{ExpenseClient, PartialCategory};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ExpenseClient::builder()
//!     .with_host("expenses.example.com")
//!     .with_port(8000)
//!     .build()?;
//!
//! let created = client
//!     .categories()
//!     .create(&PartialCategory {
//!         name: "Fruits".to_string(),
//!     })
//!     .await?;
//!
//! let fetched = client.categories().get(created.id).await?;
//! assert_eq!(fetched.data.name, "Fruits");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! Server-side failures surface as [`ClientError::Server`] whose `Display` is
//! exactly the server's `detail` message, so callers can show it verbatim.
//! Match on [`ClientError::status`] or [`ClientError::is_not_found`] instead
//! of inspecting message text:
//!
//! ```rust,no_run
//! # use infinexpense_client::ExpenseClient;
//! # async fn example(client: &ExpenseClient) {
//! match client.categories().get(42).await {
//!     Ok(category) => println!("{}", category.data.name),
//!     Err(err) if err.is_not_found() => println!("no such category"),
//!     Err(err) => eprintln!("request failed: {err}"),
//! }
//! # }
//! ```

mod api;
mod client;
mod model;

pub use self::api::{Categories, MeasurementUnits, Merchants, Products, Receipts, Reports};
pub use self::client::{
    ClientError, DateRange, ExpenseClient, ExpenseClientBuilder, Page, PhotoUpload, ProductFilter,
    ReceiptFilter,
};
pub use self::model::{
    Category, DashboardKpis, LineItem, MeasurementUnit, Merchant, MerchantReport, PartialCategory,
    PartialLineItem, PartialMeasurementUnit, PartialMerchant, PartialProduct, PartialReceipt,
    PatchCategory, PatchMeasurementUnit, PatchMerchant, PatchProduct, PatchReceipt, Product,
    Receipt, SpendingByEntity,
};
