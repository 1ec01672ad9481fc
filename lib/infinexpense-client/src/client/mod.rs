use std::time::Duration;

use http::Method;
use url::Url;

mod builder;
pub use self::builder::ExpenseClientBuilder;

mod request;
pub(crate) use self::request::{ApiRequest, encode_segment};

mod response;

mod body;
pub use self::body::PhotoUpload;
pub(crate) use self::body::RequestBody;

mod query;
pub use self::query::{DateRange, Page, ProductFilter, ReceiptFilter};

mod error;
pub use self::error::ClientError;

use crate::api::{Categories, MeasurementUnits, Merchants, Products, Receipts, Reports};

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the InfinExpense REST API.
///
/// The client holds the configured base URL and the underlying connection
/// pool; it keeps no other state, so it is cheap to clone and safe to share
/// across tasks. Use [`ExpenseClientBuilder`] to create instances, then reach
/// a resource through its accessor:
///
/// ```rust,no_run
/// use infinexpense_client::{ExpenseClient, Page};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ExpenseClient::builder()
///     .with_host("expenses.example.com")
///     .with_port(8000)
///     .build()?;
///
/// let merchants = client.merchants().list(Page::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ExpenseClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
}

impl ExpenseClient {
    /// Creates a builder with the default configuration
    /// (`http://127.0.0.1:80`, 30 second timeout).
    #[must_use]
    pub fn builder() -> ExpenseClientBuilder {
        ExpenseClientBuilder::default()
    }

    /// Creates a client from a complete base URL, e.g. `http://localhost:8000`.
    ///
    /// Convenience for tests and development setups that already hold the full
    /// URL; [`builder`](Self::builder) offers finer control.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the string is not a valid URL,
    /// or [`ClientError::Transport`] if the HTTP transport cannot be built.
    pub fn from_url(url: &str) -> Result<Self, ClientError> {
        let base_url = url.parse::<Url>()?;
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Operations on `/categories/`.
    #[must_use]
    pub fn categories(&self) -> Categories<'_> {
        Categories { client: self }
    }

    /// Operations on `/measurement-units/`.
    #[must_use]
    pub fn measurement_units(&self) -> MeasurementUnits<'_> {
        MeasurementUnits { client: self }
    }

    /// Operations on `/merchants/`.
    #[must_use]
    pub fn merchants(&self) -> Merchants<'_> {
        Merchants { client: self }
    }

    /// Operations on the `/products/` catalog.
    #[must_use]
    pub fn products(&self) -> Products<'_> {
        Products { client: self }
    }

    /// Operations on `/receipts/` and their line items.
    #[must_use]
    pub fn receipts(&self) -> Receipts<'_> {
        Receipts { client: self }
    }

    /// Read-only aggregate queries under `/reports/`.
    #[must_use]
    pub fn reports(&self) -> Reports<'_> {
        Reports { client: self }
    }

    pub(crate) fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest<'_> {
        ApiRequest::new(self, method, path.into())
    }
}
