use chrono::NaiveDate;

/// Default number of records requested by a list call.
const DEFAULT_LIMIT: u32 = 100;
/// Server-side cap on `limit`; the client never requests more.
const MAX_LIMIT: u32 = 1000;

/// Pagination window for list endpoints.
///
/// `limit` is clamped into `1..=1000` at construction: the server rejects
/// anything above 1000 and below 1, so out-of-range input is corrected here
/// instead of round-tripping for a validation error. Both keys are always
/// sent, defaults included.
///
/// # Example
///
/// ```rust
/// use infinexpense_client::Page;
///
/// let page = Page::new(0, 5000);
/// assert_eq!(page.limit(), 1000);
/// assert_eq!(Page::default().limit(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: u32,
    limit: u32,
}

impl Page {
    /// Creates a page window, clamping `limit` into `1..=1000`.
    #[must_use]
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Default skip with the given limit (clamped).
    #[must_use]
    pub fn with_limit(limit: u32) -> Self {
        Self::new(0, limit)
    }

    /// Number of records to skip.
    #[must_use]
    pub fn skip(&self) -> u32 {
        self.skip
    }

    /// Effective number of records requested.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("skip", self.skip.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Optional date bounds for receipt filters and report queries.
///
/// Only present bounds are serialized; both ends are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl DateRange {
    /// Range bounded on both ends.
    #[must_use]
    pub fn between(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    /// Keeps records on or after `start_date`.
    #[must_use]
    pub fn from(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Keeps records on or before `end_date`.
    #[must_use]
    pub fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start_date) = self.start_date {
            pairs.push(("start_date", start_date.to_string()));
        }
        if let Some(end_date) = self.end_date {
            pairs.push(("end_date", end_date.to_string()));
        }
        pairs
    }
}

/// Filters for `GET /receipts/`.
///
/// Embeds a [`Page`]; the optional keys are serialized only when set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptFilter {
    /// Pagination window.
    pub page: Page,
    merchant_id: Option<i64>,
    barcode: Option<String>,
    dates: DateRange,
}

impl ReceiptFilter {
    /// Keeps receipts from one merchant.
    #[must_use]
    pub fn with_merchant(mut self, merchant_id: i64) -> Self {
        self.merchant_id = Some(merchant_id);
        self
    }

    /// Keeps the receipt carrying this barcode.
    #[must_use]
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Keeps receipts whose purchase date falls in `dates`.
    #[must_use]
    pub fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    /// Replaces the pagination window.
    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.page.query_pairs();
        if let Some(merchant_id) = self.merchant_id {
            pairs.push(("merchant_id", merchant_id.to_string()));
        }
        if let Some(barcode) = &self.barcode {
            pairs.push(("barcode", barcode.clone()));
        }
        pairs.extend(self.dates.query_pairs());
        pairs
    }
}

/// Filters for `GET /products/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Pagination window.
    pub page: Page,
    barcode: Option<String>,
    measurement_unit_id: Option<i64>,
    category_id: Option<i64>,
}

impl ProductFilter {
    /// Keeps the product carrying this barcode.
    #[must_use]
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Keeps products measured in one unit.
    #[must_use]
    pub fn with_measurement_unit(mut self, measurement_unit_id: i64) -> Self {
        self.measurement_unit_id = Some(measurement_unit_id);
        self
    }

    /// Keeps products from one category.
    #[must_use]
    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Replaces the pagination window.
    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.page.query_pairs();
        if let Some(barcode) = &self.barcode {
            pairs.push(("barcode", barcode.clone()));
        }
        if let Some(measurement_unit_id) = self.measurement_unit_id {
            pairs.push(("measurement_unit_id", measurement_unit_id.to_string()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("category_id", category_id.to_string()));
        }
        pairs
    }
}
