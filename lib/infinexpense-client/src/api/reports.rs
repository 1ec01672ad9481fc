use http::Method;

use crate::client::{ClientError, DateRange, ExpenseClient};
use crate::model::{DashboardKpis, MerchantReport, SpendingByEntity};

/// Read-only aggregate queries under `/reports/`.
///
/// Obtained from [`ExpenseClient::reports`]. Only date bounds that are present
/// in `dates` are sent.
#[derive(Debug, Clone, Copy)]
pub struct Reports<'a> {
    pub(crate) client: &'a ExpenseClient,
}

#[allow(clippy::missing_errors_doc)]
impl Reports<'_> {
    /// Total spent per category, for the spending chart.
    pub async fn spending_by_category(
        &self,
        dates: DateRange,
    ) -> Result<Vec<SpendingByEntity>, ClientError> {
        self.client
            .request(Method::GET, "/reports/spending-by-category")
            .query(dates.query_pairs())
            .send()
            .await?
            .into_json()
    }

    /// Merchants enriched with total spent and receipt count.
    pub async fn enriched_merchants(
        &self,
        dates: DateRange,
    ) -> Result<Vec<MerchantReport>, ClientError> {
        self.client
            .request(Method::GET, "/reports/enriched-merchants")
            .query(dates.query_pairs())
            .send()
            .await?
            .into_json()
    }

    /// The dashboard's three headline numbers.
    pub async fn dashboard_kpis(&self, dates: DateRange) -> Result<DashboardKpis, ClientError> {
        self.client
            .request(Method::GET, "/reports/dashboard-kpis")
            .query(dates.query_pairs())
            .send()
            .await?
            .into_json()
    }
}
