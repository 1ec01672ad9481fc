use http::Method;

use crate::client::{ClientError, ExpenseClient, Page};
use crate::model::{MeasurementUnit, PartialMeasurementUnit, PatchMeasurementUnit};

/// Operations on `/measurement-units/`.
///
/// Obtained from [`ExpenseClient::measurement_units`].
#[derive(Debug, Clone, Copy)]
pub struct MeasurementUnits<'a> {
    pub(crate) client: &'a ExpenseClient,
}

#[allow(clippy::missing_errors_doc)]
impl MeasurementUnits<'_> {
    /// Lists measurement units in server order.
    pub async fn list(&self, page: Page) -> Result<Vec<MeasurementUnit>, ClientError> {
        self.client
            .request(Method::GET, "/measurement-units/")
            .query(page.query_pairs())
            .send()
            .await?
            .into_json()
    }

    /// Fetches one measurement unit by id.
    pub async fn get(&self, id: i64) -> Result<MeasurementUnit, ClientError> {
        self.client
            .request(Method::GET, format!("/measurement-units/{id}"))
            .send()
            .await?
            .into_json()
    }

    /// Creates a measurement unit.
    pub async fn create(
        &self,
        unit: &PartialMeasurementUnit,
    ) -> Result<MeasurementUnit, ClientError> {
        self.client
            .request(Method::POST, "/measurement-units/")
            .json(unit)?
            .send()
            .await?
            .into_json()
    }

    /// Updates a measurement unit.
    pub async fn update(
        &self,
        id: i64,
        patch: &PatchMeasurementUnit,
    ) -> Result<MeasurementUnit, ClientError> {
        self.client
            .request(Method::PUT, format!("/measurement-units/{id}"))
            .json(patch)?
            .send()
            .await?
            .into_json()
    }

    /// Deletes a measurement unit; conflicts propagate verbatim.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .request(Method::DELETE, format!("/measurement-units/{id}"))
            .send()
            .await?
            .expect_empty()
    }
}
