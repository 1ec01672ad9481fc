use http::Method;

use crate::client::{ClientError, ExpenseClient, Page, PhotoUpload};
use crate::model::{Merchant, PartialMerchant, PatchMerchant};

/// Operations on `/merchants/`.
///
/// Obtained from [`ExpenseClient::merchants`].
#[derive(Debug, Clone, Copy)]
pub struct Merchants<'a> {
    pub(crate) client: &'a ExpenseClient,
}

#[allow(clippy::missing_errors_doc)]
impl Merchants<'_> {
    /// Lists merchants in server order.
    pub async fn list(&self, page: Page) -> Result<Vec<Merchant>, ClientError> {
        self.client
            .request(Method::GET, "/merchants/")
            .query(page.query_pairs())
            .send()
            .await?
            .into_json()
    }

    /// Fetches one merchant by id.
    pub async fn get(&self, id: i64) -> Result<Merchant, ClientError> {
        self.client
            .request(Method::GET, format!("/merchants/{id}"))
            .send()
            .await?
            .into_json()
    }

    /// Creates a merchant.
    pub async fn create(&self, merchant: &PartialMerchant) -> Result<Merchant, ClientError> {
        self.client
            .request(Method::POST, "/merchants/")
            .json(merchant)?
            .send()
            .await?
            .into_json()
    }

    /// Updates a merchant.
    pub async fn update(&self, id: i64, patch: &PatchMerchant) -> Result<Merchant, ClientError> {
        self.client
            .request(Method::PUT, format!("/merchants/{id}"))
            .json(patch)?
            .send()
            .await?
            .into_json()
    }

    /// Deletes a merchant; conflicts propagate verbatim.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .request(Method::DELETE, format!("/merchants/{id}"))
            .send()
            .await?
            .expect_empty()
    }

    /// Uploads a merchant photo as `multipart/form-data` and returns the
    /// updated record.
    pub async fn upload_photo(&self, id: i64, photo: PhotoUpload) -> Result<Merchant, ClientError> {
        self.client
            .request(Method::POST, format!("/merchants/{id}/upload-photo"))
            .multipart(photo)?
            .send()
            .await?
            .into_json()
    }
}
