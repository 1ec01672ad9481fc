use http::Method;

use crate::client::{ClientError, ExpenseClient, Page};
use crate::model::{Category, PartialCategory, PatchCategory};

/// Operations on `/categories/`.
///
/// Obtained from [`ExpenseClient::categories`].
#[derive(Debug, Clone, Copy)]
pub struct Categories<'a> {
    pub(crate) client: &'a ExpenseClient,
}

impl Categories<'_> {
    /// Lists categories in server order.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`] raised by the request executor.
    pub async fn list(&self, page: Page) -> Result<Vec<Category>, ClientError> {
        self.client
            .request(Method::GET, "/categories/")
            .query(page.query_pairs())
            .send()
            .await?
            .into_json()
    }

    /// Fetches one category by id.
    ///
    /// # Errors
    ///
    /// [`ClientError::Server`] with detail `"Category not found"` when the id
    /// is unknown.
    pub async fn get(&self, id: i64) -> Result<Category, ClientError> {
        self.client
            .request(Method::GET, format!("/categories/{id}"))
            .send()
            .await?
            .into_json()
    }

    /// Creates a category and returns the record with its assigned id.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`] raised by the request executor.
    pub async fn create(&self, category: &PartialCategory) -> Result<Category, ClientError> {
        self.client
            .request(Method::POST, "/categories/")
            .json(category)?
            .send()
            .await?
            .into_json()
    }

    /// Updates a category and returns the updated record.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`] raised by the request executor.
    pub async fn update(&self, id: i64, patch: &PatchCategory) -> Result<Category, ClientError> {
        self.client
            .request(Method::PUT, format!("/categories/{id}"))
            .json(patch)?
            .send()
            .await?
            .into_json()
    }

    /// Deletes a category.
    ///
    /// # Errors
    ///
    /// Server-side conflicts (a category still referenced by products) come
    /// back verbatim as [`ClientError::Server`] so the caller can show the
    /// message.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .request(Method::DELETE, format!("/categories/{id}"))
            .send()
            .await?
            .expect_empty()
    }
}
