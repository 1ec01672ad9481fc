use http::Method;

use crate::client::{ClientError, ExpenseClient, PhotoUpload, ProductFilter, encode_segment};
use crate::model::{PartialProduct, PatchProduct, Product};

/// Operations on the `/products/` catalog.
///
/// Obtained from [`ExpenseClient::products`].
#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    pub(crate) client: &'a ExpenseClient,
}

#[allow(clippy::missing_errors_doc)]
impl Products<'_> {
    /// Lists catalog products in server order.
    pub async fn list(&self, filter: ProductFilter) -> Result<Vec<Product>, ClientError> {
        self.client
            .request(Method::GET, "/products/")
            .query(filter.query_pairs())
            .send()
            .await?
            .into_json()
    }

    /// Fetches one product by id.
    pub async fn get(&self, id: i64) -> Result<Product, ClientError> {
        self.client
            .request(Method::GET, format!("/products/{id}"))
            .send()
            .await?
            .into_json()
    }

    /// Creates a catalog product.
    pub async fn create(&self, product: &PartialProduct) -> Result<Product, ClientError> {
        self.client
            .request(Method::POST, "/products/")
            .json(product)?
            .send()
            .await?
            .into_json()
    }

    /// Updates a catalog product.
    pub async fn update(&self, id: i64, patch: &PatchProduct) -> Result<Product, ClientError> {
        self.client
            .request(Method::PUT, format!("/products/{id}"))
            .json(patch)?
            .send()
            .await?
            .into_json()
    }

    /// Deletes a catalog product.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .request(Method::DELETE, format!("/products/{id}"))
            .send()
            .await?
            .expect_empty()
    }

    /// Looks a product up by its barcode.
    pub async fn by_barcode(&self, barcode: &str) -> Result<Product, ClientError> {
        let barcode = encode_segment(barcode);
        self.client
            .request(Method::GET, format!("/products/barcode/{barcode}"))
            .send()
            .await?
            .into_json()
    }

    /// Looks a product up by its exact name.
    pub async fn by_name(&self, name: &str) -> Result<Product, ClientError> {
        let name = encode_segment(name);
        self.client
            .request(Method::GET, format!("/products/name/{name}"))
            .send()
            .await?
            .into_json()
    }

    /// Uploads a product photo as `multipart/form-data` and returns the
    /// updated record.
    pub async fn upload_photo(&self, id: i64, photo: PhotoUpload) -> Result<Product, ClientError> {
        self.client
            .request(Method::POST, format!("/uploads/product-list/{id}/photo"))
            .multipart(photo)?
            .send()
            .await?
            .into_json()
    }
}
