use http::Method;
use serde::Serialize;

use crate::client::{
    ClientError, ExpenseClient, Page, PhotoUpload, ReceiptFilter, encode_segment,
};
use crate::model::{LineItem, PartialLineItem, PartialReceipt, PatchReceipt, Receipt};

/// Operations on `/receipts/` and their line items.
///
/// Obtained from [`ExpenseClient::receipts`].
#[derive(Debug, Clone, Copy)]
pub struct Receipts<'a> {
    pub(crate) client: &'a ExpenseClient,
}

/// Wire shape of the bulk line-item replacement body.
#[derive(Debug, Serialize)]
struct ReplaceProducts<'a> {
    products: &'a [PartialLineItem],
}

#[allow(clippy::missing_errors_doc)]
impl Receipts<'_> {
    /// Lists receipts matching `filter`, in server order.
    pub async fn list(&self, filter: ReceiptFilter) -> Result<Vec<Receipt>, ClientError> {
        self.client
            .request(Method::GET, "/receipts/")
            .query(filter.query_pairs())
            .send()
            .await?
            .into_json()
    }

    /// Fetches one receipt by id.
    pub async fn get(&self, id: i64) -> Result<Receipt, ClientError> {
        self.client
            .request(Method::GET, format!("/receipts/{id}"))
            .send()
            .await?
            .into_json()
    }

    /// Creates a receipt.
    pub async fn create(&self, receipt: &PartialReceipt) -> Result<Receipt, ClientError> {
        self.client
            .request(Method::POST, "/receipts/")
            .json(receipt)?
            .send()
            .await?
            .into_json()
    }

    /// Updates a receipt.
    pub async fn update(&self, id: i64, patch: &PatchReceipt) -> Result<Receipt, ClientError> {
        self.client
            .request(Method::PUT, format!("/receipts/{id}"))
            .json(patch)?
            .send()
            .await?
            .into_json()
    }

    /// Deletes a receipt and its line items.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .request(Method::DELETE, format!("/receipts/{id}"))
            .send()
            .await?
            .expect_empty()
    }

    /// Fetches the line items of a receipt, in server order.
    pub async fn products(&self, id: i64) -> Result<Vec<LineItem>, ClientError> {
        self.client
            .request(Method::GET, format!("/receipts/{id}/products"))
            .send()
            .await?
            .into_json()
    }

    /// Replaces all line items of a receipt in one call and returns the
    /// updated receipt.
    pub async fn replace_products(
        &self,
        id: i64,
        products: &[PartialLineItem],
    ) -> Result<Receipt, ClientError> {
        self.client
            .request(Method::PUT, format!("/receipts/{id}/products"))
            .json(&ReplaceProducts { products })?
            .send()
            .await?
            .into_json()
    }

    /// Looks a receipt up by its barcode.
    pub async fn by_barcode(&self, barcode: &str) -> Result<Receipt, ClientError> {
        let barcode = encode_segment(barcode);
        self.client
            .request(Method::GET, format!("/receipts/barcode/{barcode}"))
            .send()
            .await?
            .into_json()
    }

    /// Lists the receipts of one merchant, paginated.
    pub async fn by_merchant(
        &self,
        merchant_id: i64,
        page: Page,
    ) -> Result<Vec<Receipt>, ClientError> {
        self.client
            .request(Method::GET, format!("/receipts/merchant/{merchant_id}"))
            .query(page.query_pairs())
            .send()
            .await?
            .into_json()
    }

    /// Uploads a receipt photo as `multipart/form-data` and returns the
    /// updated record.
    pub async fn upload_photo(&self, id: i64, photo: PhotoUpload) -> Result<Receipt, ClientError> {
        self.client
            .request(Method::POST, format!("/uploads/receipt/{id}/photo"))
            .multipart(photo)?
            .send()
            .await?
            .into_json()
    }
}
