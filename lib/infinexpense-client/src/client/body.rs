use headers::ContentType;
use serde::Serialize;

use super::ClientError;

/// A file to attach to a photo-upload endpoint.
///
/// The payload is sent as a single `multipart/form-data` part named `file`,
/// matching what the server's upload routes expect.
///
/// # Example
///
/// ```rust
/// use infinexpense_client::PhotoUpload;
///
/// let photo = PhotoUpload::jpeg("receipt-2026-08.jpg", vec![0xFF, 0xD8, 0xFF]);
/// ```
#[derive(Clone, derive_more::Debug)]
pub struct PhotoUpload {
    pub(crate) file_name: String,
    pub(crate) content_type: mime::Mime,
    #[debug(ignore)]
    pub(crate) bytes: Vec<u8>,
}

impl PhotoUpload {
    /// Creates an upload with an explicit content type.
    pub fn new(
        file_name: impl Into<String>,
        content_type: mime::Mime,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Creates a `image/png` upload.
    pub fn png(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(file_name, mime::IMAGE_PNG, bytes)
    }

    /// Creates a `image/jpeg` upload.
    pub fn jpeg(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(file_name, mime::IMAGE_JPEG, bytes)
    }
}

/// Encoded request body with its content type.
#[derive(Clone, derive_more::Debug)]
pub(crate) struct RequestBody {
    content_type: ContentType,
    #[debug(ignore)]
    data: Vec<u8>,
}

impl RequestBody {
    pub(crate) fn content_type(&self) -> ContentType {
        self.content_type.clone()
    }

    pub(crate) fn data(&self) -> &[u8] {
        &self.data
    }

    /// Serializes `value` as `application/json`.
    pub(crate) fn json<T>(value: &T) -> Result<Self, ClientError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec(value)?;
        Ok(Self {
            content_type: ContentType::json(),
            data,
        })
    }

    /// Encodes a single-part `multipart/form-data` body for a file upload.
    ///
    /// The request-level content type carries the same generated boundary as
    /// the body, so the two always agree.
    pub(crate) fn multipart(upload: &PhotoUpload) -> Result<Self, ClientError> {
        let boundary = format!("----formdata-infinexpense-{}", uuid::Uuid::new_v4());

        let mut data = Vec::new();
        data.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        data.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
                upload.file_name
            )
            .as_bytes(),
        );
        data.extend_from_slice(format!("Content-Type: {}\r\n\r\n", upload.content_type).as_bytes());
        data.extend_from_slice(&upload.bytes);
        data.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let mime = format!("multipart/form-data; boundary={boundary}").parse::<mime::Mime>()?;
        Ok(Self {
            content_type: ContentType::from(mime),
            data,
        })
    }
}
