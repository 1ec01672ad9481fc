use http::StatusCode;
use serde::de::DeserializeOwned;

use super::ClientError;

/// Maximum response-body length kept in error messages.
const BODY_MAX_LENGTH: usize = 1024;

/// Normalized outcome of one successful HTTP round trip.
///
/// Non-2xx responses never reach this type; the executor turns them into
/// [`ClientError::Server`] before returning.
#[derive(Debug, Clone)]
pub(crate) struct ApiResponse {
    pub(crate) status: StatusCode,
    pub(crate) payload: Payload,
}

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Payload {
    /// 204 No Content, an empty body, or a body the transport could not read.
    Empty,
    /// Raw response text, decoded on demand by the caller.
    Json(String),
}

impl ApiResponse {
    /// Classifies a 2xx response into a payload.
    ///
    /// A `204 No Content` never attempts a body read; an empty or unreadable
    /// body is the no-content sentinel rather than an error.
    pub(crate) async fn from_success(response: reqwest::Response) -> Self {
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Self {
                status,
                payload: Payload::Empty,
            };
        }

        let payload = match response.text().await {
            Ok(text) if text.is_empty() => Payload::Empty,
            Ok(text) => Payload::Json(text),
            Err(_) => Payload::Empty,
        };
        Self { status, payload }
    }

    /// Decodes the payload as JSON into `T`.
    ///
    /// # Errors
    ///
    /// [`ClientError::UnexpectedNoContent`] when the server sent no body,
    /// [`ClientError::Decode`] when the body does not match `T`.
    pub(crate) fn into_json<T>(self) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        match self.payload {
            Payload::Empty => Err(ClientError::UnexpectedNoContent),
            Payload::Json(text) => {
                let mut deserializer = serde_json::Deserializer::from_str(&text);
                serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
                    let path = err.path().to_string();
                    let source = err.into_inner();
                    ClientError::Decode {
                        path,
                        source,
                        body: truncate_body(&text),
                    }
                })
            }
        }
    }

    /// Consumes the response where the contract says "no content".
    ///
    /// Tolerant of any payload: a delete that answers 200 with a body is still
    /// a success.
    #[allow(clippy::unnecessary_wraps)]
    pub(crate) fn expect_empty(self) -> Result<(), ClientError> {
        Ok(())
    }
}

fn truncate_body(text: &str) -> String {
    if text.len() > BODY_MAX_LENGTH {
        let cut = text
            .char_indices()
            .take_while(|(index, _)| *index < BODY_MAX_LENGTH)
            .map(|(index, symbol)| index + symbol.len_utf8())
            .last()
            .unwrap_or_default();
        format!("{}... (truncated)", &text[..cut])
    } else {
        text.to_string()
    }
}
