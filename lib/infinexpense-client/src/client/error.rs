use http::StatusCode;

/// Errors that can occur when using the [`ExpenseClient`](super::ExpenseClient).
///
/// All variants implement `std::error::Error` and carry a human-readable
/// message. For server-side failures ([`ClientError::Server`]) the `Display`
/// output is exactly the server's `detail` message, so it can be shown to a
/// user verbatim. Use [`status`](Self::status) or
/// [`is_not_found`](Self::is_not_found) for structured matching instead of
/// inspecting message text.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ClientError {
    /// The request never completed: DNS failure, connection refused, timeout.
    Transport(reqwest::Error),

    /// The base URL or a joined request path produced an invalid URL.
    InvalidUrl(url::ParseError),

    /// The builder was given an unusable base path.
    #[display("Invalid base path: {error}")]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },

    /// Filter or pagination pairs failed to encode as a query string.
    QueryEncoding(serde_urlencoded::ser::Error),

    /// A request body failed to serialize as JSON.
    Json(serde_json::Error),

    /// A multipart content type could not be assembled.
    InvalidContentType(mime::FromStrError),

    /// A successful response body did not match the expected type.
    #[display("Failed to decode response at '{path}': {source}\n{body}")]
    #[from(skip)]
    Decode {
        /// JSON path at which deserialization failed.
        path: String,
        /// The underlying JSON parsing error.
        source: serde_json::Error,
        /// The response body that failed to decode, truncated for display.
        body: String,
    },

    /// The caller expected a JSON body but the server sent none.
    #[display("Expected a response body, but the server sent none")]
    UnexpectedNoContent,

    /// The server answered with a non-2xx status.
    ///
    /// `detail` is the server's `detail` message when the error body carries
    /// one, otherwise `"Error {status}: {statusText}"`.
    #[display("{detail}")]
    #[from(skip)]
    Server {
        /// The HTTP status code of the response.
        status: StatusCode,
        /// Human-readable failure message.
        detail: String,
    },
}

impl ClientError {
    /// Builds a [`ClientError::Server`] from a response status and raw body.
    ///
    /// A string `detail` field in a JSON error body is used verbatim; a
    /// non-string `detail` is rendered as compact JSON; anything else falls
    /// back to `"Error {status}: {statusText}"`.
    pub(crate) fn server(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail").cloned())
            .map(|detail| match detail {
                serde_json::Value::String(message) => message,
                other => other.to_string(),
            })
            .unwrap_or_else(|| {
                format!(
                    "Error {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown Status")
                )
            });
        Self::Server { status, detail }
    }

    /// The HTTP status code for [`ClientError::Server`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` when the server answered with `404 Not Found`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
