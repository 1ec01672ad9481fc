use std::time::Duration;

use backon::{ConstantBuilder, Retryable};
use headers::HeaderMapExt;
use http::Method;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Body, Request};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::body::PhotoUpload;
use super::response::ApiResponse;
use super::{ClientError, ExpenseClient, RequestBody};

/// Delay before the single retry of a GET that died in transport.
const RETRY_DELAY: Duration = Duration::from_millis(250);

/// One HTTP round trip against the configured server.
///
/// Built by [`ExpenseClient::request`], enriched with query pairs and a body,
/// then consumed by [`send`](Self::send). Descriptors are constructed fresh
/// per call and never reused.
#[derive(Debug)]
pub(crate) struct ApiRequest<'a> {
    client: &'a ExpenseClient,
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<RequestBody>,
}

impl<'a> ApiRequest<'a> {
    pub(crate) fn new(client: &'a ExpenseClient, method: Method, path: String) -> Self {
        Self {
            client,
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    /// Adds query pairs; only pairs handed in are serialized.
    pub(crate) fn query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Sets a JSON body, serialized eagerly so failures surface before any
    /// network traffic.
    pub(crate) fn json<T>(mut self, body: &T) -> Result<Self, ClientError>
    where
        T: Serialize,
    {
        self.body = Some(RequestBody::json(body)?);
        Ok(self)
    }

    /// Sets a multipart file-upload body. The payload is never
    /// JSON-serialized; the content type carries the generated boundary.
    pub(crate) fn multipart(mut self, upload: PhotoUpload) -> Result<Self, ClientError> {
        self.body = Some(RequestBody::multipart(&upload)?);
        Ok(self)
    }

    /// Performs the round trip and normalizes the response.
    ///
    /// Exactly one network call per invocation, with one exception: a GET
    /// whose transport fails (connect error, timeout) is retried once after
    /// [`RETRY_DELAY`]. Non-GET methods are never retried.
    ///
    /// # Errors
    ///
    /// [`ClientError::Transport`] when the request never completed,
    /// [`ClientError::Server`] for any non-2xx response.
    pub(crate) async fn send(self) -> Result<ApiResponse, ClientError> {
        let url = self.build_url()?;
        debug!(method = %self.method, %url, "sending request");

        let response = if self.method == Method::GET {
            self.dispatch_get(url).await?
        } else {
            self.dispatch_once(url).await?
        };

        let status = response.status();
        debug!(%status, "received response");

        if status.is_success() {
            Ok(ApiResponse::from_success(response).await)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::server(status, &body))
        }
    }

    /// GETs carry no body, so the request can be rebuilt for the bounded
    /// retry.
    async fn dispatch_get(&self, url: Url) -> Result<reqwest::Response, ClientError> {
        let http = self.client.http.clone();
        let send = || {
            let http = http.clone();
            let url = url.clone();
            async move { http.get(url).send().await }
        };

        let backoff = ConstantBuilder::default()
            .with_delay(RETRY_DELAY)
            .with_max_times(1);
        let response = send
            .retry(backoff)
            .when(|err: &reqwest::Error| err.is_connect() || err.is_timeout())
            .notify(|err: &reqwest::Error, _| {
                warn!(error = %err, "transport failure, retrying GET once");
            })
            .await?;
        Ok(response)
    }

    async fn dispatch_once(&self, url: Url) -> Result<reqwest::Response, ClientError> {
        let mut request = Request::new(self.method.clone(), url);
        if let Some(body) = &self.body {
            request.headers_mut().typed_insert(body.content_type());
            *request.body_mut() = Some(Body::from(body.data().to_vec()));
        }
        let response = self.client.http.execute(request).await?;
        Ok(response)
    }

    /// Joins the base URL and the call path, collapsing duplicate `/` at the
    /// seam, then appends the encoded query pairs.
    fn build_url(&self) -> Result<Url, ClientError> {
        let base = self.client.base_url.as_str();
        let url = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;

        if !self.query.is_empty() {
            let query = serde_urlencoded::to_string(&self.query)?;
            url.set_query(Some(&query));
        }
        Ok(url)
    }
}

/// Percent-encodes a path segment built from caller input, e.g. a barcode or
/// a product name interpolated into the URL.
pub(crate) fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}
