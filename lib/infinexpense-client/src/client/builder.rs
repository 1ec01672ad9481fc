use std::fmt::Debug;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use http::Uri;
use http::uri::{PathAndQuery, Scheme};
use url::Url;

use super::{ClientError, DEFAULT_TIMEOUT, ExpenseClient};

/// Builder for creating [`ExpenseClient`] instances.
///
/// # Default Configuration
///
/// - **Scheme**: HTTP (use `with_scheme()` to change to HTTPS)
/// - **Host**: 127.0.0.1 (localhost)
/// - **Port**: 80
/// - **Base path**: None (requests go to the root path)
/// - **Timeout**: 30 seconds per request
///
/// # Example
///
/// ```rust
/// use infinexpense_client::ExpenseClient;
/// use http::uri::Scheme;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ExpenseClient::builder()
///     .with_scheme(Scheme::HTTPS)
///     .with_host("expenses.example.com")
///     .with_port(443)
///     .with_base_path("/api")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ExpenseClientBuilder {
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: Option<PathAndQuery>,
    timeout: Duration,
}

impl ExpenseClientBuilder {
    /// Sets the HTTP scheme. Defaults to `Scheme::HTTP`.
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the hostname or IP address of the API server.
    /// Defaults to `"127.0.0.1"`.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port to connect to. Defaults to `80`.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a base path prepended to all request paths, e.g. `/api`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBasePath`] if the path contains invalid
    /// characters (such as spaces) or cannot be parsed as a URI path.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, ClientError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| ClientError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        self.base_path = Some(base_path);
        Ok(self)
    }

    /// Sets the per-request timeout enforced by the transport.
    /// Defaults to 30 seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the final [`ExpenseClient`].
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be constructed from the
    /// configured scheme, host, port, and base path, or if the HTTP transport
    /// fails to initialize.
    pub fn build(self) -> Result<ExpenseClient, ClientError> {
        let Self {
            scheme,
            host,
            port,
            base_path,
            timeout,
        } = self;

        let builder = Uri::builder()
            .scheme(scheme)
            .authority(format!("{host}:{port}"));
        let builder = if let Some(path) = &base_path {
            builder.path_and_query(path.path())
        } else {
            builder.path_and_query("/")
        };
        let base_uri = builder
            .build()
            .map_err(|err| ClientError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        let base_url = base_uri.to_string().parse::<Url>()?;

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(ExpenseClient { http, base_url })
    }
}

impl Default for ExpenseClientBuilder {
    fn default() -> Self {
        Self {
            scheme: Scheme::HTTP,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST).to_string(),
            port: 80,
            base_path: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
