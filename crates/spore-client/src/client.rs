//! Main client implementation.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use spore_config::{ClientSettings, DEFAULT_BASE_URL};
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

use crate::api::{AssetsApi, FeedsApi, SporecastsApi, UsersApi};
use crate::document::XmlDocument;
use crate::endpoints::Endpoint;
use crate::error::{Error, Result};

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Prefix for staging files created next to download destinations.
const STAGING_PREFIX: &str = ".spore-download-";

/// Spore content service client.
///
/// Owns a single HTTP transport for its lifetime. Clones share the transport
/// and may be used from any number of tasks at once; no call mutates shared
/// state. The transport is released when the last clone is dropped.
///
/// # Example
///
/// ```no_run
/// use spore_client::{Page, SporeClient, ViewType};
///
/// # async fn example() -> spore_client::Result<()> {
/// let client = SporeClient::builder()
///     .base_url("http://www.spore.com")
///     .build()?;
///
/// let stats = client.daily_stats().await?;
/// println!("{stats}");
///
/// let newest = client.assets().search(ViewType::Newest, Page::new(0, 10)).await?;
/// for asset in newest.asset_summaries() {
///     println!("{}", asset.id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SporeClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Service origin, always ending in `/`.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

impl std::fmt::Debug for SporeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SporeClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

impl SporeClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the public service with default settings.
    pub fn public() -> Result<Self> {
        Self::builder().base_url(DEFAULT_BASE_URL).build()
    }

    /// Create a client from resolved configuration.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self> {
        let mut builder = Self::builder()
            .base_url(settings.base_url.clone())
            .timeout(settings.timeout);
        if let Some(agent) = &settings.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access user profiles and user-scoped listings.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access asset information, search and static content.
    pub fn assets(&self) -> AssetsApi {
        AssetsApi::new(self.clone())
    }

    /// Access sporecast listings.
    pub fn sporecasts(&self) -> SporecastsApi {
        SporecastsApi::new(self.clone())
    }

    /// Access the Atom feeds.
    pub fn feeds(&self) -> FeedsApi {
        FeedsApi::new(self.clone())
    }

    /// Get daily stats about the service.
    pub async fn daily_stats(&self) -> Result<XmlDocument> {
        self.get_document(Endpoint::DailyStats).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build the absolute URL for an endpoint.
    pub fn url(&self, endpoint: &Endpoint<'_>) -> Result<Url> {
        let path = endpoint.path()?;
        self.inner
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(Error::from)
    }

    /// GET an endpoint and parse the body as XML.
    pub(crate) async fn get_document(&self, endpoint: Endpoint<'_>) -> Result<XmlDocument> {
        let url = self.url(&endpoint)?;
        let response = self.send(url).await?;
        let body = response.bytes().await?;
        debug!(bytes = body.len(), "received document");
        XmlDocument::parse(&body)
    }

    /// GET an endpoint and store the raw body at `dest`.
    ///
    /// The body is staged in a temporary file beside `dest` and renamed over
    /// it only once fully written, so `dest` is either replaced completely or
    /// left untouched. The body is stored as received, without parsing.
    /// Returns the number of bytes written.
    pub(crate) async fn download(&self, endpoint: Endpoint<'_>, dest: &Path) -> Result<u64> {
        let url = self.url(&endpoint)?;
        let response = self.send(url).await?;

        let io_err = |source: std::io::Error| Error::LocalIoFailed {
            path: dest.to_path_buf(),
            source,
        };

        let dir = match dest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        // An existing destination keeps its mode; a new one gets 0666 less
        // the umask.
        let existing_permissions = tokio::fs::metadata(dest)
            .await
            .ok()
            .map(|meta| meta.permissions());
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_PREFIX);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let staging = builder.tempfile_in(dir).map_err(io_err)?;
        let (file, staged_path) = staging.into_parts();
        let mut file = tokio::fs::File::from_std(file);

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await.map_err(io_err)?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(io_err)?;
        drop(file);

        if let Some(permissions) = existing_permissions {
            tokio::fs::set_permissions(&staged_path, permissions)
                .await
                .map_err(io_err)?;
        }

        staged_path.persist(dest).map_err(|e| io_err(e.error))?;
        debug!(path = %dest.display(), bytes = written, "download complete");
        Ok(written)
    }

    /// Issue a GET and reject non-success statuses.
    async fn send(&self, url: Url) -> Result<reqwest::Response> {
        debug!(%url, "GET");
        let response = self
            .inner
            .http
            .get(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "response");
        if !status.is_success() {
            return Err(Error::RemoteRequestFailed {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }
}

/// Builder for creating a SporeClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the service origin.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<SporeClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("spore-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(SporeClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
