use crate::adapters::outbound::filesystem::read_catalog_file;
use crate::ports::outbound::{ArchiveFetcher, CatalogRepository, FetchedArchive};
use crate::project_generation::domain::{Catalog, CatalogSource, StarterQuery};
use crate::project_generation::services::CatalogParser;
use crate::shared::error::SetupError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

/// Default initializer service
pub const DEFAULT_STARTER_URL: &str = "https://start.spring.io";

const STARTER_ZIP_PATH: &str = "/starter.zip";

/// Media types the metadata endpoint negotiates on
const METADATA_ACCEPT: &str =
    "application/vnd.initializr.v2.2+json, application/vnd.initializr.v2.1+json;q=0.9, application/json;q=0.8";

/// InitializrClient adapter for the Spring Initializr HTTP API
///
/// Implements both the CatalogRepository port (metadata JSON, or a YAML
/// override fetched over HTTP or read from disk) and the ArchiveFetcher
/// port (`starter.zip`). All requests carry the product User-Agent; the
/// service picks its response format from it.
///
/// Blocking: a pipeline run issues at most two requests, in sequence.
/// No retries and no timeout beyond the transport default.
pub struct InitializrClient {
    client: Client,
    base_url: String,
}

impl InitializrClient {
    /// Creates a client for the given initializer base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(Self::user_agent()).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The fixed, product-identifying User-Agent
    pub fn user_agent() -> String {
        format!("springboot-setup/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full `starter.zip` URL with every parameter URL-encoded
    pub fn starter_url(&self, query: &StarterQuery) -> String {
        let params: Vec<String> = query
            .pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        format!("{}{}?{}", self.base_url, STARTER_ZIP_PATH, params.join("&"))
    }

    fn get_text(&self, url: &str, accept: Option<&str>) -> Result<String> {
        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }

        let response = request.send()?;
        if !response.status().is_success() {
            anyhow::bail!("HTTP status {}", response.status());
        }
        Ok(response.text()?)
    }

    fn load_remote_json(&self, url: &str) -> Result<Catalog> {
        let body = self.get_text(url, Some(METADATA_ACCEPT))?;
        CatalogParser::parse_json(&body)
    }

    fn load_yaml_override(&self, location: &str) -> Result<Catalog> {
        let content = if is_http_url(location) {
            self.get_text(location, None)?
        } else {
            read_catalog_file(location)?
        };
        CatalogParser::parse_yaml(&content)
    }
}

fn is_http_url(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

impl CatalogRepository for InitializrClient {
    fn load_catalog(&self, source: &CatalogSource) -> Result<Catalog> {
        log::debug!("Loading dependency catalog from {}", source);

        let loaded = match source {
            CatalogSource::Remote(url) => self.load_remote_json(url),
            CatalogSource::YamlOverride(location) => self.load_yaml_override(location),
        };

        loaded.map_err(|e| {
            log::error!("Catalog source {} failed: {:#}", source, e);
            SetupError::CatalogUnavailable {
                source_location: source.location().to_string(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}

impl ArchiveFetcher for InitializrClient {
    fn fetch_archive(&self, query: &StarterQuery) -> Result<FetchedArchive> {
        let url = self.starter_url(query);
        log::info!("About to query url: {}", url);

        let fail = |details: String| -> anyhow::Error {
            log::error!("Archive request {} failed: {}", url, details);
            SetupError::ArchiveFetchFailed {
                url: url.clone(),
                details,
            }
            .into()
        };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| fail(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fail(format!("HTTP status {}", response.status())));
        }

        let content_length = response.content_length();
        Ok(FetchedArchive::new(Box::new(response), content_length))
    }
}
