use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use tracing::{debug, error};

use crate::config::RequestHeaders;
use crate::error::{AppError, Result};

/// Retrieves the raw text of a page.
pub trait Fetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>>;
}

/// Fetcher backed by a single reusable reqwest client.
///
/// No retries and no timeouts beyond reqwest's defaults: a failed request
/// fails the current run only.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(headers: &RequestHeaders) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, header_value("User-Agent", &headers.user_agent)?);
        default_headers.insert(
            ACCEPT_LANGUAGE,
            header_value("Accept-Language", &headers.accept_language)?,
        );
        default_headers.insert(ACCEPT, header_value("Accept", &headers.accept)?);

        let client = Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        Ok(html)
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        match self.get_text(url).await {
            Ok(html) => {
                debug!("Fetched {} ({} bytes)", url, html.len());
                Ok(html)
            }
            Err(err) => {
                error!("{}", err);
                Err(err)
            }
        }
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::Config(format!("Invalid {} header: {}", name, e)))
}
