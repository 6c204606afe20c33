//! The search client: one GET per query, no retries.
use super::{search_url, CResult, SearchResponse};
use crate::{Params, ScrapeError};
use async_trait::async_trait;
use log::info;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use tokio::time::Duration;

/// Anything able to answer a query with a result page.
#[async_trait]
pub trait SearchBackend {
    async fn search(&self, query: &str) -> CResult<SearchResponse>;
}

pub struct GoogleClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl GoogleClient {
    pub fn new(endpoint: &str, user_agent: &str, timeout: Duration) -> CResult<Self> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(user_agent)
            .map_err(|e| ScrapeError::Config(format!("invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(GoogleClient {
            client,
            endpoint: endpoint.to_string(),
            timeout,
        })
    }

    pub fn from_params(params: &Params) -> CResult<Self> {
        Self::new(&params.endpoint, &params.user_agent, params.timeout)
    }

    async fn fetch(&self, query: &str) -> CResult<SearchResponse> {
        let url = search_url(&self.endpoint, query)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let html = response.text().await?;
        Ok(SearchResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            html,
        })
    }
}

#[async_trait]
impl SearchBackend for GoogleClient {
    async fn search(&self, query: &str) -> CResult<SearchResponse> {
        info!("Initializing search for {query}");
        let timed_out = || ScrapeError::SearchTimeout {
            query: query.to_string(),
            seconds: self.timeout.as_secs(),
        };
        let response = match tokio::time::timeout(self.timeout, self.fetch(query)).await {
            Ok(Err(ScrapeError::Http(e))) if e.is_timeout() => return Err(timed_out()),
            Ok(res) => res?,
            Err(_) => return Err(timed_out()),
        };
        info!("Successful search for {query}");
        Ok(response)
    }
}
