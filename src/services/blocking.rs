use reqwest::blocking::Client;

use crate::core::{interpret_response, prepare_next_match, ClientConfig};
use crate::error::MatchingError;
use crate::models::{ApiResponse, MatchOutcome};
use crate::services::matching::log_outcome;

/// Blocking client for the RooMatch matching endpoint
///
/// Each call blocks the current thread for the whole round trip. Do not
/// create or use it from inside an async runtime; use
/// [`MatchFetcher`](crate::services::MatchFetcher) there.
#[derive(Debug, Clone)]
pub struct BlockingMatchFetcher {
    config: ClientConfig,
    client: Client,
}

impl BlockingMatchFetcher {
    pub fn new(config: ClientConfig) -> Result<Self, MatchingError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { config, client })
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MatchingError> {
        Self::new(ClientConfig::new(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the next match for a seeker
    pub fn fetch_next_match(&self, seeker_id: &str) -> Result<MatchOutcome, MatchingError> {
        self.fetch_next_match_with_http_info(seeker_id)
            .map(|response| response.data)
    }

    pub fn fetch_next_match_with_http_info(
        &self,
        seeker_id: &str,
    ) -> Result<ApiResponse, MatchingError> {
        let request = prepare_next_match(&self.config, seeker_id)?;

        tracing::debug!("Fetching next match from: {}", request.url);

        let response = request.into_blocking(&self.client).send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?;

        let data = interpret_response(status, &body);
        log_outcome(seeker_id, status, &data);

        Ok(ApiResponse {
            status,
            headers,
            data: data?,
        })
    }
}
