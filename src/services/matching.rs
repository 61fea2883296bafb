use reqwest::{Client, StatusCode};
use tokio::task::JoinHandle;

use crate::core::{interpret_response, prepare_next_match, ClientConfig, PreparedRequest};
use crate::error::MatchingError;
use crate::models::{ApiResponse, MatchOutcome};

/// Async client for the RooMatch matching endpoint
///
/// Cloning is cheap and clones share the connection pool. No state is kept
/// between calls.
#[derive(Debug, Clone)]
pub struct MatchFetcher {
    config: ClientConfig,
    client: Client,
}

impl MatchFetcher {
    /// Create a fetcher from a validated configuration
    pub fn new(config: ClientConfig) -> Result<Self, MatchingError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { config, client })
    }

    /// Create a fetcher that talks to `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MatchingError> {
        Self::new(ClientConfig::new(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the next match for a seeker
    ///
    /// GET /match/{seekerId}
    pub async fn fetch_next_match(&self, seeker_id: &str) -> Result<MatchOutcome, MatchingError> {
        self.fetch_next_match_with_http_info(seeker_id)
            .await
            .map(|response| response.data)
    }

    /// Same as [`fetch_next_match`](Self::fetch_next_match), keeping the
    /// status code and response headers
    pub async fn fetch_next_match_with_http_info(
        &self,
        seeker_id: &str,
    ) -> Result<ApiResponse, MatchingError> {
        let request = prepare_next_match(&self.config, seeker_id)?;
        execute(&self.client, request, seeker_id).await
    }

    /// Start fetching the next match in the background
    ///
    /// `callback` receives the outcome once the response has been read or the
    /// transport failed. An empty seeker id is rejected here, before anything
    /// is spawned. The returned handle can cancel the call, in which case the
    /// callback is never invoked.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn fetch_next_match_with_callback<F>(
        &self,
        seeker_id: &str,
        callback: F,
    ) -> Result<MatchCall, MatchingError>
    where
        F: FnOnce(Result<MatchOutcome, MatchingError>) + Send + 'static,
    {
        let request = prepare_next_match(&self.config, seeker_id)?;
        let client = self.client.clone();
        let seeker_id = seeker_id.to_string();

        let handle = tokio::spawn(async move {
            let result = execute(&client, request, &seeker_id)
                .await
                .map(|response| response.data);
            callback(result);
        });

        Ok(MatchCall { handle })
    }
}

async fn execute(
    client: &Client,
    request: PreparedRequest,
    seeker_id: &str,
) -> Result<ApiResponse, MatchingError> {
    tracing::debug!("Fetching next match from: {}", request.url);

    let response = request.into_async(client).send().await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?;

    let data = interpret_response(status, &body);
    log_outcome(seeker_id, status, &data);

    Ok(ApiResponse {
        status,
        headers,
        data: data?,
    })
}

pub(crate) fn log_outcome(
    seeker_id: &str,
    status: StatusCode,
    outcome: &Result<MatchOutcome, MatchingError>,
) {
    match outcome {
        Ok(MatchOutcome::Match(m)) => {
            tracing::info!("Next match for seeker {}: {:?}", seeker_id, m.match_id());
        }
        Ok(MatchOutcome::NoMatch) => {
            tracing::info!("No more matches for seeker {}", seeker_id);
        }
        Err(e) => {
            tracing::warn!("Next match for seeker {} failed ({}): {}", seeker_id, status, e);
        }
    }
}

/// Handle to a next-match call running in the background
#[derive(Debug)]
pub struct MatchCall {
    handle: JoinHandle<()>,
}

impl MatchCall {
    /// Abort the call; the in-flight request is dropped
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait until the callback has run
    ///
    /// Returns `Cancelled` if the call was cancelled before it completed.
    pub async fn wait(self) -> Result<(), MatchingError> {
        match self.handle.await {
            Ok(()) => Ok(()),
            Err(e) if e.is_cancelled() => Err(MatchingError::Cancelled),
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}
