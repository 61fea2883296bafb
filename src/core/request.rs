use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Method;
use validator::Validate;

use crate::core::client_config::ClientConfig;
use crate::core::path::next_match_path;
use crate::error::MatchingError;
use crate::models::NextMatchRequest;

/// A fully built next-match request, independent of how it will be sent
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub path: String,
    pub url: String,
    pub headers: HeaderMap,
}

impl PreparedRequest {
    pub fn into_async(self, client: &reqwest::Client) -> reqwest::RequestBuilder {
        client.request(self.method, self.url).headers(self.headers)
    }

    pub fn into_blocking(self, client: &reqwest::blocking::Client) -> reqwest::blocking::RequestBuilder {
        client.request(self.method, self.url).headers(self.headers)
    }
}

/// Validate the seeker id and build the GET request for its next match
///
/// Nothing is sent here; an empty id is rejected before any transport is
/// involved.
pub fn prepare_next_match(
    config: &ClientConfig,
    seeker_id: &str,
) -> Result<PreparedRequest, MatchingError> {
    let request = NextMatchRequest::new(seeker_id);
    if let Err(errors) = request.validate() {
        tracing::debug!("Rejected next-match request: {}", errors);
        return Err(MatchingError::InvalidArgument(
            "Missing the required parameter 'seekerId'".to_string(),
        ));
    }

    let path = next_match_path(&request.seeker_id);
    let url = format!("{}{}", config.effective_base_url()?, path);

    // GET with no body, so no Content-Type
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(PreparedRequest {
        method: Method::GET,
        path,
        url,
        headers,
    })
}
