use reqwest::StatusCode;

use crate::error::MatchingError;
use crate::models::{Match, MatchOutcome};

/// Turn a next-match response into an outcome
///
/// 200 decodes a match, 204 means the seeker has no more matches (any body
/// is ignored), 400 is the server rejecting the seeker id. Every other status
/// is unexpected.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<MatchOutcome, MatchingError> {
    match status {
        StatusCode::OK => serde_json::from_slice::<Match>(body)
            .map(MatchOutcome::Match)
            .map_err(|e| MatchingError::Decode(e.to_string())),
        StatusCode::NO_CONTENT => Ok(MatchOutcome::NoMatch),
        StatusCode::BAD_REQUEST => {
            let message = body_text(body);
            Err(MatchingError::BadRequest(if message.is_empty() {
                "missing or malformed seekerId".to_string()
            } else {
                message
            }))
        }
        other => Err(MatchingError::UnexpectedStatus {
            status: other.as_u16(),
            body: body_text(body),
        }),
    }
}

fn body_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).trim().to_string()
}
