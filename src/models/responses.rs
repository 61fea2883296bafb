use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use crate::models::domain::Match;

/// Result of asking for the next match
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// 200: the backend proposed a match
    Match(Match),
    /// 204: the seeker has no more matches
    NoMatch,
}

impl MatchOutcome {
    pub fn into_match(self) -> Option<Match> {
        match self {
            MatchOutcome::Match(m) => Some(m),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchOutcome::NoMatch)
    }
}

/// Decoded outcome together with the HTTP status and headers it came with
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: MatchOutcome,
}
