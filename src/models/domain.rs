use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A proposed pairing returned by the matching backend
///
/// The API provider owns the schema. The known RooMatch fields are typed,
/// everything else is kept in `extra` so that re-serializing a decoded match
/// yields the payload it was decoded from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "seekerId", default, skip_serializing_if = "Option::is_none")]
    pub seeker_id: Option<String>,
    #[serde(rename = "propertyId", default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(rename = "roommateMatches", default, skip_serializing_if = "Vec::is_empty")]
    pub roommate_matches: Vec<RoommateMatch>,
    #[serde(rename = "propertyMatchScore", default, skip_serializing_if = "Option::is_none")]
    pub property_match_score: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Match {
    /// Identifier of this match, from `id` or a provider-specific `matchId`
    pub fn match_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or_else(|| self.extra.get("matchId").and_then(Value::as_str))
    }

    /// Highest roommate score in this match, if any roommates were paired
    pub fn best_roommate_score(&self) -> Option<i32> {
        self.roommate_matches.iter().map(|r| r.match_score).max()
    }
}

/// A roommate paired with the seeker inside a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoommateMatch {
    #[serde(rename = "roommateId")]
    pub roommate_id: String,
    #[serde(rename = "matchScore")]
    pub match_score: i32,
}
