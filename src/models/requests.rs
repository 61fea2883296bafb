use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for the next match of a roommate seeker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NextMatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "seeker_id", rename = "seekerId")]
    pub seeker_id: String,
}

impl NextMatchRequest {
    pub fn new(seeker_id: impl Into<String>) -> Self {
        Self {
            seeker_id: seeker_id.into(),
        }
    }
}
