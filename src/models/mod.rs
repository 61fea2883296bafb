// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Match, RoommateMatch};
pub use requests::NextMatchRequest;
pub use responses::{ApiResponse, MatchOutcome};
