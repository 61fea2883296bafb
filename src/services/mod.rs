// Service exports
pub mod blocking;
pub mod matching;

pub use blocking::BlockingMatchFetcher;
pub use matching::{MatchCall, MatchFetcher};
