//! RooMatch client - fetch the next roommate match for a seeker
//!
//! Wraps `GET /match/{seekerId}` of the RooMatch API. [`MatchFetcher`] is the
//! async client, [`BlockingMatchFetcher`] the blocking one; both build the
//! request and read the response through the same code in [`core`](crate::core).

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{ClientConfig, ServerSelection};
pub use error::MatchingError;
pub use models::{ApiResponse, Match, MatchOutcome, NextMatchRequest, RoommateMatch};
pub use services::{BlockingMatchFetcher, MatchCall, MatchFetcher};
