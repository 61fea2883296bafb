// Request/response plumbing shared by the fetchers
pub mod client_config;
pub mod path;
pub mod request;
pub mod response;
pub mod servers;

pub use client_config::{ClientConfig, DEFAULT_BASE_PATH, DEFAULT_TIMEOUT_SECS};
pub use path::{escape_path_segment, expand_path, next_match_path, NEXT_MATCH_PATH};
pub use request::{prepare_next_match, PreparedRequest};
pub use response::interpret_response;
pub use servers::ServerSelection;
