// web_app/api/mod.rs - Upstream media API access (native only)
//
// - client.rs: reqwest client, one method per upstream endpoint
// - upstream.rs: the process-wide client used by server functions

pub mod client;
pub mod upstream;

pub use client::{ApiError, MediaApiClient};
