mod client;
mod fetch_utils;
pub mod http_client;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client;
// Re-export the upstream client
pub use client::UpstreamClient;
