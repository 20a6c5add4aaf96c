//! HTTP protocol layer module
//!
//! Response construction, decoupled from request handling.

pub mod response;

// Re-export commonly used types
pub use response::{build_501_response, build_page_response};
