//! HTTP protocol layer module
//!
//! Response builders shared by every handler, decoupled from routing.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_405_response, build_html_response, build_json_response,
    build_options_response, ALLOWED_METHODS,
};
