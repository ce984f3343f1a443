//! Request handler module
//!
//! Responsible for request routing dispatch and response production:
//! the rendered page for the root routes, raw file bytes for the asset
//! routes.

pub mod assets;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
