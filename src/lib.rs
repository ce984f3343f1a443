//! Minesweeper web server
//!
//! Serves the minesweeper page and the WASM/JS assets of the two game
//! modules over HTTP. One listener, a fixed route table built at startup,
//! stateless request handling on top of Tokio and Hyper.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod page;
pub mod server;
