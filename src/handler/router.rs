//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Routes are an explicit mapping
//! from path to a tagged response action, built once at startup.

use crate::config::{AppState, AssetsConfig};
use crate::handler::assets;
use crate::http;
use crate::logger;
use crate::page;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::collections::HashMap;
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// What to do for a matched route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Delegate to the page renderer
    RenderPage,
    /// Stream the bytes of a file on disk
    ServeFile { path: PathBuf },
}

/// The asset files and the npm package directory each lives in
const ASSET_FILES: [(&str, &str); 4] = [
    ("minesweeper_ai_wasm.js", "minesweeper-ai-wasm"),
    ("minesweeper_ai_wasm_bg.wasm", "minesweeper-ai-wasm"),
    ("minesweeper_rs_wasm.js", "minesweeper-rs-wasm"),
    ("minesweeper_rs_wasm_bg.wasm", "minesweeper-rs-wasm"),
];

/// Static route table, immutable after startup
///
/// Every registered path resolves to exactly one action. Asset files are
/// looked up on disk at request time, never at startup.
pub struct RouteTable {
    entries: HashMap<String, RouteAction>,
}

impl RouteTable {
    /// Build the route table from the asset configuration
    pub fn from_config(assets: &AssetsConfig) -> Self {
        let root = Path::new(&assets.root);
        let mut entries = HashMap::new();

        entries.insert("/".to_string(), RouteAction::RenderPage);
        entries.insert("/index.html".to_string(), RouteAction::RenderPage);

        for (file, package) in ASSET_FILES {
            entries.insert(
                format!("/{file}"),
                RouteAction::ServeFile {
                    path: root.join(package).join(file),
                },
            );
        }

        Self { entries }
    }

    /// Resolve a request to its response action
    ///
    /// Only GET and HEAD match; every other method falls through to the
    /// default 404 handling, as does any unregistered path.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<&RouteAction> {
        match *method {
            Method::GET | Method::HEAD => self.entries.get(path),
            _ => None,
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;
    let access_log = state.config.logging.access_log;

    if access_log {
        logger::log_request(method, req.uri(), req.version());
    }

    let response = match state.routes.resolve(method, path) {
        Some(RouteAction::RenderPage) => serve_page(is_head, access_log),
        Some(RouteAction::ServeFile { path }) => {
            assets::serve_file(path, is_head, access_log).await
        }
        None => http::build_404_response(),
    };

    Ok(response)
}

/// Serve the rendered page for the root routes
fn serve_page(is_head: bool, access_log: bool) -> Response<Full<Bytes>> {
    let html = page::render();
    if access_log {
        logger::log_response(200, html.len());
    }
    http::response::build_html_response(html, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::from_config(&AssetsConfig {
            root: "node_modules".to_string(),
        })
    }

    #[test]
    fn test_root_routes_render_page() {
        let table = table();
        assert_eq!(
            table.resolve(&Method::GET, "/"),
            Some(&RouteAction::RenderPage)
        );
        assert_eq!(
            table.resolve(&Method::GET, "/index.html"),
            Some(&RouteAction::RenderPage)
        );
    }

    #[test]
    fn test_asset_routes_map_to_package_files() {
        let table = table();
        assert_eq!(
            table.resolve(&Method::GET, "/minesweeper_ai_wasm.js"),
            Some(&RouteAction::ServeFile {
                path: PathBuf::from("node_modules/minesweeper-ai-wasm/minesweeper_ai_wasm.js"),
            })
        );
        assert_eq!(
            table.resolve(&Method::GET, "/minesweeper_rs_wasm_bg.wasm"),
            Some(&RouteAction::ServeFile {
                path: PathBuf::from("node_modules/minesweeper-rs-wasm/minesweeper_rs_wasm_bg.wasm"),
            })
        );
    }

    #[test]
    fn test_all_five_path_sets_resolve() {
        let table = table();
        for path in [
            "/",
            "/index.html",
            "/minesweeper_ai_wasm.js",
            "/minesweeper_ai_wasm_bg.wasm",
            "/minesweeper_rs_wasm.js",
            "/minesweeper_rs_wasm_bg.wasm",
        ] {
            assert!(table.resolve(&Method::GET, path).is_some(), "{path}");
        }
    }

    #[test]
    fn test_unregistered_path_has_no_action() {
        let table = table();
        assert_eq!(table.resolve(&Method::GET, "/favicon.ico"), None);
        assert_eq!(table.resolve(&Method::GET, "/minesweeper"), None);
    }

    #[test]
    fn test_resolution_is_method_sensitive() {
        let table = table();
        assert_eq!(table.resolve(&Method::POST, "/"), None);
        assert_eq!(table.resolve(&Method::PUT, "/minesweeper_ai_wasm.js"), None);
        // HEAD matches wherever GET does
        assert!(table.resolve(&Method::HEAD, "/index.html").is_some());
    }

    #[test]
    fn test_asset_root_is_configurable() {
        let table = RouteTable::from_config(&AssetsConfig {
            root: "/srv/assets".to_string(),
        });
        assert_eq!(
            table.resolve(&Method::GET, "/minesweeper_rs_wasm.js"),
            Some(&RouteAction::ServeFile {
                path: PathBuf::from("/srv/assets/minesweeper-rs-wasm/minesweeper_rs_wasm.js"),
            })
        );
    }
}
