//! Static asset serving module
//!
//! Transmits asset file bytes verbatim with the MIME type inferred from the
//! file extension. Asset files are provisioned externally; a missing or
//! unreadable file is a per-request error, never a process failure.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a single asset file
pub async fn serve_file(path: &Path, is_head: bool, access_log: bool) -> Response<Full<Bytes>> {
    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read asset '{}': {e}", path.display()));
            return http::build_500_response();
        }
    };

    let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));

    if access_log {
        logger::log_response(200, content.len());
    }

    http::response::build_asset_response(content, content_type, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_asset(name: &str, content: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("minesweeper-web-test-{name}"));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_serves_file_bytes_verbatim() {
        let content = b"\x00asm\x01\x00\x00\x00";
        let path = temp_asset("ok.wasm", content);

        let resp = serve_file(&path, false, false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/wasm");
        assert_eq!(
            resp.headers()["Content-Length"],
            content.len().to_string().as_str()
        );

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body.as_ref(), content);

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_js_glue_content_type() {
        let path = temp_asset("glue.js", b"export default function init() {}");

        let resp = serve_file(&path, false, false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/javascript");

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_500() {
        let path = PathBuf::from("/nonexistent/minesweeper_rs_wasm_bg.wasm");
        let resp = serve_file(&path, false, false).await;
        assert_eq!(resp.status(), 500);
    }

    #[tokio::test]
    async fn test_head_drops_body_keeps_headers() {
        let content = b"console.log('hi')";
        let path = temp_asset("head.js", content);

        let resp = serve_file(&path, true, false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()["Content-Length"],
            content.len().to_string().as_str()
        );

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());

        std::fs::remove_file(&path).unwrap();
    }
}
