//! Static dashboard bundle with single-page-app fallback.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Entry document of the bundle.
pub const INDEX_FILE: &str = "index.html";

/// Serve files from `dist_dir`, answering unknown paths with `index.html`.
///
/// The fallback keeps status 200 so the client router can resolve the path.
pub fn service(dist_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(dist_dir.join(INDEX_FILE)))
}
