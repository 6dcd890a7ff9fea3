//! Static file serving module
//!
//! Resolves URL paths under the configured root and builds file responses.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use percent_encoding::percent_decode_str;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use crate::config::AppState;
use crate::http;
use crate::logger;

/// Serve a static asset for a GET request path
pub async fn serve_static(path: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let Some(file_path) = resolve_path(
        &state.static_root,
        path,
        &state.config.static_files.index_file,
    ) else {
        logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
        return http::build_forbidden_response("Acceso prohibido");
    };

    let content_type = http::mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    match fs::read(&file_path).await {
        Ok(content) => {
            if state.config.logging.access_log {
                logger::log_response(content.len());
            }
            http::build_static_response(
                content,
                content_type,
                &state.config.cors,
                state.config.static_files.cache_max_age,
            )
        }
        Err(e) => match e.kind() {
            io::ErrorKind::NotFound => http::build_not_found_response(),
            io::ErrorKind::PermissionDenied => http::build_forbidden_response("403 Forbidden"),
            _ => {
                logger::log_error(&format!(
                    "Failed to read file '{}': {e}",
                    file_path.display()
                ));
                http::build_server_error_response()
            }
        },
    }
}

/// Resolve a URL path to a file path strictly inside `root`.
///
/// The path is percent-decoded, `/` maps to the index file, and the joined
/// path is normalized lexically so `..` segments resolve without touching
/// the filesystem. A path that escapes the root must be rejected whether or
/// not anything exists at the resolved location, so no `canonicalize` here.
///
/// Returns `None` when the result is not strictly below the root.
pub fn resolve_path(root: &Path, url_path: &str, index_file: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(url_path).decode_utf8_lossy();
    let relative = decoded.strip_prefix('/').unwrap_or(decoded.as_ref());

    let joined = if relative.is_empty() {
        root.join(index_file)
    } else {
        root.join(relative)
    };

    let resolved = normalize(&joined);

    // The traversal guard: root itself does not count as inside
    if resolved
        .strip_prefix(root)
        .map_or(true, |rest| rest.as_os_str().is_empty())
    {
        return None;
    }
    Some(resolved)
}

/// Lexical normalization: `.` segments are dropped and `..` pops, mirroring
/// the path-join semantics the traversal guard is defined against
fn normalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}
