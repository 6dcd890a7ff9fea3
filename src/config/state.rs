// Application state module
// Immutable per-process state shared across connections

use std::path::{Path, PathBuf};

use super::types::Config;

/// Application state: the configuration plus values derived from it once at
/// startup. Shared read-only across all connections; requests never mutate it.
pub struct AppState {
    pub config: Config,
    /// Canonicalized absolute static root, the prefix the traversal guard
    /// checks resolved paths against
    pub static_root: PathBuf,
}

impl AppState {
    /// Create the state, canonicalizing the static root.
    ///
    /// Fails at startup if the configured root does not exist, rather than
    /// answering every GET with an error later.
    pub fn new(config: Config) -> std::io::Result<Self> {
        let static_root = Path::new(&config.static_files.root).canonicalize()?;
        Ok(Self {
            config,
            static_root,
        })
    }
}
