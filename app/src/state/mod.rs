pub mod config;

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use config::SystemConfig;

/// Root entry point for all managed application state.
///
/// Passed as `Arc<AppState>` to the web layer. The engine itself is
/// stateless; this only holds the cached config and a request counter.
pub struct AppState {
    pub system: SystemConfig,
    request_count: AtomicU64,
}

impl AppState {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            system: SystemConfig::new(config_path),
            request_count: AtomicU64::new(0),
        }
    }

    pub fn count_request(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }
}
