//! Configuration loading, caching, and persistence.
//!
//! Handles the TOML config file (~/.config/caddie/config.toml): units,
//! handicap, default wind, the bag as `[[bag]]` entries, and type-prefixed
//! sections `[webserver.<id>]` and `[course.<id>]`.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

pub use caddie::CaddieConfig;

/// Returns `~/.config/caddie/config.toml`.
pub fn default_config_path() -> PathBuf {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("caddie");
    dir.join("config.toml")
}

/// Load persisted config from disk. If the file does not exist, creates it
/// with all-defaults and returns that. A file that fails to parse is left
/// untouched and defaults are used for this run.
pub fn load(path: &Path) -> CaddieConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<CaddieConfig>(&contents) {
            Ok(config) => {
                tracing::info!(
                    "loaded config from {} ({} clubs, {} courses)",
                    path.display(),
                    config.bag.len(),
                    config.course.len()
                );
                config
            }
            Err(e) => {
                tracing::warn!("failed to parse {}: {e}", path.display());
                CaddieConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let defaults = CaddieConfig::default();
            tracing::info!("no config file found, creating {}", path.display());
            save_to(path, &defaults);
            defaults
        }
        Err(e) => {
            tracing::warn!("failed to read {}: {e}", path.display());
            CaddieConfig::default()
        }
    }
}

/// Write config to a specific path. Creates parent dirs if needed. Never panics.
pub fn save_to(path: &Path, config: &CaddieConfig) {
    if let Some(dir) = path.parent()
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        tracing::warn!("failed to create config dir {}: {e}", dir.display());
        return;
    }
    match toml::to_string_pretty(config) {
        Ok(contents) => {
            if let Err(e) = std::fs::write(path, contents) {
                tracing::warn!("failed to write {}: {e}", path.display());
            }
        }
        Err(e) => {
            tracing::warn!("failed to serialize config: {e}");
        }
    }
}

/// Cached configuration backed by a TOML file.
///
/// Reads are cheap (RwLock read guard + clone). Writes acquire the write lock,
/// mutate the cached copy, and persist to disk.
pub struct SystemConfig {
    path: PathBuf,
    inner: RwLock<CaddieConfig>,
}

impl SystemConfig {
    /// Load config from disk (or create defaults) and cache it.
    pub fn new(path: PathBuf) -> Self {
        let config = load(&path);
        Self {
            path,
            inner: RwLock::new(config),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clone the current cached config.
    pub fn snapshot(&self) -> CaddieConfig {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Run `f` against the cached config without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&CaddieConfig) -> R) -> R {
        f(&self.inner.read().unwrap_or_else(|e| e.into_inner()))
    }

    /// Mutate the cached config in place, then persist to disk.
    pub fn update(&self, f: impl FnOnce(&mut CaddieConfig)) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard);
        save_to(&self.path, &guard);
    }

    /// Replace the entire cached config and persist to disk.
    pub fn replace(&self, new: CaddieConfig) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = new;
        save_to(&self.path, &guard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caddie::{UnitSystem, generate_bag};
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load(&path);
        assert_eq!(config, CaddieConfig::default());
        assert!(path.exists());

        // Second load reads the file it just wrote.
        assert_eq!(load(&path), config);
    }

    #[test]
    fn test_unparseable_file_falls_back_and_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_units = [not toml").unwrap();

        let config = load(&path);
        assert_eq!(config, CaddieConfig::default());
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "default_units = [not toml");
    }

    #[test]
    fn test_update_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let system = SystemConfig::new(path.clone());

        system.update(|c| {
            c.default_units = UnitSystem::Imperial;
            c.handicap = Some(4.0);
            c.bag = generate_bag(4.0);
        });

        assert_eq!(system.read(|c| c.default_units), UnitSystem::Imperial);
        let reloaded = load(&path);
        assert_eq!(reloaded.handicap, Some(4.0));
        assert_eq!(reloaded.bag, generate_bag(4.0));
    }

    #[test]
    fn test_replace_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let system = SystemConfig::new(path.clone());

        let mut next = system.snapshot();
        next.webserver.clear();
        system.replace(next.clone());
        assert_eq!(load(&path), next);
    }
}
