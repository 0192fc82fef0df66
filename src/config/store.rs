//! Shared configuration storage.
//!
//! In-memory config container with interior mutability so the terminal
//! front end can reload the file without restarting.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Create a store from an initial config and the file it came from.
    /// `path` is `None` for built-in defaults, which cannot be reloaded.
    pub fn new(config: Config, path: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Reload config from the file.
    ///
    /// On success, replaces the current config and returns `true` if it
    /// changed. On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<bool, ConfigError> {
        let Some(path) = &self.path else {
            return Ok(false);
        };
        let config = Config::load_from(path)?;
        let mut guard = self.inner.write();
        let changed = *guard != config;
        *guard = config;
        Ok(changed)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
