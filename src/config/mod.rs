//! Settings and credential storage for gcl-switcher.
//!
//! Two JSON documents are involved: Claude Code's own
//! `~/.claude/settings.json`, of which only the `env` object is touched, and
//! `~/.gcl-switcher.json`, which holds the saved API key. Both are read whole,
//! edited in memory and written back.

mod loader;
mod paths;
mod types;

pub use loader::{read_document, write_document};
pub use paths::ConfigPaths;
pub use types::{Credentials, ProviderEnv, Settings};

use anyhow::Result;

/// Load/save access to both documents at a fixed pair of paths.
#[derive(Debug, Clone)]
pub struct Store {
    paths: ConfigPaths,
}

impl Store {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    /// Store rooted at the current user's home directory.
    pub fn open() -> Result<Self> {
        Ok(Self::new(ConfigPaths::resolve()?))
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn load_settings(&self) -> Settings {
        Settings::from_document(read_document(&self.paths.settings))
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        write_document(&self.paths.settings, settings.as_document())
    }

    pub fn load_credentials(&self) -> Credentials {
        Credentials::from_document(read_document(&self.paths.credentials))
    }

    pub fn save_credentials(&self, credentials: &Credentials) -> Result<()> {
        write_document(&self.paths.credentials, &credentials.to_document()?)
    }
}
