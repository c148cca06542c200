//! Home-directory path resolution for the settings and credentials files.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::constants::{CLAUDE_DIR, CREDENTIALS_FILENAME, SETTINGS_FILENAME};

/// Locations of the two documents this tool edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Claude Code's `settings.json`, owned by Claude Code.
    pub settings: PathBuf,
    /// This tool's credential store.
    pub credentials: PathBuf,
}

impl ConfigPaths {
    /// Builds both paths relative to `home`.
    ///
    /// Returns `<home>/.claude/settings.json` and `<home>/.gcl-switcher.json`.
    pub fn from_home(home: &Path) -> Self {
        Self {
            settings: home.join(CLAUDE_DIR).join(SETTINGS_FILENAME),
            credentials: home.join(CREDENTIALS_FILENAME),
        }
    }

    /// Resolves both paths under the current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform's home directory cannot be determined.
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(Self::from_home(&home))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_home_layout() {
        let paths = ConfigPaths::from_home(Path::new("/home/alice"));
        assert_eq!(
            paths.settings,
            PathBuf::from("/home/alice/.claude/settings.json")
        );
        assert_eq!(
            paths.credentials,
            PathBuf::from("/home/alice/.gcl-switcher.json")
        );
    }
}
