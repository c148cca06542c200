//! The four user operations, each a load/apply/save sequence over a [`Store`].
//!
//! Handlers return typed outcomes; all printing happens in [`crate::cli`].

use anyhow::Result;

use crate::config::{ProviderEnv, Store};
use crate::error::SwitchError;
use crate::format::redact_key;
use crate::mode::{self, Mode, NativeSwitch};

/// Outcome of `use claude`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeOutcome {
    Switched,
    AlreadyNative,
}

/// Everything `status` reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub mode: Mode,
    /// Base URL and models with defaults filled in. Only set in GLM mode.
    pub glm: Option<ProviderEnv>,
    pub redacted_key: Option<String>,
}

impl StatusReport {
    /// GLM mode is active but no key is saved to re-apply it with.
    pub fn missing_key_warning(&self) -> bool {
        self.mode == Mode::Glm && self.redacted_key.is_none()
    }
}

/// Switches Claude Code to GLM using the saved API key.
///
/// # Errors
///
/// [`SwitchError::MissingApiKey`] if no key is saved; no file is touched in
/// that case. Filesystem errors while saving are propagated.
pub fn use_glm(store: &Store) -> Result<()> {
    let credentials = store.load_credentials();
    let api_key = credentials.api_key().ok_or(SwitchError::MissingApiKey)?;

    let settings = mode::apply_glm(store.load_settings(), api_key);
    store.save_settings(&settings)?;
    tracing::info!(path = %store.paths().settings.display(), "switched to GLM");
    Ok(())
}

/// Removes the GLM keys from Claude Code's settings.
///
/// Writes nothing when none of them are present.
pub fn use_claude(store: &Store) -> Result<NativeOutcome> {
    match mode::apply_claude(store.load_settings()) {
        NativeSwitch::Unchanged => Ok(NativeOutcome::AlreadyNative),
        NativeSwitch::Switched(settings) => {
            store.save_settings(&settings)?;
            tracing::info!(path = %store.paths().settings.display(), "switched to Claude");
            Ok(NativeOutcome::Switched)
        }
    }
}

/// Saves `key` as the GLM API key and returns its redacted form.
///
/// The settings file is never touched; run `use glm` again to apply a new key.
pub fn set_key(store: &Store, key: &str) -> Result<String> {
    let key = key.trim();
    if key.is_empty() {
        return Err(SwitchError::EmptyApiKey.into());
    }

    let mut credentials = store.load_credentials();
    credentials.api_key = Some(key.to_string());
    store.save_credentials(&credentials)?;
    tracing::info!(path = %store.paths().credentials.display(), "saved API key");
    Ok(redact_key(key))
}

/// Reports the active mode and the saved key.
pub fn status(store: &Store) -> StatusReport {
    let settings = store.load_settings();
    let credentials = store.load_credentials();
    let mode = mode::current_mode(&settings);

    StatusReport {
        mode,
        glm: (mode == Mode::Glm).then(|| settings.provider_env().with_defaults()),
        redacted_key: credentials.api_key().map(redact_key),
    }
}
