//! Mode detection and the pure settings transitions.
//!
//! Nothing here touches the filesystem: each transition takes a [`Settings`]
//! value and returns the edited one, so the I/O layer in [`crate::switcher`]
//! stays a thin load/apply/save sequence.

use std::fmt;

use clap::ValueEnum;

use crate::config::{ProviderEnv, Settings};
use crate::constants::{AUTH_TOKEN_KEY, GLM_KEYS, GLM_URL_MARKER};

/// Which provider Claude Code is pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Native Anthropic API.
    Claude,
    /// z.ai's Anthropic-compatible GLM endpoint.
    Glm,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Claude => write!(f, "Claude (native)"),
            Mode::Glm => write!(f, "GLM (z.ai)"),
        }
    }
}

/// Derives the active mode from `settings`.
///
/// GLM iff `env.ANTHROPIC_BASE_URL` exists and contains `z.ai` anywhere, so
/// custom proxy URLs on that domain count too.
pub fn current_mode(settings: &Settings) -> Mode {
    match settings.provider_env().base_url {
        Some(url) if url.contains(GLM_URL_MARKER) => Mode::Glm,
        _ => Mode::Claude,
    }
}

/// Points `settings` at GLM using `api_key`.
///
/// Sets the auth token and overwrites the base URL and model defaults. Other
/// `env` keys are left alone.
pub fn apply_glm(mut settings: Settings, api_key: &str) -> Settings {
    settings.update_env(|env| {
        env.insert(AUTH_TOKEN_KEY.to_string(), api_key.into());
        ProviderEnv::glm_defaults().merge_into(env);
    });
    settings
}

/// Result of [`apply_claude`].
#[derive(Debug, Clone, PartialEq)]
pub enum NativeSwitch {
    /// Provider keys were removed; the edited settings must be saved.
    Switched(Settings),
    /// No provider keys were present, nothing to save.
    Unchanged,
}

/// Removes the five provider keys from `env`.
///
/// Every other `env` key survives, and an emptied `env` object is kept.
pub fn apply_claude(mut settings: Settings) -> NativeSwitch {
    let Some(env) = settings.env_mut() else {
        return NativeSwitch::Unchanged;
    };

    let mut removed = 0;
    for key in GLM_KEYS {
        if env.shift_remove(key).is_some() {
            removed += 1;
        }
    }
    if removed == 0 {
        return NativeSwitch::Unchanged;
    }

    tracing::debug!(removed, "removed provider keys from env");
    NativeSwitch::Switched(settings)
}
