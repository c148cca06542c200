//! Centralized constants for gcl-switcher.
//!
//! File locations, the fixed `env` key set, and the GLM defaults live here
//! so they can be changed in one place.

/// Application name used in CLI output and the credentials filename.
pub const APP_NAME: &str = "gcl-switcher";

/// Directory (under home) that holds Claude Code's settings.
pub const CLAUDE_DIR: &str = ".claude";

/// Claude Code settings filename.
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Credentials filename, stored directly in the home directory.
pub const CREDENTIALS_FILENAME: &str = ".gcl-switcher.json";

/// Credentials field holding the API key.
pub const API_KEY_FIELD: &str = "apiKey";

/// Field the first release of the tool stored the API key under.
pub const LEGACY_API_KEY_FIELD: &str = "glmApiKey";

// --- env keys ---

/// Auth token passed to the provider.
pub const AUTH_TOKEN_KEY: &str = "ANTHROPIC_AUTH_TOKEN";

/// Provider base URL.
pub const BASE_URL_KEY: &str = "ANTHROPIC_BASE_URL";

/// Model used for the opus tier.
pub const OPUS_MODEL_KEY: &str = "ANTHROPIC_DEFAULT_OPUS_MODEL";

/// Model used for the sonnet tier.
pub const SONNET_MODEL_KEY: &str = "ANTHROPIC_DEFAULT_SONNET_MODEL";

/// Model used for the haiku tier.
pub const HAIKU_MODEL_KEY: &str = "ANTHROPIC_DEFAULT_HAIKU_MODEL";

/// Every key added on `use glm` and removed on `use claude`.
pub const GLM_KEYS: [&str; 5] = [
    AUTH_TOKEN_KEY,
    BASE_URL_KEY,
    OPUS_MODEL_KEY,
    SONNET_MODEL_KEY,
    HAIKU_MODEL_KEY,
];

// --- GLM defaults ---

/// z.ai's Anthropic-compatible endpoint.
pub const GLM_BASE_URL: &str = "https://api.z.ai/api/anthropic";

/// A base URL containing this substring means GLM mode is active.
pub const GLM_URL_MARKER: &str = "z.ai";

/// Default opus-tier model on GLM.
pub const GLM_OPUS_MODEL: &str = "glm-4.7";

/// Default sonnet-tier model on GLM.
pub const GLM_SONNET_MODEL: &str = "glm-4.7";

/// Default haiku-tier model on GLM.
pub const GLM_HAIKU_MODEL: &str = "glm-4.5-air";

// --- Key redaction ---

/// Characters of the API key shown before the ellipsis.
pub const REDACT_PREFIX_LEN: usize = 8;

/// Characters of the API key shown after the ellipsis.
pub const REDACT_SUFFIX_LEN: usize = 4;

/// Marker placed between the visible parts of a redacted key.
pub const REDACT_ELLIPSIS: &str = "...";

/// Reminder appended to every successful mode switch.
pub const RESTART_HINT: &str = "Restart Claude Code to apply.";
