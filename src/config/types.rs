//! Typed views over the settings and credentials documents.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{
    API_KEY_FIELD, AUTH_TOKEN_KEY, BASE_URL_KEY, GLM_BASE_URL, GLM_HAIKU_MODEL, GLM_OPUS_MODEL,
    GLM_SONNET_MODEL, HAIKU_MODEL_KEY, LEGACY_API_KEY_FIELD, OPUS_MODEL_KEY, SONNET_MODEL_KEY,
};

/// Claude Code's `settings.json`.
///
/// Held as the raw JSON object so every field this tool doesn't own survives a
/// load/save cycle untouched, in its original order. Only the `env` object is
/// ever edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    document: Map<String, Value>,
}

impl Settings {
    pub fn from_document(document: Map<String, Value>) -> Self {
        Self { document }
    }

    pub fn as_document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// The `env` object, if present and actually an object.
    pub fn env(&self) -> Option<&Map<String, Value>> {
        self.document.get("env").and_then(Value::as_object)
    }

    pub fn env_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.document.get_mut("env").and_then(Value::as_object_mut)
    }

    /// Edits the `env` object in place, creating it empty if absent.
    ///
    /// An `env` holding anything other than an object is replaced.
    pub fn update_env(&mut self, edit: impl FnOnce(&mut Map<String, Value>)) {
        let slot = self.document.entry("env").or_insert(Value::Null);
        let mut env = match slot.take() {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            _ => {
                tracing::debug!("replacing non-object env in settings");
                Map::new()
            }
        };
        edit(&mut env);
        *slot = Value::Object(env);
    }

    /// Typed view of the provider keys currently in `env`.
    pub fn provider_env(&self) -> ProviderEnv {
        self.env().map(ProviderEnv::from_env).unwrap_or_default()
    }
}

/// The fixed provider key set, one optional field per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderEnv {
    pub auth_token: Option<String>,
    pub base_url: Option<String>,
    pub opus_model: Option<String>,
    pub sonnet_model: Option<String>,
    pub haiku_model: Option<String>,
}

impl ProviderEnv {
    /// Reads the fixed keys out of an `env` object. Non-string values read as absent.
    pub fn from_env(env: &Map<String, Value>) -> Self {
        let get = |key: &str| env.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            auth_token: get(AUTH_TOKEN_KEY),
            base_url: get(BASE_URL_KEY),
            opus_model: get(OPUS_MODEL_KEY),
            sonnet_model: get(SONNET_MODEL_KEY),
            haiku_model: get(HAIKU_MODEL_KEY),
        }
    }

    /// The values written on `use glm`, minus the auth token.
    pub fn glm_defaults() -> Self {
        Self {
            auth_token: None,
            base_url: Some(GLM_BASE_URL.to_string()),
            opus_model: Some(GLM_OPUS_MODEL.to_string()),
            sonnet_model: Some(GLM_SONNET_MODEL.to_string()),
            haiku_model: Some(GLM_HAIKU_MODEL.to_string()),
        }
    }

    /// Fills every missing or empty base URL or model field from
    /// [`ProviderEnv::glm_defaults`].
    pub fn with_defaults(self) -> Self {
        let defaults = Self::glm_defaults();
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
        Self {
            auth_token: self.auth_token,
            base_url: non_empty(self.base_url).or(defaults.base_url),
            opus_model: non_empty(self.opus_model).or(defaults.opus_model),
            sonnet_model: non_empty(self.sonnet_model).or(defaults.sonnet_model),
            haiku_model: non_empty(self.haiku_model).or(defaults.haiku_model),
        }
    }

    /// Key/value pairs for the fields that are set, in fixed key order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            (AUTH_TOKEN_KEY, &self.auth_token),
            (BASE_URL_KEY, &self.base_url),
            (OPUS_MODEL_KEY, &self.opus_model),
            (SONNET_MODEL_KEY, &self.sonnet_model),
            (HAIKU_MODEL_KEY, &self.haiku_model),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    /// Overwrites the set fields inside `env`, leaving every other key alone.
    pub fn merge_into(&self, env: &mut Map<String, Value>) {
        for (key, value) in self.entries() {
            env.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
}

/// This tool's credential store (`~/.gcl-switcher.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    /// Saved z.ai API key.
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Every other field, kept as-is. Includes the legacy `glmApiKey`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Credentials {
    /// Decodes the credential document.
    ///
    /// `apiKey` wins; older files that only carry `glmApiKey` fall back to it.
    /// A non-string `apiKey` reads as absent and is dropped.
    pub fn from_document(mut document: Map<String, Value>) -> Self {
        let current = match document.shift_remove(API_KEY_FIELD) {
            Some(Value::String(key)) => Some(key),
            Some(_) => {
                tracing::debug!("ignoring non-string apiKey in credentials");
                None
            }
            None => None,
        };
        let api_key = current.filter(|key| !key.is_empty()).or_else(|| {
            document
                .get(LEGACY_API_KEY_FIELD)
                .and_then(Value::as_str)
                .map(str::to_string)
        });
        Self {
            api_key,
            extra: document,
        }
    }

    pub fn to_document(&self) -> anyhow::Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => anyhow::bail!("Credentials serialized to non-object: {other}"),
        }
    }

    /// The saved key, treating an empty string as no key.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}
