//! User-facing failures of the switch commands.

use thiserror::Error;

use crate::constants::APP_NAME;

/// Precondition failures that stop a command before any file is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwitchError {
    #[error("No API key saved. Run first:\n  {} set-key <your_z.ai_api_key>", APP_NAME)]
    MissingApiKey,
    #[error("API key must not be empty. Usage: {} set-key <api_key>", APP_NAME)]
    EmptyApiKey,
}
