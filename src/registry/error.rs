// Wed Feb 11 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate definition: {0}")]
    DuplicateDefinition(String),
    #[error("invalid pattern rule '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
