// Fri Feb 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("symbol not found: {0}")]
    NotFound(String),
    #[error("symbol name not representable: {0}")]
    InvalidName(String),
}
