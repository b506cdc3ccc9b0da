// Mon Feb 16 2026 - Alex

use crate::registry::RegistryError;
use crate::types::ParseError;
use thiserror::Error;

/// Failures raised while planning one member. All of these are caught at
/// the member boundary: the member is skipped (or its vtable slot becomes a
/// placeholder) and planning of the rest of the class continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("declarator parse failed: {0}")]
    Parse(#[from] ParseError),
    #[error("unresolved type: {0}")]
    UnresolvedType(String),
    #[error("signature could not be completed: {0}")]
    Signature(String),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
