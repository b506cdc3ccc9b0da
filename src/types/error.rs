// Mon Feb 9 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty declarator")]
    EmptyDeclarator,
    #[error("function-type declarator not supported: {0}")]
    FunctionType(String),
    #[error("unbalanced template brackets: {0}")]
    UnbalancedTemplate(String),
    #[error("unexpected token in declarator: {0}")]
    UnexpectedToken(String),
}
