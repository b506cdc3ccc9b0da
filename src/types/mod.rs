// Mon Feb 9 2026 - Alex

pub mod classifier;
pub mod error;
pub mod node;
pub mod parser;

pub use classifier::TypeClassifier;
pub use error::ParseError;
pub use node::{CppType, FundamentalKind, TypeKind};
pub use parser::parse;
