// Mon Feb 16 2026 - Alex

pub mod builder;
pub mod class_planner;
pub mod diagnostics;
pub mod error;
pub mod naming;
pub mod operators;
pub mod properties;
pub mod resolver;
pub mod session;
pub mod signature;

pub use builder::SignatureBuilder;
pub use class_planner::ClassPlanner;
pub use diagnostics::Diagnostics;
pub use error::PlanError;
pub use resolver::TypeResolver;
pub use session::PlanningSession;
pub use signature::{CallingConvention, FunctionSignature, ParamRepr, ReturnRepr, ValueKind};
