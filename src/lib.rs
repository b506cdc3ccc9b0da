// Wed Feb 18 2026 - Alex

#![allow(unused_variables)]
#![allow(dead_code)]
#![allow(unreachable_patterns)]

pub mod config;
pub mod descriptor;
pub mod memory;
pub mod ownership;
pub mod plan;
pub mod planner;
pub mod registry;
pub mod symbol;
pub mod types;
pub mod vtable;

pub use config::Config;
pub use descriptor::{BindingDocument, ClassDescriptor, MemberItem};
pub use memory::Address;
pub use ownership::{InstanceState, TeardownStrategy};
pub use plan::{BindingPlan, ClassPlan};
pub use planner::{PlanError, PlanningSession};
pub use registry::{PatternRule, TypeRegistry, WrapperDescriptor};
pub use symbol::{AddressResolver, CachedResolver, DlsymResolver};
pub use types::{CppType, ParseError, TypeClassifier};
pub use vtable::{VtableLayout, VtableLayoutBuilder};
