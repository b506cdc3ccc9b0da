// Tue Feb 17 2026 - Alex

pub mod binding_plan;
pub mod class_plan;
pub mod serializer;

pub use binding_plan::BindingPlan;
pub use class_plan::{
    ClassPlan, ConstructorThunk, MethodThunk, PropertyPairing, StaticFieldThunk, VirtualThunk,
};
