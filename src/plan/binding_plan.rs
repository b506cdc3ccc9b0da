// Tue Feb 17 2026 - Alex

use crate::plan::class_plan::ClassPlan;
use crate::planner::diagnostics::Diagnostics;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The finished output of one planning run: per-class plans in document
/// order plus the accumulated degradation record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingPlan {
    pub classes: IndexMap<String, ClassPlan>,
    pub diagnostics: Diagnostics,
}

impl BindingPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, plan: ClassPlan) {
        self.classes.insert(plan.name.clone(), plan);
    }

    pub fn class(&self, name: &str) -> Option<&ClassPlan> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn total_thunks(&self) -> usize {
        self.classes.values().map(|c| c.thunk_count()).sum()
    }

    pub fn total_vtable_slots(&self) -> usize {
        self.classes.values().map(|c| c.vtable.slot_count()).sum()
    }

    pub fn total_properties(&self) -> usize {
        self.classes.values().map(|c| c.properties.len()).sum()
    }
}

impl fmt::Display for BindingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} classes, {} thunks, {} vtable slots, {} properties ({})",
            self.len(),
            self.total_thunks(),
            self.total_vtable_slots(),
            self.total_properties(),
            self.diagnostics
        )
    }
}
