// Wed Feb 18 2026 - Alex

use crate::descriptor::BindingDocument;
use crate::plan::{BindingPlan, ClassPlan};
use crate::planner::class_planner::ClassPlanner;
use crate::planner::diagnostics::Diagnostics;
use crate::registry::{PatternRule, TypeRegistry};
use log::info;
use rayon::prelude::*;

/// One planning run over one immutable document snapshot. Owns the shared
/// type registry; pattern rules are fixed at construction.
pub struct PlanningSession {
    document: BindingDocument,
    registry: TypeRegistry,
    rules: Vec<PatternRule>,
}

impl PlanningSession {
    pub fn new(document: BindingDocument) -> Self {
        Self { document, registry: TypeRegistry::new(), rules: Vec::new() }
    }

    pub fn with_rules(mut self, rules: Vec<PatternRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn document(&self) -> &BindingDocument {
        &self.document
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn plan_class(&self, name: &str) -> Option<(ClassPlan, Diagnostics)> {
        let descriptor = self.document.class(name)?;
        let planner = ClassPlanner::new(descriptor, &self.registry, &self.document, &self.rules);
        Some(planner.plan())
    }

    /// Plan every class sequentially, in document order.
    pub fn plan_all(&self) -> BindingPlan {
        self.plan_all_with(|_| {})
    }

    /// Sequential planning with a per-class progress callback.
    pub fn plan_all_with<F>(&self, mut progress: F) -> BindingPlan
    where
        F: FnMut(&str),
    {
        let mut plan = BindingPlan::new();
        for (name, descriptor) in self.document.iter() {
            let planner =
                ClassPlanner::new(descriptor, &self.registry, &self.document, &self.rules);
            let (class_plan, diagnostics) = planner.plan();
            plan.diagnostics.merge(diagnostics);
            plan.insert(class_plan);
            progress(name);
        }
        info!(
            "planned {} classes, {} types registered",
            plan.len(),
            self.registry.len()
        );
        plan
    }

    /// Plan classes concurrently. Registry inserts serialize behind the
    /// write lock; stabilized entries are read concurrently. Output order
    /// still follows the document.
    pub fn plan_all_parallel(&self, threads: usize) -> BindingPlan {
        let threads = if threads == 0 { num_cpus::get() } else { threads };
        let descriptors: Vec<_> = self.document.iter().map(|(_, d)| d).collect();

        let results: Vec<(ClassPlan, Diagnostics)> = match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
        {
            Ok(pool) => pool.install(|| {
                descriptors
                    .par_iter()
                    .map(|descriptor| {
                        ClassPlanner::new(descriptor, &self.registry, &self.document, &self.rules)
                            .plan()
                    })
                    .collect()
            }),
            // pool construction failing is not worth dying over
            Err(_) => descriptors
                .iter()
                .map(|descriptor| {
                    ClassPlanner::new(descriptor, &self.registry, &self.document, &self.rules)
                        .plan()
                })
                .collect(),
        };

        let mut plan = BindingPlan::new();
        for (class_plan, diagnostics) in results {
            plan.diagnostics.merge(diagnostics);
            plan.insert(class_plan);
        }
        info!(
            "planned {} classes on {} threads, {} types registered",
            plan.len(),
            threads,
            self.registry.len()
        );
        plan
    }
}
