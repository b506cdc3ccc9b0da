// Mon Feb 16 2026 - Alex

use crate::descriptor::BindingDocument;
use crate::planner::error::PlanError;
use crate::registry::{pattern, predefined, PatternRule, TypeRegistry, WrapperDescriptor};
use std::sync::Arc;

/// Resolves a qualified native name to a wrapper descriptor, populating the
/// shared registry lazily as planning touches types.
///
/// Lookup order: stabilized registry entries, the document's class map, the
/// statically declared predefined table, then the session's ordered pattern
/// rules. A miss is an [`PlanError::UnresolvedType`].
pub struct TypeResolver<'a> {
    registry: &'a TypeRegistry,
    document: &'a BindingDocument,
    rules: &'a [PatternRule],
}

impl<'a> TypeResolver<'a> {
    pub fn new(
        registry: &'a TypeRegistry,
        document: &'a BindingDocument,
        rules: &'a [PatternRule],
    ) -> Self {
        Self { registry, document, rules }
    }

    pub fn resolve(&self, qualified_name: &str) -> Result<Arc<WrapperDescriptor>, PlanError> {
        if let Some(hit) = self.registry.lookup(qualified_name) {
            return Ok(hit);
        }

        if let Some(class) = self.lookup_class(qualified_name) {
            let (name, size) = (class.name.clone(), class.size);
            return Ok(self
                .registry
                .get_or_insert(qualified_name, || WrapperDescriptor::wrapped(qualified_name, &name, size)));
        }

        if let Some(entry) = predefined::lookup(qualified_name) {
            return Ok(self.registry.get_or_insert(qualified_name, || entry.clone()));
        }

        if let Some(rule) = pattern::match_rules(self.rules, qualified_name) {
            let descriptor = rule.describe(qualified_name);
            return Ok(self.registry.get_or_insert(qualified_name, || descriptor));
        }

        Err(PlanError::UnresolvedType(qualified_name.to_string()))
    }

    /// Class names in the document are stored unqualified; try both the
    /// qualified spelling and the bare identifier.
    fn lookup_class(&self, qualified_name: &str) -> Option<&'a crate::descriptor::ClassDescriptor> {
        if let Some(class) = self.document.class(qualified_name) {
            return Some(class);
        }
        let bare = qualified_name.rsplit("::").next()?;
        if bare != qualified_name {
            return self.document.class(bare);
        }
        None
    }
}
