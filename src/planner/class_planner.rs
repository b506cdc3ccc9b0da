// Wed Feb 18 2026 - Alex

use crate::descriptor::{
    BindingDocument, ClassDescriptor, MemberCategory, MemberClassification, MemberItem,
};
use crate::ownership::TeardownStrategy;
use crate::plan::{ClassPlan, ConstructorThunk, MethodThunk, StaticFieldThunk, VirtualThunk};
use crate::planner::builder::SignatureBuilder;
use crate::planner::diagnostics::Diagnostics;
use crate::planner::error::PlanError;
use crate::planner::naming::{self, NameAllocator};
use crate::planner::operators;
use crate::planner::properties::{self, AccessorCandidate};
use crate::planner::resolver::TypeResolver;
use crate::registry::{PatternRule, TypeRegistry, WrapperDescriptor};
use crate::vtable::VtableLayoutBuilder;
use log::debug;

/// Plans one class in a single pass: teardown strategy, constructor and
/// method thunks, vtable layout, property pairings. Any failure on one
/// member degrades locally (skip, or placeholder slot) and never aborts the
/// class.
pub struct ClassPlanner<'a> {
    descriptor: &'a ClassDescriptor,
    registry: &'a TypeRegistry,
    document: &'a BindingDocument,
    rules: &'a [PatternRule],
    names: NameAllocator,
    diagnostics: Diagnostics,
}

impl<'a> ClassPlanner<'a> {
    pub fn new(
        descriptor: &'a ClassDescriptor,
        registry: &'a TypeRegistry,
        document: &'a BindingDocument,
        rules: &'a [PatternRule],
    ) -> Self {
        Self {
            descriptor,
            registry,
            document,
            rules,
            // each planner owns its own allocator (and generator)
            names: NameAllocator::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn plan(mut self) -> (ClassPlan, Diagnostics) {
        let class_name = self.descriptor.name.clone();
        debug!("planning class {}", self.descriptor);

        // the class's own identity stabilizes before its members resolve it
        self.registry.get_or_insert(&class_name, || {
            WrapperDescriptor::wrapped(&class_name, &class_name, self.descriptor.size)
        });

        let resolver = TypeResolver::new(self.registry, self.document, self.rules);
        let signatures = SignatureBuilder::new(&resolver);

        let mut constructors = Vec::new();
        let mut methods = Vec::new();
        let mut static_fields = Vec::new();
        let mut normal_destructor: Option<String> = None;

        for (category, items) in self.descriptor.concrete_buckets() {
            for item in items {
                match item.classification() {
                    MemberClassification::Destructor => {
                        // never a plain callable; it configures teardown
                        if normal_destructor.is_none() {
                            normal_destructor = Some(item.link_symbol.clone());
                        }
                    }
                    MemberClassification::Constructor => {
                        match signatures.build(item, category) {
                            Ok(signature) => constructors.push(ConstructorThunk {
                                link_symbol: item.link_symbol.clone(),
                                signature,
                            }),
                            Err(err) => self.skip(&class_name, item, err),
                        }
                    }
                    MemberClassification::StaticField => {
                        match signatures.field_repr(&item.return_type) {
                            Ok(repr) => {
                                let allocated = self
                                    .names
                                    .allocate(&naming::pascal_case(&item.name), item);
                                if allocated.used_random_suffix {
                                    self.diagnostics.record_random_suffix(
                                        &class_name,
                                        &item.name,
                                        &allocated.name,
                                    );
                                }
                                static_fields.push(StaticFieldThunk {
                                    name: allocated.name,
                                    declared_name: item.name.clone(),
                                    link_symbol: item.link_symbol.clone(),
                                    repr,
                                });
                            }
                            Err(err) => self.skip(&class_name, item, err),
                        }
                    }
                    MemberClassification::Function
                    | MemberClassification::Operator
                    | MemberClassification::UnknownFunction => {
                        match self.plan_method(&signatures, item, category) {
                            Ok(thunk) => methods.push(thunk),
                            Err(err) => self.skip(&class_name, item, err),
                        }
                    }
                }
            }
        }

        // virtual stream: input order is authoritative, one slot per item
        let mut vtable =
            VtableLayoutBuilder::new(&class_name, self.descriptor.primary_anchor());
        let mut virtuals = Vec::new();
        let mut virtual_destructor_slot: Option<usize> = None;

        let virtual_stream = self
            .descriptor
            .ordered_virtual
            .iter()
            .map(|item| (MemberCategory::OrderedVirtual, item))
            .chain(
                self.descriptor
                    .unordered_virtual
                    .iter()
                    .map(|item| (MemberCategory::UnorderedVirtual, item)),
            );

        for (category, item) in virtual_stream {
            if item.is_destructor() {
                let name = format!("~{}", class_name);
                let slot = match signatures.build(item, category) {
                    Ok(signature) => vtable.push_typed(&name, &item.link_symbol, signature),
                    Err(err) => {
                        let slot = vtable.push_placeholder(&name, &err.to_string());
                        self.diagnostics.record_placeholder(&class_name, slot, &item.name, &err);
                        slot
                    }
                };
                if virtual_destructor_slot.is_none() {
                    virtual_destructor_slot = Some(slot);
                }
                continue;
            }

            let base = match self.base_name(item) {
                Ok(base) => base,
                Err(err) => {
                    let slot = vtable.push_placeholder(&item.name, &err.to_string());
                    self.diagnostics.record_placeholder(&class_name, slot, &item.name, &err);
                    continue;
                }
            };
            match signatures.build(item, category) {
                Ok(signature) => {
                    let allocated = self.names.allocate(&base, item);
                    if allocated.used_random_suffix {
                        self.diagnostics.record_random_suffix(
                            &class_name,
                            &item.name,
                            &allocated.name,
                        );
                    }
                    let slot =
                        vtable.push_typed(&allocated.name, &item.link_symbol, signature.clone());
                    virtuals.push(VirtualThunk {
                        name: allocated.name,
                        declared_name: item.name.clone(),
                        slot,
                        signature,
                    });
                }
                Err(err) => {
                    // the slot must keep its position even though it failed
                    let slot = vtable.push_placeholder(&base, &err.to_string());
                    self.diagnostics.record_placeholder(&class_name, slot, &item.name, &err);
                }
            }
        }

        let teardown = match (virtual_destructor_slot, normal_destructor) {
            (Some(slot), _) => TeardownStrategy::Virtual { slot },
            (None, Some(symbol)) => TeardownStrategy::Normal { symbol },
            (None, None) => TeardownStrategy::Empty,
        };

        let mut candidates: Vec<AccessorCandidate<'_>> = Vec::new();
        for method in methods.iter().filter(|m| m.category.is_instance()) {
            candidates.push(AccessorCandidate {
                declared: &method.declared_name,
                generated: &method.name,
                signature: &method.signature,
            });
        }
        for virt in &virtuals {
            candidates.push(AccessorCandidate {
                declared: &virt.declared_name,
                generated: &virt.name,
                signature: &virt.signature,
            });
        }
        let properties = properties::pair_properties(&candidates);

        let plan = ClassPlan {
            name: class_name.clone(),
            wrapper_name: class_name,
            byte_size: self.descriptor.size,
            parents: self.descriptor.parents.clone(),
            teardown,
            constructors,
            methods,
            static_fields,
            virtuals,
            vtable: vtable.build(),
            properties,
        };
        (plan, self.diagnostics)
    }

    fn plan_method(
        &mut self,
        signatures: &SignatureBuilder<'_>,
        item: &MemberItem,
        category: MemberCategory,
    ) -> Result<MethodThunk, PlanError> {
        let base = self.base_name(item)?;
        let signature = signatures.build(item, category)?;
        let allocated = self.names.allocate(&base, item);
        if allocated.used_random_suffix {
            self.diagnostics.record_random_suffix(
                &self.descriptor.name,
                &item.name,
                &allocated.name,
            );
        }
        Ok(MethodThunk {
            name: allocated.name,
            declared_name: item.name.clone(),
            link_symbol: item.link_symbol.clone(),
            signature,
            category,
            relative_address: item.relative_address,
        })
    }

    /// Generated base name before collision handling. Operators go through
    /// the fixed token table with arity disambiguation.
    fn base_name(&self, item: &MemberItem) -> Result<String, PlanError> {
        if item.classification() == MemberClassification::Operator {
            return operators::operator_method_name(&item.name, item.parameters.len())
                .map(|name| name.to_string())
                .ok_or_else(|| {
                    PlanError::Signature(format!("unrecognized operator token: {}", item.name))
                });
        }
        Ok(naming::pascal_case(&item.name))
    }

    fn skip(&mut self, class_name: &str, item: &MemberItem, err: PlanError) {
        debug!("skipping {}::{}: {}", class_name, item.name, err);
        self.diagnostics.record_skip(class_name, &item.name, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::signature::{CallingConvention, ParamRepr, ReturnRepr, ValueKind};
    use crate::types::FundamentalKind;
    use crate::vtable::SlotBinding;

    fn plan_class(descriptor: ClassDescriptor, extra: Vec<ClassDescriptor>) -> (ClassPlan, Diagnostics) {
        let mut document = BindingDocument::new();
        document.insert(descriptor.clone());
        for class in extra {
            document.insert(class);
        }
        let registry = TypeRegistry::new();
        let planner = ClassPlanner::new(
            document.class(&descriptor.name).unwrap(),
            &registry,
            &document,
            &[],
        );
        planner.plan()
    }

    fn function(symbol: &str, name: &str) -> MemberItem {
        MemberItem::new(symbol, name, MemberClassification::Function)
    }

    #[test]
    fn test_end_to_end_foo() {
        let descriptor = ClassDescriptor::new("Foo", 16)
            .add_member(
                MemberCategory::PublicInstance,
                MemberItem::new("_ZN3FooC1Ei", "Foo", MemberClassification::Constructor)
                    .with_parameters(vec!["int"]),
            )
            .add_member(
                MemberCategory::OrderedVirtual,
                function("_ZN3Foo3barEi", "bar")
                    .with_parameters(vec!["int"])
                    .with_return_type("int"),
            );
        let (plan, diagnostics) = plan_class(descriptor, vec![]);

        assert!(diagnostics.is_clean());
        assert_eq!(plan.byte_size, 16);
        assert_eq!(plan.constructors.len(), 1);
        let ctor = &plan.constructors[0];
        assert_eq!(ctor.link_symbol, "_ZN3FooC1Ei");
        assert_eq!(ctor.signature.parameters[0], ParamRepr::ThisPointer);
        assert_eq!(
            ctor.signature.parameters[1],
            ParamRepr::Value(ValueKind::Fundamental(FundamentalKind::Int32))
        );

        let bar = plan.virtual_method("Bar").unwrap();
        assert_eq!(bar.slot, 0);
        assert_eq!(bar.signature.convention, CallingConvention::Thiscall);
        assert_eq!(
            bar.signature.ret,
            ReturnRepr::Value(ValueKind::Fundamental(FundamentalKind::Int32))
        );
        assert_eq!(plan.vtable.slot_count(), 1);
        assert!(plan.vtable.slot(0).unwrap().is_typed());

        // no destructor item anywhere means no teardown action
        assert_eq!(plan.teardown, TeardownStrategy::Empty);
    }

    #[test]
    fn test_failed_virtual_keeps_slot_position() {
        let descriptor = ClassDescriptor::new("Foo", 16)
            .add_member(MemberCategory::OrderedVirtual, function("sym0", "first"))
            .add_member(
                MemberCategory::OrderedVirtual,
                function("sym1", "second").with_parameters(vec!["mystery::Thing"]),
            )
            .add_member(MemberCategory::OrderedVirtual, function("sym2", "third"));
        let (plan, diagnostics) = plan_class(descriptor, vec![]);

        assert_eq!(plan.vtable.slot_count(), 3);
        assert!(plan.vtable.slot(0).unwrap().is_typed());
        assert!(matches!(
            plan.vtable.slot(1).unwrap().binding,
            SlotBinding::Placeholder { .. }
        ));
        assert!(plan.vtable.slot(2).unwrap().is_typed());
        assert_eq!(plan.virtuals.len(), 2);
        assert_eq!(plan.virtual_method("Third").unwrap().slot, 2);
        assert_eq!(diagnostics.placeholder_slots.len(), 1);
        assert_eq!(diagnostics.placeholder_slots[0].slot, 1);
    }

    #[test]
    fn test_virtual_destructor_sets_teardown_and_keeps_slot() {
        let descriptor = ClassDescriptor::new("Foo", 16)
            .add_member(MemberCategory::OrderedVirtual, function("symA", "update"))
            .add_member(
                MemberCategory::OrderedVirtual,
                MemberItem::new("_ZN3FooD1Ev", "~Foo", MemberClassification::Destructor),
            )
            .add_member(MemberCategory::OrderedVirtual, function("symB", "render"));
        let (plan, diagnostics) = plan_class(descriptor, vec![]);

        assert!(diagnostics.is_clean());
        assert_eq!(plan.teardown, TeardownStrategy::Virtual { slot: 1 });
        assert_eq!(plan.vtable.slot_count(), 3);
        assert_eq!(plan.vtable.slot(1).unwrap().name, "~Foo");
        // the destructor never becomes a callable thunk
        assert_eq!(plan.virtuals.len(), 2);
        assert!(plan.virtual_method("Update").is_some());
        assert!(plan.virtual_method("Render").is_some());
    }

    #[test]
    fn test_normal_destructor_interception() {
        let descriptor = ClassDescriptor::new("Foo", 8).add_member(
            MemberCategory::PublicInstance,
            MemberItem::new("_ZN3FooD1Ev", "~Foo", MemberClassification::Destructor),
        );
        let (plan, _) = plan_class(descriptor, vec![]);
        assert_eq!(
            plan.teardown,
            TeardownStrategy::Normal { symbol: "_ZN3FooD1Ev".to_string() }
        );
        assert!(plan.methods.is_empty());
    }

    #[test]
    fn test_bad_member_skipped_class_survives() {
        let descriptor = ClassDescriptor::new("Foo", 8)
            .add_member(
                MemberCategory::PublicInstance,
                function("good", "fine").with_return_type("int"),
            )
            .add_member(
                MemberCategory::PublicInstance,
                function("bad", "broken").with_parameters(vec!["void (*)(int)"]),
            );
        let (plan, diagnostics) = plan_class(descriptor, vec![]);
        assert_eq!(plan.methods.len(), 1);
        assert_eq!(diagnostics.skipped.len(), 1);
        assert_eq!(diagnostics.skipped[0].member, "broken");
    }

    #[test]
    fn test_operator_and_collision_naming() {
        let descriptor = ClassDescriptor::new("Foo", 8)
            .add_member(
                MemberCategory::PublicInstance,
                MemberItem::new("opEq", "operator==", MemberClassification::Operator)
                    .with_parameters(vec!["Foo const &"])
                    .with_return_type("bool"),
            )
            .add_member(MemberCategory::PublicInstance, function("sym1", "size"))
            .add_member(
                MemberCategory::PublicInstance,
                function("sym2", "size").with_parameters(vec!["int"]),
            );
        let (plan, diagnostics) = plan_class(descriptor, vec![]);

        assert!(plan.method("OperatorEquals").is_some());
        assert!(plan.method("Size").is_some());
        assert!(plan.method("Size_int").is_some());
        assert!(diagnostics.random_suffixes.is_empty());
    }

    #[test]
    fn test_property_pairing_end_to_end() {
        let descriptor = ClassDescriptor::new("Foo", 8)
            .add_member(
                MemberCategory::PublicInstance,
                function("g", "getHealth").with_return_type("int"),
            )
            .add_member(
                MemberCategory::PublicInstance,
                function("s", "setHealth").with_parameters(vec!["int"]),
            );
        let (plan, _) = plan_class(descriptor, vec![]);
        assert_eq!(plan.properties.len(), 1);
        assert_eq!(plan.properties[0].name, "Health");
        assert_eq!(plan.properties[0].getter, "GetHealth");
        assert_eq!(plan.properties[0].setter, "SetHealth");
    }

    #[test]
    fn test_cross_class_parameter_resolution() {
        let descriptor = ClassDescriptor::new("Foo", 8).add_member(
            MemberCategory::PublicInstance,
            function("sym", "attach").with_parameters(vec!["Bar*"]),
        );
        let (plan, diagnostics) = plan_class(descriptor, vec![ClassDescriptor::new("Bar", 32)]);
        assert!(diagnostics.is_clean());
        assert_eq!(
            plan.method("Attach").unwrap().signature.parameters[1],
            ParamRepr::Pointer { wrapper: "Bar".to_string() }
        );
    }
}
