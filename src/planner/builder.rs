// Mon Feb 16 2026 - Alex

use crate::descriptor::{MemberCategory, MemberItem};
use crate::planner::error::PlanError;
use crate::planner::resolver::TypeResolver;
use crate::planner::signature::{
    CallingConvention, FunctionSignature, ParamRepr, ReturnRepr, ValueKind,
};
use crate::registry::WrapperDescriptor;
use crate::types::{self, CppType, TypeKind};
use std::sync::Arc;

/// Builds the calling-convention-correct signature for one member item.
pub struct SignatureBuilder<'a> {
    resolver: &'a TypeResolver<'a>,
}

impl<'a> SignatureBuilder<'a> {
    pub fn new(resolver: &'a TypeResolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn build(
        &self,
        item: &MemberItem,
        category: MemberCategory,
    ) -> Result<FunctionSignature, PlanError> {
        let mut parameters = Vec::with_capacity(item.parameters.len() + 1);
        if category.is_instance() {
            parameters.push(ParamRepr::ThisPointer);
        }

        let count = item.parameters.len();
        for (index, text) in item.parameters.iter().enumerate() {
            let tree = types::parse(text)?;
            if tree.kind == TypeKind::VarArgs {
                if index + 1 != count {
                    return Err(PlanError::Signature(format!(
                        "varargs marker must be the final parameter of {}",
                        item.name
                    )));
                }
                parameters.push(ParamRepr::VarArgsTail);
                continue;
            }
            parameters.push(self.classify_parameter(&tree)?);
        }

        let variadic = parameters.last() == Some(&ParamRepr::VarArgsTail);
        let ret = self.classify_return(&types::parse(&item.return_type)?)?;
        let convention = if !variadic && category.is_instance() {
            CallingConvention::Thiscall
        } else {
            // variadic tails always go through the stack-cleaning convention
            CallingConvention::Cdecl
        };

        Ok(FunctionSignature::new(parameters, ret, convention))
    }

    /// Representation of a static field's stored type, reusing the return
    /// classification (a field read surfaces the same way a return does).
    pub fn field_repr(&self, declarator: &str) -> Result<ReturnRepr, PlanError> {
        self.classify_return(&types::parse(declarator)?)
    }

    fn classify_parameter(&self, tree: &CppType) -> Result<ParamRepr, PlanError> {
        match tree.kind {
            TypeKind::Fundamental => {
                let kind = tree.fundamental.ok_or_else(|| {
                    PlanError::Signature("fundamental node without a resolved kind".to_string())
                })?;
                Ok(ParamRepr::Value(ValueKind::Fundamental(kind)))
            }
            TypeKind::Enum => Ok(ParamRepr::Value(ValueKind::Enum)),
            TypeKind::Class | TypeKind::Struct | TypeKind::Union => {
                let descriptor = self.resolve_aggregate(tree)?;
                if descriptor.is_unmanaged() {
                    Ok(ParamRepr::Value(ValueKind::Unmanaged {
                        native_name: descriptor.native_name.clone(),
                    }))
                } else {
                    Ok(ParamRepr::ByRef { wrapper: descriptor.wrapper_name.clone() })
                }
            }
            TypeKind::Pointer | TypeKind::Array => {
                match self.wrapped_pointee(tree)? {
                    Some(descriptor) => {
                        Ok(ParamRepr::Pointer { wrapper: descriptor.wrapper_name.clone() })
                    }
                    None => Ok(ParamRepr::Value(ValueKind::RawPointer)),
                }
            }
            TypeKind::Reference => match self.wrapped_pointee(tree)? {
                Some(descriptor) => {
                    Ok(ParamRepr::ByRef { wrapper: descriptor.wrapper_name.clone() })
                }
                None => Ok(ParamRepr::Value(ValueKind::RawPointer)),
            },
            TypeKind::RValueReference => match self.wrapped_pointee(tree)? {
                Some(descriptor) => {
                    Ok(ParamRepr::MoveRef { wrapper: descriptor.wrapper_name.clone() })
                }
                None => Ok(ParamRepr::Value(ValueKind::RawPointer)),
            },
            TypeKind::VarArgs => Err(PlanError::Signature(
                "varargs marker outside a parameter list".to_string(),
            )),
        }
    }

    fn classify_return(&self, tree: &CppType) -> Result<ReturnRepr, PlanError> {
        match tree.kind {
            TypeKind::Fundamental => {
                let kind = tree.fundamental.ok_or_else(|| {
                    PlanError::Signature("fundamental node without a resolved kind".to_string())
                })?;
                if kind == crate::types::FundamentalKind::Void {
                    Ok(ReturnRepr::Void)
                } else {
                    Ok(ReturnRepr::Value(ValueKind::Fundamental(kind)))
                }
            }
            TypeKind::Enum => Ok(ReturnRepr::Value(ValueKind::Enum)),
            TypeKind::Class | TypeKind::Struct | TypeKind::Union => {
                let descriptor = self.resolve_aggregate(tree)?;
                if descriptor.is_unmanaged() {
                    Ok(ReturnRepr::Value(ValueKind::Unmanaged {
                        native_name: descriptor.native_name.clone(),
                    }))
                } else {
                    // returning a non-trivial aggregate by value needs its
                    // own wrapper kind, distinct from by-ref parameters
                    Ok(ReturnRepr::Result { wrapper: descriptor.wrapper_name.clone() })
                }
            }
            TypeKind::Pointer | TypeKind::Array => match self.wrapped_pointee(tree)? {
                Some(descriptor) => {
                    Ok(ReturnRepr::Pointer { wrapper: descriptor.wrapper_name.clone() })
                }
                None => Ok(ReturnRepr::Value(ValueKind::RawPointer)),
            },
            TypeKind::Reference | TypeKind::RValueReference => {
                match self.wrapped_pointee(tree)? {
                    Some(descriptor) => {
                        Ok(ReturnRepr::ByRef { wrapper: descriptor.wrapper_name.clone() })
                    }
                    None => Ok(ReturnRepr::Value(ValueKind::RawPointer)),
                }
            }
            TypeKind::VarArgs => {
                Err(PlanError::Signature("varargs marker as a return type".to_string()))
            }
        }
    }

    /// For a single-level modifier over a bare aggregate root, resolve the
    /// pointee and report whether it needs a wrapper. Deeper chains
    /// (pointer-to-pointer and the like) stay raw.
    fn wrapped_pointee(&self, tree: &CppType) -> Result<Option<Arc<WrapperDescriptor>>, PlanError> {
        let pointee = match tree.inner.as_deref() {
            Some(node) => node,
            None => return Ok(None),
        };
        if !pointee.is_aggregate_root() {
            return Ok(None);
        }
        let descriptor = self.resolve_aggregate(pointee)?;
        if descriptor.is_unmanaged() {
            return Ok(None);
        }
        Ok(Some(descriptor))
    }

    fn resolve_aggregate(&self, node: &CppType) -> Result<Arc<WrapperDescriptor>, PlanError> {
        self.resolver.resolve(&node.qualified_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{BindingDocument, ClassDescriptor, MemberClassification};
    use crate::registry::TypeRegistry;
    use crate::types::FundamentalKind;

    fn fixture() -> (TypeRegistry, BindingDocument) {
        let mut document = BindingDocument::new();
        document.insert(ClassDescriptor::new("Foo", 16));
        document.insert(ClassDescriptor::new("Bar", 32));
        (TypeRegistry::new(), document)
    }

    fn build(
        registry: &TypeRegistry,
        document: &BindingDocument,
        item: &MemberItem,
        category: MemberCategory,
    ) -> Result<FunctionSignature, PlanError> {
        let resolver = TypeResolver::new(registry, document, &[]);
        SignatureBuilder::new(&resolver).build(item, category)
    }

    #[test]
    fn test_instance_member_gets_receiver() {
        let (registry, document) = fixture();
        let item = MemberItem::new("_ZN3Foo3barEi", "bar", MemberClassification::Function)
            .with_parameters(vec!["int"])
            .with_return_type("int");
        let sig = build(&registry, &document, &item, MemberCategory::PublicInstance).unwrap();
        assert!(sig.has_receiver());
        assert_eq!(sig.convention, CallingConvention::Thiscall);
        assert_eq!(
            sig.parameters[1],
            ParamRepr::Value(ValueKind::Fundamental(FundamentalKind::Int32))
        );
        assert_eq!(sig.ret, ReturnRepr::Value(ValueKind::Fundamental(FundamentalKind::Int32)));
    }

    #[test]
    fn test_static_member_has_no_receiver() {
        let (registry, document) = fixture();
        let item = MemberItem::new("_ZN3Foo6createEv", "create", MemberClassification::Function);
        let sig = build(&registry, &document, &item, MemberCategory::PublicStatic).unwrap();
        assert!(!sig.has_receiver());
        assert_eq!(sig.convention, CallingConvention::Cdecl);
    }

    #[test]
    fn test_aggregate_by_value_is_by_ref_wrapper() {
        let (registry, document) = fixture();
        let item = MemberItem::new("sym", "take", MemberClassification::Function)
            .with_parameters(vec!["Bar"]);
        let sig = build(&registry, &document, &item, MemberCategory::PublicInstance).unwrap();
        assert_eq!(sig.parameters[1], ParamRepr::ByRef { wrapper: "Bar".to_string() });
    }

    #[test]
    fn test_pointer_to_aggregate_is_pointer_wrapper() {
        let (registry, document) = fixture();
        let item = MemberItem::new("sym", "take", MemberClassification::Function)
            .with_parameters(vec!["Bar*", "int*", "Bar**"]);
        let sig = build(&registry, &document, &item, MemberCategory::PublicInstance).unwrap();
        assert_eq!(sig.parameters[1], ParamRepr::Pointer { wrapper: "Bar".to_string() });
        assert_eq!(sig.parameters[2], ParamRepr::Value(ValueKind::RawPointer));
        // pointer-to-pointer stays raw
        assert_eq!(sig.parameters[3], ParamRepr::Value(ValueKind::RawPointer));
    }

    #[test]
    fn test_rvalue_reference_is_move_wrapper() {
        let (registry, document) = fixture();
        let item = MemberItem::new("sym", "take", MemberClassification::Function)
            .with_parameters(vec!["Bar&&"]);
        let sig = build(&registry, &document, &item, MemberCategory::PublicInstance).unwrap();
        assert_eq!(sig.parameters[1], ParamRepr::MoveRef { wrapper: "Bar".to_string() });
    }

    #[test]
    fn test_varargs_tail_switches_convention() {
        let (registry, document) = fixture();
        let item = MemberItem::new("sym", "logf", MemberClassification::Function)
            .with_parameters(vec!["char const *", "..."]);
        let sig = build(&registry, &document, &item, MemberCategory::PublicInstance).unwrap();
        assert!(sig.variadic);
        assert_eq!(sig.convention, CallingConvention::Cdecl);
        assert_eq!(sig.parameters.last(), Some(&ParamRepr::VarArgsTail));
    }

    #[test]
    fn test_varargs_not_final_fails() {
        let (registry, document) = fixture();
        let item = MemberItem::new("sym", "bad", MemberClassification::Function)
            .with_parameters(vec!["...", "int"]);
        let err = build(&registry, &document, &item, MemberCategory::PublicInstance).unwrap_err();
        assert!(matches!(err, PlanError::Signature(_)));
    }

    #[test]
    fn test_aggregate_return_uses_result_wrapper() {
        let (registry, document) = fixture();
        let item = MemberItem::new("sym", "make", MemberClassification::Function)
            .with_return_type("Bar");
        let sig = build(&registry, &document, &item, MemberCategory::PublicInstance).unwrap();
        assert_eq!(sig.ret, ReturnRepr::Result { wrapper: "Bar".to_string() });
    }

    #[test]
    fn test_enum_travels_as_i32() {
        let (registry, document) = fixture();
        let item = MemberItem::new("sym", "mode", MemberClassification::Function)
            .with_parameters(vec!["enum Mode"])
            .with_return_type("enum Mode");
        let sig = build(&registry, &document, &item, MemberCategory::PublicInstance).unwrap();
        assert_eq!(sig.parameters[1], ParamRepr::Value(ValueKind::Enum));
        assert_eq!(sig.ret, ReturnRepr::Value(ValueKind::Enum));
    }

    #[test]
    fn test_unresolved_aggregate_fails_member() {
        let (registry, document) = fixture();
        let item = MemberItem::new("sym", "take", MemberClassification::Function)
            .with_parameters(vec!["mystery::Thing"]);
        let err = build(&registry, &document, &item, MemberCategory::PublicInstance).unwrap_err();
        assert_eq!(err, PlanError::UnresolvedType("mystery::Thing".to_string()));
    }

    #[test]
    fn test_parse_failure_surfaces_as_plan_error() {
        let (registry, document) = fixture();
        let item = MemberItem::new("sym", "take", MemberClassification::Function)
            .with_parameters(vec!["void (*)(int)"]);
        let err = build(&registry, &document, &item, MemberCategory::PublicInstance).unwrap_err();
        assert!(matches!(err, PlanError::Parse(_)));
    }
}
