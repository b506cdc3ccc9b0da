// Mon Feb 9 2026 - Alex

use crate::types::error::ParseError;
use crate::types::node::{CppType, FundamentalKind, TypeKind};
use crate::types::parser;

/// Wraps a parsed type tree and answers the questions the binding planner
/// asks: what is the root, what modifiers wrap it, and in what order.
#[derive(Debug, Clone)]
pub struct TypeClassifier {
    tree: CppType,
}

impl TypeClassifier {
    pub fn new(tree: CppType) -> Self {
        Self { tree }
    }

    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Ok(Self::new(parser::parse(text)?))
    }

    pub fn tree(&self) -> &CppType {
        &self.tree
    }

    pub fn root(&self) -> &CppType {
        self.tree.root()
    }

    /// Iterate the chain from the outermost node down to and including the
    /// root.
    pub fn chain(&self) -> ChainIter<'_> {
        ChainIter { current: Some(&self.tree) }
    }

    /// Modifier nodes only, outermost first.
    pub fn modifiers(&self) -> impl Iterator<Item = &CppType> {
        self.chain().filter(|node| node.kind.is_modifier())
    }

    pub fn outer_kind(&self) -> TypeKind {
        self.tree.kind
    }

    pub fn is_var_args(&self) -> bool {
        self.tree.kind == TypeKind::VarArgs
    }

    pub fn is_pointer(&self) -> bool {
        self.tree.kind == TypeKind::Pointer
    }

    pub fn is_reference(&self) -> bool {
        self.tree.kind == TypeKind::Reference
    }

    pub fn is_rvalue_reference(&self) -> bool {
        self.tree.kind == TypeKind::RValueReference
    }

    pub fn is_array(&self) -> bool {
        self.tree.kind == TypeKind::Array
    }

    pub fn pointer_depth(&self) -> usize {
        self.chain().filter(|node| node.kind == TypeKind::Pointer).count()
    }

    pub fn modifier_count(&self) -> usize {
        self.modifiers().count()
    }

    /// True when the tree is a bare root with no modifiers at all.
    pub fn is_bare_root(&self) -> bool {
        self.tree.is_root()
    }

    pub fn root_kind(&self) -> TypeKind {
        self.root().kind
    }

    pub fn root_fundamental(&self) -> Option<FundamentalKind> {
        self.root().fundamental
    }

    pub fn is_void(&self) -> bool {
        self.tree.is_root() && self.root_fundamental() == Some(FundamentalKind::Void)
    }

    pub fn root_is_aggregate(&self) -> bool {
        self.root_kind().is_aggregate()
    }

    pub fn qualified_name(&self) -> String {
        self.tree.qualified_name()
    }

    pub fn render(&self) -> String {
        self.tree.render()
    }
}

pub struct ChainIter<'a> {
    current: Option<&'a CppType>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a CppType;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.inner.as_deref();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_order() {
        let classifier = TypeClassifier::parse("Foo**").unwrap();
        let kinds: Vec<TypeKind> = classifier.chain().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![TypeKind::Pointer, TypeKind::Pointer, TypeKind::Class]);
        assert_eq!(classifier.pointer_depth(), 2);
    }

    #[test]
    fn test_bare_root() {
        let classifier = TypeClassifier::parse("int").unwrap();
        assert!(classifier.is_bare_root());
        assert_eq!(classifier.modifier_count(), 0);
        assert_eq!(classifier.root_fundamental(), Some(FundamentalKind::Int32));
    }

    #[test]
    fn test_void_detection() {
        assert!(TypeClassifier::parse("void").unwrap().is_void());
        assert!(!TypeClassifier::parse("void*").unwrap().is_void());
    }
}
