// Mon Feb 9 2026 - Alex

use crate::types::error::ParseError;
use crate::types::node::{CppType, FundamentalKind, TypeKind};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fixed keyword table for fundamental base names. Multi-word spellings are
/// whitespace-normalized before lookup.
static FUNDAMENTAL_TABLE: Lazy<HashMap<&'static str, FundamentalKind>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("void", FundamentalKind::Void);
    table.insert("bool", FundamentalKind::Bool);
    table.insert("float", FundamentalKind::Float);
    table.insert("double", FundamentalKind::Double);
    table.insert("wchar_t", FundamentalKind::WChar);
    table.insert("char", FundamentalKind::Char);
    table.insert("short", FundamentalKind::Int16);
    table.insert("short int", FundamentalKind::Int16);
    table.insert("int", FundamentalKind::Int32);
    table.insert("long", FundamentalKind::Int32);
    table.insert("long int", FundamentalKind::Int32);
    table.insert("long long", FundamentalKind::Int64);
    table.insert("long long int", FundamentalKind::Int64);
    table.insert("INT16", FundamentalKind::Int16);
    table.insert("INT32", FundamentalKind::Int32);
    table.insert("INT64", FundamentalKind::Int64);
    table
});

/// Parse a raw declarator into a type tree.
///
/// The scan runs right-to-left: trailing modifiers bind to the position
/// nearest the identifier, so each one is peeled off the end and the parser
/// recurses left over the remaining operand. Failures are always returned,
/// never panicked past this boundary.
pub fn parse(text: &str) -> Result<CppType, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyDeclarator);
    }
    if trimmed.contains('(') || trimmed.contains(')') {
        return Err(ParseError::FunctionType(trimmed.to_string()));
    }
    check_template_balance(trimmed)?;
    if trimmed == "..." {
        return Ok(CppType::var_args());
    }
    parse_node(trimmed)
}

fn check_template_balance(text: &str) -> Result<(), ParseError> {
    let mut depth = 0i32;
    for ch in text.chars() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ParseError::UnbalancedTemplate(text.to_string()));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ParseError::UnbalancedTemplate(text.to_string()));
    }
    Ok(())
}

fn parse_node(text: &str) -> Result<CppType, ParseError> {
    let t = text.trim_end();
    if t.trim().is_empty() {
        return Err(ParseError::EmptyDeclarator);
    }

    if let Some(rest) = t.strip_suffix("&&") {
        return Ok(CppType::modifier(TypeKind::RValueReference, parse_node(rest)?));
    }
    if let Some(rest) = t.strip_suffix('&') {
        return Ok(CppType::modifier(TypeKind::Reference, parse_node(rest)?));
    }
    if let Some(rest) = t.strip_suffix('*') {
        return Ok(CppType::modifier(TypeKind::Pointer, parse_node(rest)?));
    }
    if t.ends_with(']') {
        let open = t
            .rfind('[')
            .ok_or_else(|| ParseError::UnexpectedToken(t.to_string()))?;
        return Ok(CppType::modifier(TypeKind::Array, parse_node(&t[..open])?));
    }
    if let Some(rest) = strip_trailing_const(t) {
        // applies to whatever the remaining left operand parses to, so
        // "T const *" marks the pointee rather than the pointer
        let mut node = parse_node(rest)?;
        node.is_const = true;
        return Ok(node);
    }

    parse_base(t)
}

fn strip_trailing_const(text: &str) -> Option<&str> {
    let rest = text.strip_suffix("const")?;
    if rest.is_empty() {
        return None;
    }
    if rest.ends_with(char::is_whitespace) {
        return Some(rest);
    }
    None
}

/// Parse a base type once every trailing modifier has been peeled.
fn parse_base(text: &str) -> Result<CppType, ParseError> {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ParseError::EmptyDeclarator);
    }

    let mut is_const = false;
    while tokens.first() == Some(&"const") {
        is_const = true;
        tokens.remove(0);
    }
    if tokens.is_empty() {
        return Err(ParseError::EmptyDeclarator);
    }

    // leading aggregate keywords pin the root kind
    let keyword_kind = match tokens[0] {
        "class" => Some(TypeKind::Class),
        "struct" => Some(TypeKind::Struct),
        "union" => Some(TypeKind::Union),
        "enum" => Some(TypeKind::Enum),
        _ => None,
    };
    if let Some(kind) = keyword_kind {
        tokens.remove(0);
        if kind == TypeKind::Enum && tokens.first() == Some(&"class") {
            tokens.remove(0);
        }
        if tokens.is_empty() {
            return Err(ParseError::UnexpectedToken(text.to_string()));
        }
        let mut node = parse_aggregate(&tokens.join(" "), kind)?;
        node.is_const = node.is_const || is_const;
        return Ok(node);
    }

    if let Some(kind) = resolve_fundamental(&tokens) {
        let mut node = CppType::fundamental(kind);
        node.is_const = is_const;
        return Ok(node);
    }

    // unrecognized prefix falls back to a class identifier
    let mut node = parse_aggregate(&tokens.join(" "), TypeKind::Class)?;
    node.is_const = node.is_const || is_const;
    Ok(node)
}

fn resolve_fundamental(tokens: &[&str]) -> Option<FundamentalKind> {
    match tokens[0] {
        "unsigned" => {
            let base = if tokens.len() == 1 { "int".to_string() } else { tokens[1..].join(" ") };
            FUNDAMENTAL_TABLE.get(base.as_str()).map(|k| k.as_unsigned())
        }
        "signed" => {
            let base = if tokens.len() == 1 { "int".to_string() } else { tokens[1..].join(" ") };
            FUNDAMENTAL_TABLE.get(base.as_str()).map(|k| k.as_signed())
        }
        _ => {
            let joined = tokens.join(" ");
            FUNDAMENTAL_TABLE.get(joined.as_str()).copied()
        }
    }
}

/// Parse an aggregate (or enum) root: template-argument extraction by
/// depth-counted bracket balancing, then namespace splitting on `::`.
fn parse_aggregate(text: &str, kind: TypeKind) -> Result<CppType, ParseError> {
    let (name_part, template_args) = match text.find('<') {
        Some(open) => {
            if !text.ends_with('>') {
                return Err(ParseError::UnbalancedTemplate(text.to_string()));
            }
            let args_text = &text[open + 1..text.len() - 1];
            (&text[..open], parse_template_args(args_text)?)
        }
        None => (text, Vec::new()),
    };

    let name_part = name_part.trim();
    if name_part.is_empty() {
        return Err(ParseError::UnexpectedToken(text.to_string()));
    }

    let mut segments: Vec<&str> = name_part.split("::").collect();
    let identifier = segments
        .pop()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::UnexpectedToken(name_part.to_string()))?;
    let namespaces: Vec<String> = segments
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    Ok(CppType::new(kind)
        .with_identifier(identifier)
        .with_namespaces(namespaces)
        .with_template_args(template_args))
}

/// Split a template argument list on depth-1 commas only, recursively
/// parsing each argument.
fn parse_template_args(args_text: &str) -> Result<Vec<CppType>, ParseError> {
    let trimmed = args_text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut args = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    for (pos, ch) in trimmed.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth -= 1,
            ',' if depth == 0 => {
                args.push(parse_node(trimmed[start..pos].trim())?);
                start = pos + 1;
            }
            _ => {}
        }
    }
    args.push(parse_node(trimmed[start..].trim())?);
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert_eq!(parse(""), Err(ParseError::EmptyDeclarator));
        assert_eq!(parse("   "), Err(ParseError::EmptyDeclarator));
    }

    #[test]
    fn test_rejects_function_types() {
        assert!(matches!(parse("void (*)(int)"), Err(ParseError::FunctionType(_))));
        assert!(matches!(parse("int ()"), Err(ParseError::FunctionType(_))));
    }

    #[test]
    fn test_rejects_unbalanced_templates() {
        assert!(matches!(parse("std::vector<int"), Err(ParseError::UnbalancedTemplate(_))));
        assert!(matches!(parse("Foo>int<"), Err(ParseError::UnbalancedTemplate(_))));
    }

    #[test]
    fn test_varargs_terminal() {
        let tree = parse("...").unwrap();
        assert_eq!(tree.kind, TypeKind::VarArgs);
    }

    #[test]
    fn test_double_pointer() {
        let tree = parse("Foo**").unwrap();
        assert_eq!(tree.kind, TypeKind::Pointer);
        let inner = tree.inner.as_deref().unwrap();
        assert_eq!(inner.kind, TypeKind::Pointer);
        assert_eq!(inner.inner.as_deref().unwrap().kind, TypeKind::Class);
        assert_eq!(tree.root().identifier, "Foo");
    }

    #[test]
    fn test_rvalue_reference() {
        let tree = parse("Foo&&").unwrap();
        assert_eq!(tree.kind, TypeKind::RValueReference);
        assert_eq!(tree.root().identifier, "Foo");
    }

    #[test]
    fn test_array() {
        let tree = parse("Foo[]").unwrap();
        assert_eq!(tree.kind, TypeKind::Array);
        assert_eq!(tree.root().identifier, "Foo");

        let sized = parse("char[16]").unwrap();
        assert_eq!(sized.kind, TypeKind::Array);
        assert_eq!(sized.root().fundamental, Some(FundamentalKind::Char));
    }

    #[test]
    fn test_trailing_const_marks_operand() {
        let plain = parse("Foo const").unwrap();
        assert!(plain.is_const);
        assert_eq!(plain.kind, TypeKind::Class);

        // pointer-to-const: the pointee carries the flag, not the pointer
        let ptr = parse("Foo const *").unwrap();
        assert_eq!(ptr.kind, TypeKind::Pointer);
        assert!(!ptr.is_const);
        assert!(ptr.inner.as_deref().unwrap().is_const);
    }

    #[test]
    fn test_leading_const() {
        let tree = parse("const int").unwrap();
        assert!(tree.is_const);
        assert_eq!(tree.fundamental, Some(FundamentalKind::Int32));
    }

    #[test]
    fn test_fundamental_mapping() {
        assert_eq!(parse("unsigned int").unwrap().fundamental, Some(FundamentalKind::UInt32));
        assert_eq!(parse("signed char").unwrap().fundamental, Some(FundamentalKind::SChar));
        assert_eq!(parse("int").unwrap().fundamental, Some(FundamentalKind::Int32));
        assert_eq!(parse("long long").unwrap().fundamental, Some(FundamentalKind::Int64));
        assert_eq!(parse("INT64").unwrap().fundamental, Some(FundamentalKind::Int64));
        assert_eq!(parse("unsigned").unwrap().fundamental, Some(FundamentalKind::UInt32));
        // unsigned char resolves to the same kind as plain char
        assert_eq!(
            parse("unsigned char").unwrap().fundamental,
            parse("char").unwrap().fundamental
        );
    }

    #[test]
    fn test_aggregate_keywords() {
        assert_eq!(parse("struct Foo").unwrap().kind, TypeKind::Struct);
        assert_eq!(parse("union Foo").unwrap().kind, TypeKind::Union);
        assert_eq!(parse("enum Foo").unwrap().kind, TypeKind::Enum);
        assert_eq!(parse("enum class Foo").unwrap().kind, TypeKind::Enum);
        assert_eq!(parse("class Foo").unwrap().kind, TypeKind::Class);
        assert_eq!(parse("Foo").unwrap().kind, TypeKind::Class);
    }

    #[test]
    fn test_namespace_split() {
        let tree = parse("rbx::signals::Connection*").unwrap();
        let root = tree.root();
        assert_eq!(root.identifier, "Connection");
        assert_eq!(root.namespaces, vec!["rbx".to_string(), "signals".to_string()]);
        assert_eq!(tree.qualified_name(), "rbx::signals::Connection");
    }

    #[test]
    fn test_template_args_split_at_depth_one() {
        let tree = parse("Template<std::pair<int,double>, int32_t>").unwrap();
        let root = tree.root();
        assert_eq!(root.identifier, "Template");
        assert_eq!(root.template_args.len(), 2);
        assert_eq!(root.template_args[0].render(), "std::pair<int, double>");
        assert_eq!(root.template_args[1].root().identifier, "int32_t");
    }

    #[test]
    fn test_template_args_recursive() {
        let tree = parse("std::map<std::string, std::vector<Foo*>>").unwrap();
        let root = tree.root();
        assert_eq!(root.template_args.len(), 2);
        let vec_arg = &root.template_args[1];
        assert_eq!(vec_arg.root().identifier, "vector");
        assert_eq!(vec_arg.root().template_args[0].kind, TypeKind::Pointer);
    }

    #[test]
    fn test_render_round_trip() {
        let tree = parse("ns::Outer<int, ns::Inner<char>>").unwrap();
        assert_eq!(tree.render(), "ns::Outer<int, ns::Inner<char>>");
    }

    #[test]
    fn test_reference() {
        let tree = parse("Foo&").unwrap();
        assert_eq!(tree.kind, TypeKind::Reference);
    }
}
