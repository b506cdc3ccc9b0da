// Mon Feb 9 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// The shape of a single node in a parsed declarator tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Fundamental,
    Pointer,
    Reference,
    RValueReference,
    Array,
    Enum,
    Class,
    Struct,
    Union,
    VarArgs,
}

impl TypeKind {
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Self::Pointer | Self::Reference | Self::RValueReference | Self::Array
        )
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Class | Self::Struct | Self::Union)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fundamental => "fundamental",
            Self::Pointer => "pointer",
            Self::Reference => "reference",
            Self::RValueReference => "rvalue-reference",
            Self::Array => "array",
            Self::Enum => "enum",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::VarArgs => "varargs",
        };
        write!(f, "{}", name)
    }
}

/// Resolved fundamental type. Discriminants are laid out so that the
/// unsigned variant of each integer sits one step above its signed
/// counterpart; `unsigned char` deliberately resolves to `Char` rather
/// than a distinct kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FundamentalKind {
    Void = 0,
    Bool = 1,
    Char = 2,
    SChar = 3,
    WChar = 4,
    Int16 = 5,
    UInt16 = 6,
    Int32 = 7,
    UInt32 = 8,
    Int64 = 9,
    UInt64 = 10,
    Float = 11,
    Double = 12,
}

impl FundamentalKind {
    /// Apply an `unsigned` qualifier to an already-resolved base kind.
    pub fn as_unsigned(self) -> Self {
        match self {
            // unsigned char keeps the plain char kind
            Self::Char => Self::Char,
            Self::Int16 => Self::UInt16,
            Self::Int32 => Self::UInt32,
            Self::Int64 => Self::UInt64,
            other => other,
        }
    }

    /// Apply a `signed` qualifier to an already-resolved base kind.
    pub fn as_signed(self) -> Self {
        match self {
            Self::Char => Self::SChar,
            other => other,
        }
    }

    pub fn byte_size(&self) -> usize {
        match self {
            Self::Void => 0,
            Self::Bool | Self::Char | Self::SChar => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::WChar | Self::Int32 | Self::UInt32 | Self::Float => 4,
            Self::Int64 | Self::UInt64 | Self::Double => 8,
        }
    }

    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Char
                | Self::SChar
                | Self::WChar
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
        )
    }
}

impl fmt::Display for FundamentalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::SChar => "signed char",
            Self::WChar => "wchar_t",
            Self::Int16 => "short",
            Self::UInt16 => "unsigned short",
            Self::Int32 => "int",
            Self::UInt32 => "unsigned int",
            Self::Int64 => "long long",
            Self::UInt64 => "unsigned long long",
            Self::Float => "float",
            Self::Double => "double",
        };
        write!(f, "{}", name)
    }
}

/// One node of a parsed declarator. Modifier nodes chain through `inner`
/// toward exactly one root node (an aggregate, enum, fundamental, or the
/// varargs terminal).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CppType {
    pub kind: TypeKind,
    pub fundamental: Option<FundamentalKind>,
    pub identifier: String,
    pub namespaces: Vec<String>,
    pub template_args: Vec<CppType>,
    pub is_const: bool,
    pub inner: Option<Box<CppType>>,
}

impl CppType {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            fundamental: None,
            identifier: String::new(),
            namespaces: Vec::new(),
            template_args: Vec::new(),
            is_const: false,
            inner: None,
        }
    }

    pub fn fundamental(kind: FundamentalKind) -> Self {
        let mut node = Self::new(TypeKind::Fundamental);
        node.fundamental = Some(kind);
        node.identifier = kind.to_string();
        node
    }

    pub fn var_args() -> Self {
        let mut node = Self::new(TypeKind::VarArgs);
        node.identifier = "...".to_string();
        node
    }

    pub fn modifier(kind: TypeKind, operand: CppType) -> Self {
        debug_assert!(kind.is_modifier());
        let mut node = Self::new(kind);
        node.inner = Some(Box::new(operand));
        node
    }

    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.identifier = identifier.to_string();
        self
    }

    pub fn with_namespaces(mut self, namespaces: Vec<String>) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn with_template_args(mut self, args: Vec<CppType>) -> Self {
        self.template_args = args;
        self
    }

    pub fn with_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// Walk the modifier chain down to the single root node.
    pub fn root(&self) -> &CppType {
        let mut node = self;
        while let Some(ref inner) = node.inner {
            node = inner;
        }
        node
    }

    pub fn is_root(&self) -> bool {
        self.inner.is_none()
    }

    pub fn is_aggregate_root(&self) -> bool {
        self.is_root() && self.kind.is_aggregate()
    }

    /// Fully qualified root name, namespace segments joined with `::`.
    pub fn qualified_name(&self) -> String {
        let root = self.root();
        if root.namespaces.is_empty() {
            return root.identifier.clone();
        }
        let mut name = root.namespaces.join("::");
        name.push_str("::");
        name.push_str(&root.identifier);
        name
    }

    /// Render the root identifier with its template arguments, the way the
    /// declarator spelled it (namespace-qualified, comma-joined args).
    pub fn render(&self) -> String {
        let root = self.root();
        let mut out = root.qualified_name();
        if !root.template_args.is_empty() {
            out.push('<');
            let args: Vec<String> = root.template_args.iter().map(|a| a.render()).collect();
            out.push_str(&args.join(", "));
            out.push('>');
        }
        out
    }
}

impl fmt::Display for CppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TypeKind::Pointer => {
                write!(f, "{}*", self.inner.as_deref().map(|i| i.to_string()).unwrap_or_default())?
            }
            TypeKind::Reference => {
                write!(f, "{}&", self.inner.as_deref().map(|i| i.to_string()).unwrap_or_default())?
            }
            TypeKind::RValueReference => {
                write!(f, "{}&&", self.inner.as_deref().map(|i| i.to_string()).unwrap_or_default())?
            }
            TypeKind::Array => {
                write!(f, "{}[]", self.inner.as_deref().map(|i| i.to_string()).unwrap_or_default())?
            }
            TypeKind::VarArgs => write!(f, "...")?,
            _ => write!(f, "{}", self.render())?,
        }
        if self.is_const {
            write!(f, " const")?;
        }
        Ok(())
    }
}
