// Fri Feb 13 2026 - Alex

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of one member, decoded from the document's integer kind
/// hint. Unknown hints degrade to `UnknownFunction` rather than failing the
/// whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberClassification {
    Function,
    Constructor,
    Destructor,
    Operator,
    StaticField,
    UnknownFunction,
}

impl MemberClassification {
    pub fn from_kind_hint(hint: u32) -> Self {
        match hint {
            0 => Self::Function,
            1 => Self::Constructor,
            2 => Self::Destructor,
            3 => Self::Operator,
            4 => Self::StaticField,
            _ => Self::UnknownFunction,
        }
    }

    pub fn is_callable(&self) -> bool {
        !matches!(self, Self::StaticField)
    }
}

impl fmt::Display for MemberClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Function => "function",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
            Self::Operator => "operator",
            Self::StaticField => "static-field",
            Self::UnknownFunction => "unknown-function",
        };
        write!(f, "{}", name)
    }
}

bitflags! {
    /// Qualifier and storage bits carried by one member item.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MemberFlags: u32 {
        const CONST         = 1 << 0;
        const PURE_VIRTUAL  = 1 << 1;
        const IMPLICIT_THIS = 1 << 2;
        const STATIC        = 1 << 3;
        const VIRTUAL       = 1 << 4;
    }
}

impl Default for MemberFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// The access/storage bucket a member was listed under. Instance buckets
/// (including both virtual buckets) carry an implicit this receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberCategory {
    PublicInstance,
    ProtectedInstance,
    PrivateStatic,
    PublicStatic,
    OrderedVirtual,
    UnorderedVirtual,
}

impl MemberCategory {
    pub fn is_instance(&self) -> bool {
        matches!(
            self,
            Self::PublicInstance
                | Self::ProtectedInstance
                | Self::OrderedVirtual
                | Self::UnorderedVirtual
        )
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Self::PrivateStatic | Self::PublicStatic)
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self, Self::OrderedVirtual | Self::UnorderedVirtual)
    }
}

impl fmt::Display for MemberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PublicInstance => "public-instance",
            Self::ProtectedInstance => "protected-instance",
            Self::PrivateStatic => "private-static",
            Self::PublicStatic => "public-static",
            Self::OrderedVirtual => "ordered-virtual",
            Self::UnorderedVirtual => "unordered-virtual",
        };
        write!(f, "{}", name)
    }
}

/// One member as described by the input snapshot. Type fields are raw
/// declarator text; the planner parses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberItem {
    pub link_symbol: String,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    /// Raw integer kind hint from the extraction tool.
    pub kind: u32,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub parameter_names: Vec<String>,
    #[serde(default = "default_return_type")]
    pub return_type: String,
    #[serde(default)]
    pub relative_address: u64,
    #[serde(default)]
    pub flags: MemberFlags,
}

fn default_return_type() -> String {
    "void".to_string()
}

impl MemberItem {
    pub fn new(link_symbol: &str, name: &str, kind: MemberClassification) -> Self {
        let hint = match kind {
            MemberClassification::Function => 0,
            MemberClassification::Constructor => 1,
            MemberClassification::Destructor => 2,
            MemberClassification::Operator => 3,
            MemberClassification::StaticField => 4,
            MemberClassification::UnknownFunction => u32::MAX,
        };
        Self {
            link_symbol: link_symbol.to_string(),
            name: name.to_string(),
            namespace: String::new(),
            kind: hint,
            parameters: Vec::new(),
            parameter_names: Vec::new(),
            return_type: default_return_type(),
            relative_address: 0,
            flags: MemberFlags::empty(),
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<&str>) -> Self {
        self.parameters = parameters.into_iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_parameter_names(mut self, names: Vec<&str>) -> Self {
        self.parameter_names = names.into_iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_return_type(mut self, return_type: &str) -> Self {
        self.return_type = return_type.to_string();
        self
    }

    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_relative_address(mut self, address: u64) -> Self {
        self.relative_address = address;
        self
    }

    pub fn classification(&self) -> MemberClassification {
        MemberClassification::from_kind_hint(self.kind)
    }

    pub fn is_destructor(&self) -> bool {
        self.classification() == MemberClassification::Destructor
    }

    pub fn is_const(&self) -> bool {
        self.flags.contains(MemberFlags::CONST)
    }

    pub fn is_pure_virtual(&self) -> bool {
        self.flags.contains(MemberFlags::PURE_VIRTUAL)
    }

    /// Name of the declared parameter at `index`, when the snapshot knew it.
    pub fn parameter_name(&self, index: usize) -> Option<&str> {
        self.parameter_names.get(index).map(|s| s.as_str()).filter(|s| !s.is_empty())
    }
}

impl fmt::Display for MemberItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}({}) [{}]",
            self.return_type,
            self.name,
            self.parameters.join(", "),
            self.classification()
        )
    }
}
