// Mon Feb 16 2026 - Alex

use crate::types::FundamentalKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar that crosses the call boundary by raw value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Fundamental(FundamentalKind),
    /// Enums travel as 32-bit integers.
    Enum,
    /// Any pointer not re-expressed as a wrapper.
    RawPointer,
    /// An aggregate the registry classified unmanaged.
    Unmanaged { native_name: String },
}

/// How one parameter is represented at the planned call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamRepr {
    /// The implicit native-pointer receiver of instance members.
    ThisPointer,
    Value(ValueKind),
    /// Non-unmanaged aggregate passed by value natively; the wrapper hands
    /// over its instance pointer.
    ByRef { wrapper: String },
    /// Pointer to a wrapped aggregate.
    Pointer { wrapper: String },
    /// Rvalue reference to a wrapped aggregate (move semantics).
    MoveRef { wrapper: String },
    /// Trailing platform argument-list placeholder of a variadic signature.
    VarArgsTail,
}

/// How the return value is represented. Mirrors [`ParamRepr`], except a
/// non-unmanaged aggregate returned by value needs its own wrapper kind:
/// the ABI for returning such an aggregate differs from passing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnRepr {
    Void,
    Value(ValueKind),
    /// Non-unmanaged aggregate returned by value.
    Result { wrapper: String },
    Pointer { wrapper: String },
    ByRef { wrapper: String },
}

impl ReturnRepr {
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Whether a getter returning this shape can feed a setter taking
    /// `param`, for property pairing.
    pub fn matches_param(&self, param: &ParamRepr) -> bool {
        match (self, param) {
            (Self::Value(a), ParamRepr::Value(b)) => a == b,
            (Self::Result { wrapper: a }, ParamRepr::ByRef { wrapper: b }) => a == b,
            (Self::ByRef { wrapper: a }, ParamRepr::ByRef { wrapper: b }) => a == b,
            (Self::Pointer { wrapper: a }, ParamRepr::Pointer { wrapper: b }) => a == b,
            _ => false,
        }
    }
}

/// Calling convention of the planned native call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallingConvention {
    /// Instance members: receiver in the dedicated register.
    Thiscall,
    /// Statics, free functions, and every variadic signature.
    Cdecl,
}

impl fmt::Display for CallingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thiscall => write!(f, "thiscall"),
            Self::Cdecl => write!(f, "cdecl"),
        }
    }
}

/// The complete planned shape of one native call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub parameters: Vec<ParamRepr>,
    pub ret: ReturnRepr,
    pub convention: CallingConvention,
    pub variadic: bool,
}

impl FunctionSignature {
    pub fn new(parameters: Vec<ParamRepr>, ret: ReturnRepr, convention: CallingConvention) -> Self {
        let variadic = parameters.last() == Some(&ParamRepr::VarArgsTail);
        Self { parameters, ret, convention, variadic }
    }

    pub fn has_receiver(&self) -> bool {
        self.parameters.first() == Some(&ParamRepr::ThisPointer)
    }

    /// Parameters excluding the implicit receiver and any variadic tail.
    pub fn explicit_parameters(&self) -> &[ParamRepr] {
        let mut params = self.parameters.as_slice();
        if self.has_receiver() {
            params = &params[1..];
        }
        if self.variadic && !params.is_empty() {
            params = &params[..params.len() - 1];
        }
        params
    }

    pub fn explicit_arity(&self) -> usize {
        self.explicit_parameters().len()
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| match p {
                ParamRepr::ThisPointer => "this".to_string(),
                ParamRepr::Value(ValueKind::Fundamental(k)) => k.to_string(),
                ParamRepr::Value(ValueKind::Enum) => "enum:i32".to_string(),
                ParamRepr::Value(ValueKind::RawPointer) => "ptr".to_string(),
                ParamRepr::Value(ValueKind::Unmanaged { native_name }) => native_name.clone(),
                ParamRepr::ByRef { wrapper } => format!("&{}", wrapper),
                ParamRepr::Pointer { wrapper } => format!("*{}", wrapper),
                ParamRepr::MoveRef { wrapper } => format!("&&{}", wrapper),
                ParamRepr::VarArgsTail => "...".to_string(),
            })
            .collect();
        write!(f, "{} ({})", self.convention, params.join(", "))
    }
}
