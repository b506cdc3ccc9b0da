// Wed Feb 18 2026 - Alex

use crate::plan::PropertyPairing;
use crate::planner::naming;
use crate::planner::signature::FunctionSignature;

/// One planned accessor offered for pairing: its declared native name, the
/// generated thunk name, and the planned signature.
pub struct AccessorCandidate<'a> {
    pub declared: &'a str,
    pub generated: &'a str,
    pub signature: &'a FunctionSignature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccessorRole {
    Getter,
    Setter,
}

/// Recognize the 3-letter `get`/`set` prefixes (case-insensitive) and the
/// `is` prefix. Returns the role and the remaining property stem.
fn accessor_role(declared: &str) -> Option<(AccessorRole, &str)> {
    if let (Some(prefix), Some(stem)) = (declared.get(..3), declared.get(3..)) {
        if !stem.is_empty() {
            if prefix.eq_ignore_ascii_case("get") {
                return Some((AccessorRole::Getter, stem));
            }
            if prefix.eq_ignore_ascii_case("set") {
                return Some((AccessorRole::Setter, stem));
            }
        }
    }
    if let (Some(prefix), Some(stem)) = (declared.get(..2), declared.get(2..)) {
        if !stem.is_empty() && prefix.eq_ignore_ascii_case("is") {
            return Some((AccessorRole::Getter, stem));
        }
    }
    None
}

/// Pair zero-arg getters with one-arg setters sharing a property stem,
/// when the getter's return representation matches the setter's parameter.
/// Unmatched or type-mismatched accessors are left alone and stay ordinary
/// methods.
pub fn pair_properties(candidates: &[AccessorCandidate<'_>]) -> Vec<PropertyPairing> {
    let mut pairings = Vec::new();

    for getter in candidates {
        let Some((AccessorRole::Getter, stem)) = accessor_role(getter.declared) else {
            continue;
        };
        if getter.signature.explicit_arity() != 0 || getter.signature.ret.is_void() {
            continue;
        }

        let matched = candidates.iter().find(|setter| {
            match accessor_role(setter.declared) {
                Some((AccessorRole::Setter, setter_stem)) => {
                    setter_stem.eq_ignore_ascii_case(stem)
                        && setter.signature.explicit_arity() == 1
                        && setter
                            .signature
                            .explicit_parameters()
                            .first()
                            .is_some_and(|param| getter.signature.ret.matches_param(param))
                }
                _ => false,
            }
        });

        if let Some(setter) = matched {
            let name = naming::pascal_case(stem);
            // one pairing per property name
            if pairings.iter().all(|p: &PropertyPairing| p.name != name) {
                pairings.push(PropertyPairing {
                    name,
                    getter: getter.generated.to_string(),
                    setter: setter.generated.to_string(),
                });
            }
        }
    }

    pairings
}
