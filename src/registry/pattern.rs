// Wed Feb 11 2026 - Alex

use crate::registry::descriptor::{TypeDisposition, WrapperDescriptor};
use crate::registry::error::RegistryError;
use regex::Regex;

/// One structured matcher over qualified native names. Rules are supplied
/// at session construction and tried in order; the first match wins.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    disposition: TypeDisposition,
    wrapper_name: Option<String>,
}

impl PatternRule {
    pub fn new(
        pattern: &str,
        disposition: TypeDisposition,
        wrapper_name: Option<String>,
    ) -> Result<Self, RegistryError> {
        let compiled = Regex::new(pattern).map_err(|e| RegistryError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { pattern: compiled, disposition, wrapper_name })
    }

    pub fn unmanaged(pattern: &str) -> Result<Self, RegistryError> {
        Self::new(pattern, TypeDisposition::Unmanaged, None)
    }

    pub fn matches(&self, qualified_name: &str) -> bool {
        self.pattern.is_match(qualified_name)
    }

    /// Build the descriptor this rule assigns to a matching name.
    pub fn describe(&self, qualified_name: &str) -> WrapperDescriptor {
        WrapperDescriptor {
            native_name: qualified_name.to_string(),
            wrapper_name: self
                .wrapper_name
                .clone()
                .unwrap_or_else(|| qualified_name.to_string()),
            disposition: self.disposition,
            byte_size: None,
        }
    }
}

/// Try rules in order against one qualified name.
pub fn match_rules<'a>(
    rules: &'a [PatternRule],
    qualified_name: &str,
) -> Option<&'a PatternRule> {
    rules.iter().find(|rule| rule.matches(qualified_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_wins() {
        let rules = vec![
            PatternRule::unmanaged(r"^std::atomic<").unwrap(),
            PatternRule::new(r"^std::", TypeDisposition::Wrapped, None).unwrap(),
        ];
        let hit = match_rules(&rules, "std::atomic<int>").unwrap();
        assert!(hit.describe("std::atomic<int>").is_unmanaged());
        let hit = match_rules(&rules, "std::string").unwrap();
        assert!(hit.describe("std::string").is_wrapped());
        assert!(match_rules(&rules, "rbx::Instance").is_none());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        assert!(matches!(
            PatternRule::unmanaged("(unclosed"),
            Err(RegistryError::InvalidPattern { .. })
        ));
    }
}
