// Mon Feb 16 2026 - Alex

use crate::descriptor::MemberItem;
use ahash::AHashSet;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strip a raw text down to an identifier-safe fragment.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
        } else if !out.ends_with('_') && !out.is_empty() {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_').to_string();
    if trimmed.is_empty() {
        return "arg".to_string();
    }
    if trimmed.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return format!("_{}", trimmed);
    }
    trimmed
}

/// Generated wrapper methods are PascalCase versions of the declared name.
pub fn pascal_case(name: &str) -> String {
    let sanitized = sanitize(name);
    sanitized
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Suffix derived from the parameter list, used to split name collisions.
/// Declared parameter names win when the snapshot knew them; otherwise the
/// sanitized type texts stand in. No parameters means no suffix.
pub fn parameter_suffix(item: &MemberItem) -> Option<String> {
    if item.parameters.is_empty() {
        return None;
    }
    let suffix = item
        .parameters
        .iter()
        .enumerate()
        .map(|(index, type_text)| {
            item.parameter_name(index)
                .map(sanitize)
                .unwrap_or_else(|| sanitize(type_text))
        })
        .join("_");
    Some(suffix)
}

/// Outcome of one name allocation.
#[derive(Debug, Clone)]
pub struct AllocatedName {
    pub name: String,
    /// True when the unseeded random fallback fired; generated names are
    /// then unstable across runs, so callers record it in diagnostics.
    pub used_random_suffix: bool,
}

/// Tracks names already handed out within one class and disambiguates
/// collisions. Each allocator owns its own unseeded generator, so fallback
/// suffixes are unstable across runs; callers surface every use.
pub struct NameAllocator {
    used: AHashSet<String>,
    rng: StdRng,
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameAllocator {
    pub fn new() -> Self {
        Self { used: AHashSet::new(), rng: StdRng::from_entropy() }
    }

    pub fn allocate(&mut self, base: &str, item: &MemberItem) -> AllocatedName {
        if self.used.insert(base.to_string()) {
            return AllocatedName { name: base.to_string(), used_random_suffix: false };
        }

        if let Some(suffix) = parameter_suffix(item) {
            let candidate = format!("{}_{}", base, suffix);
            if self.used.insert(candidate.clone()) {
                return AllocatedName { name: candidate, used_random_suffix: false };
            }
        }

        loop {
            let candidate = format!("{}_{}", base, self.rng.gen::<u32>());
            if self.used.insert(candidate.clone()) {
                return AllocatedName { name: candidate, used_random_suffix: true };
            }
        }
    }
}
