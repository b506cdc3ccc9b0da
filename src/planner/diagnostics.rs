// Mon Feb 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// One member that failed planning and was skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedMember {
    pub class_name: String,
    pub member: String,
    pub reason: String,
}

/// One vtable slot that degraded to an untyped placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderSlot {
    pub class_name: String,
    pub slot: usize,
    pub member: String,
    pub reason: String,
}

/// One generated name that needed the random fallback suffix. These names
/// are unstable across runs and are surfaced so output stays auditable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomSuffix {
    pub class_name: String,
    pub member: String,
    pub generated_name: String,
}

/// The accumulated, inspectable record of everything planning degraded on.
/// Local skips never abort a class; this is where they land instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    pub skipped: Vec<SkippedMember>,
    pub placeholder_slots: Vec<PlaceholderSlot>,
    pub random_suffixes: Vec<RandomSuffix>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_skip(&mut self, class_name: &str, member: &str, reason: impl fmt::Display) {
        self.skipped.push(SkippedMember {
            class_name: class_name.to_string(),
            member: member.to_string(),
            reason: reason.to_string(),
        });
    }

    pub fn record_placeholder(
        &mut self,
        class_name: &str,
        slot: usize,
        member: &str,
        reason: impl fmt::Display,
    ) {
        self.placeholder_slots.push(PlaceholderSlot {
            class_name: class_name.to_string(),
            slot,
            member: member.to_string(),
            reason: reason.to_string(),
        });
    }

    pub fn record_random_suffix(&mut self, class_name: &str, member: &str, generated_name: &str) {
        self.random_suffixes.push(RandomSuffix {
            class_name: class_name.to_string(),
            member: member.to_string(),
            generated_name: generated_name.to_string(),
        });
    }

    pub fn merge(&mut self, other: Diagnostics) {
        self.skipped.extend(other.skipped);
        self.placeholder_slots.extend(other.placeholder_slots);
        self.random_suffixes.extend(other.random_suffixes);
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
            && self.placeholder_slots.is_empty()
            && self.random_suffixes.is_empty()
    }

    pub fn total(&self) -> usize {
        self.skipped.len() + self.placeholder_slots.len() + self.random_suffixes.len()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} skipped, {} placeholder slots, {} random suffixes",
            self.skipped.len(),
            self.placeholder_slots.len(),
            self.random_suffixes.len()
        )
    }
}
