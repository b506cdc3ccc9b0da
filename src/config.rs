// Wed Feb 18 2026 - Alex

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run configuration for a planning pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input_document: PathBuf,
    pub output_plan: PathBuf,
    pub summary_output: Option<PathBuf>,
    pub parallel: bool,
    pub max_threads: usize,
    pub enable_verbose_output: bool,
    pub enable_progress_bars: bool,
    /// Ordered structured matchers applied to qualified native names the
    /// document does not describe.
    pub pattern_rules: Vec<PatternRuleConfig>,
}

/// Serialized form of one pattern rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRuleConfig {
    pub pattern: String,
    #[serde(default)]
    pub unmanaged: bool,
    #[serde(default)]
    pub wrapper_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_document: PathBuf::from("classes.json"),
            output_plan: PathBuf::from("binding_plan.json"),
            summary_output: None,
            parallel: false,
            max_threads: num_cpus::get(),
            enable_verbose_output: false,
            enable_progress_bars: true,
            pattern_rules: Vec::new(),
        }
    }
}

impl Config {
    pub fn thread_count(&self) -> usize {
        if self.max_threads == 0 {
            num_cpus::get()
        } else {
            self.max_threads
        }
    }
}
