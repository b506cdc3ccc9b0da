// Wed Feb 18 2026 - Alex

use crate::plan::binding_plan::BindingPlan;
use itertools::Itertools;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the finished plan as pretty JSON, the handoff artifact for the
/// emitter backend.
pub fn write_json(plan: &BindingPlan, path: &Path) -> Result<(), std::io::Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, plan)?;
    writer.flush()?;
    Ok(())
}

/// Human-readable run summary, one class per line plus the degradation
/// record.
pub fn render_summary(plan: &BindingPlan) -> String {
    let mut out = String::new();
    out.push_str(&format!("binding plan: {}\n\n", plan));

    for class in plan.classes.values() {
        out.push_str(&format!("{}\n", class));
        if class.has_vtable() {
            out.push_str(&format!(
                "  vtable @ +0x{:x}: {} slots ({} typed)\n",
                class.vtable.anchor,
                class.vtable.slot_count(),
                class.vtable.typed_count()
            ));
        }
        if !class.properties.is_empty() {
            let names = class.properties.iter().map(|p| p.name.as_str()).join(", ");
            out.push_str(&format!("  properties: {}\n", names));
        }
    }

    if !plan.diagnostics.skipped.is_empty() {
        out.push_str("\nskipped members:\n");
        for skip in &plan.diagnostics.skipped {
            out.push_str(&format!("  {}::{} - {}\n", skip.class_name, skip.member, skip.reason));
        }
    }
    if !plan.diagnostics.placeholder_slots.is_empty() {
        out.push_str("\nplaceholder slots:\n");
        for slot in &plan.diagnostics.placeholder_slots {
            out.push_str(&format!(
                "  {} slot {} ({}) - {}\n",
                slot.class_name, slot.slot, slot.member, slot.reason
            ));
        }
    }
    if !plan.diagnostics.random_suffixes.is_empty() {
        out.push_str("\nunstable generated names:\n");
        for suffix in &plan.diagnostics.random_suffixes {
            out.push_str(&format!(
                "  {}::{} -> {}\n",
                suffix.class_name, suffix.member, suffix.generated_name
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_mentions_diagnostics() {
        let mut plan = BindingPlan::new();
        plan.diagnostics.record_skip("Foo", "bar", "parse failed");
        let summary = render_summary(&plan);
        assert!(summary.contains("skipped members"));
        assert!(summary.contains("Foo::bar"));
    }
}
