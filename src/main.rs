// Wed Feb 18 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use cpp_wrapper_planner::{
    config::PatternRuleConfig,
    descriptor::BindingDocument,
    plan::serializer,
    planner::PlanningSession,
    registry::{PatternRule, TypeDisposition},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "C++ wrapper binding planner", long_about = None)]
struct Args {
    /// Extracted class-hierarchy document (JSON)
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long, default_value = "binding_plan.json")]
    output: PathBuf,

    /// Write a human-readable run summary next to the plan
    #[arg(long)]
    summary: Option<PathBuf>,

    /// JSON file with extra pattern rules for types the document omits
    #[arg(long)]
    rules: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    parallel: bool,

    #[arg(long, default_value_t = 0)]
    threads: usize,

    #[arg(long)]
    no_progress: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    println!("{}", "C++ Wrapper Binding Planner".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let start_time = Instant::now();

    println!("{} Loading document: {}", "[*]".blue(), args.input.display());
    let document = BindingDocument::load(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    println!(
        "{} {} classes, {} members",
        "[+]".green(),
        document.len(),
        document.total_members()
    );

    let rules = match &args.rules {
        Some(path) => load_rules(path)?,
        None => Vec::new(),
    };
    if !rules.is_empty() {
        println!("{} {} pattern rules loaded", "[+]".green(), rules.len());
    }

    let class_count = document.len() as u64;
    let session = PlanningSession::new(document).with_rules(rules);

    let plan = if args.parallel {
        println!("{} Planning in parallel", "[*]".blue());
        session.plan_all_parallel(args.threads)
    } else if args.no_progress {
        session.plan_all()
    } else {
        let bar = ProgressBar::new(class_count);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        let plan = session.plan_all_with(|name| {
            bar.set_message(name.to_string());
            bar.inc(1);
        });
        bar.finish_with_message("done");
        plan
    };

    println!(
        "{} Planned {} classes, {} thunks, {} vtable slots in {:.2}s",
        "[+]".green(),
        plan.len(),
        plan.total_thunks(),
        plan.total_vtable_slots(),
        start_time.elapsed().as_secs_f64()
    );

    if !plan.diagnostics.is_clean() {
        println!("{} Degraded: {}", "[!]".yellow(), plan.diagnostics);
    }

    serializer::write_json(&plan, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("{} Plan written to {}", "[+]".green(), args.output.display());

    if let Some(summary_path) = &args.summary {
        fs::write(summary_path, serializer::render_summary(&plan))
            .with_context(|| format!("failed to write {}", summary_path.display()))?;
        println!("{} Summary written to {}", "[+]".green(), summary_path.display());
    }

    Ok(())
}

fn load_rules(path: &PathBuf) -> anyhow::Result<Vec<PatternRule>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let configs: Vec<PatternRuleConfig> =
        serde_json::from_str(&text).with_context(|| format!("bad rules in {}", path.display()))?;

    let mut rules = Vec::with_capacity(configs.len());
    for config in configs {
        let disposition = if config.unmanaged {
            TypeDisposition::Unmanaged
        } else {
            TypeDisposition::Wrapped
        };
        rules.push(
            PatternRule::new(&config.pattern, disposition, config.wrapper_name.clone())
                .with_context(|| format!("bad pattern rule {}", config.pattern))?,
        );
    }
    Ok(rules)
}
