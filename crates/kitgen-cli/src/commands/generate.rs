//! Implementation of the `kitgen <INPUT>` command.
//!
//! Responsibility: merge flags with settings, call the core scaffold service,
//! and display results. No generation logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use kitgen_adapters::LocalFilesystem;
use kitgen_core::application::{GenerationPlan, ScaffoldService};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Machine-readable summary for `--output-format json`.
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    dry_run: bool,
    service: &'a str,
    model: &'a str,
    root: &'a Path,
    files: Vec<PathBuf>,
}

impl<'a> RunSummary<'a> {
    fn new(plan: &'a GenerationPlan, dry_run: bool, files: Vec<PathBuf>) -> Self {
        Self {
            dry_run,
            service: plan.config.service_name(),
            model: plan.config.model_name(),
            root: &plan.root,
            files,
        }
    }
}

/// Execute the generation command.
///
/// 1. Resolve the output root and generation options
/// 2. Load and parse the service description
/// 3. Emit every artifact in memory
/// 4. Early-exit if `--dry-run`
/// 5. Write the artifacts, ticking a progress bar per file
#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    if args.input.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!(
                "{} is a directory, expected a service description file",
                args.input.display()
            ),
        });
    }

    // 1. Flags over settings over defaults
    let output_root = config.output_root(&args);
    let options = config.generation_options(&args);
    debug!(
        output_root = %output_root.display(),
        identifier_policy = %options.identifier_policy,
        identifier_field = %options.identifier_field,
        listen_port = options.listen_port,
        "Options resolved"
    );

    // 2-3. Load and plan
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let description = service.load(&args.input)?;
    let plan = service.plan(description, &options, &output_root)?;

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        let files: Vec<PathBuf> = plan.target_paths().collect();
        output.header(&format!(
            "Dry run: would write {} files for '{}' under {}",
            files.len(),
            plan.config.service_name(),
            plan.root.display(),
        ))?;
        for file in &files {
            output.print(&format!("  {}", file.display()))?;
        }
        output.json(&RunSummary::new(&plan, true, files))?;
        return Ok(());
    }

    // 5. Write
    output.header(&format!(
        "Generating '{}' (model {})...",
        plan.config.service_name(),
        plan.config.model_name(),
    ))?;

    let progress = output.progress(plan.len());
    let result = service.materialize_with(&plan, |path| {
        let relative = path.strip_prefix(&plan.root).unwrap_or(path);
        progress.set_message(relative.display().to_string());
        progress.inc(1);
    });
    progress.finish_and_clear();
    let report = result?;

    info!(
        root = %report.root.display(),
        files = report.written.len(),
        "Service generated"
    );

    output.success(&format!(
        "Wrote {} files to {}",
        report.written.len(),
        report.root.display()
    ))?;
    for stub in plan.artifacts.iter().filter(|a| a.kind.is_placeholder()) {
        output.warning(&format!(
            "{} is a placeholder {}; fill it in before running the service",
            stub.path, stub.kind
        ))?;
    }
    if global.verbose > 0 {
        for file in &report.written {
            output.print(&format!("  {}", file.display()))?;
        }
    }
    output.json(&RunSummary::new(&plan, false, report.written))?;

    Ok(())
}
