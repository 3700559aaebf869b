//! Interactive scaffolding flow using cliclack

use super::{ClackPrompter, ClackReporter};
use crate::error::ScaffoldError;
use crate::options::{self, PartialConfig};
use crate::product::ProductConfig;
use crate::resolver::{self, CompleteConfig};
use crate::runtime;
use crate::tasks::{self, ScaffoldPlan};
use crate::templates::DegitFetcher;
use anyhow::Result;
use std::ffi::OsString;
use std::path::Path;

/// Run the CLI: parse `args`, prompt for anything missing, then scaffold the
/// app under `base_dir`.
pub async fn run<C, I, T>(config: &C, args: I, base_dir: &Path) -> Result<()>
where
    C: ProductConfig,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // Step 1: Parse arguments (before any terminal output)
    let parsed = options::parse_options(args, config.name(), config.cli_description());
    let partial = match parsed {
        Ok(partial) => partial,
        Err(ScaffoldError::HelpRequested(text)) => {
            print!("{}", text);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    cliclack::intro(config.display_name())?;

    // Step 2: Resolve missing options interactively
    let complete = resolve_options(partial)?;
    cliclack::log::info(format!("Options: {}", complete))?;

    // Step 3: Select template
    let plan = ScaffoldPlan::new(&complete, &config.template_table(), base_dir)
        .map_err(cancel)?;
    cliclack::log::info(format!("Template: {}", plan.template))?;

    // Step 4: Setup fetcher and check it can run
    let fetcher = DegitFetcher::from_config(config).map_err(cancel)?;
    check_fetch_tool(&fetcher)?;

    // Step 5: Run tasks
    let task = tasks::build_tasks(&plan);
    let mut reporter = ClackReporter::new();
    tasks::run_tasks(&task, &fetcher, &mut reporter)
        .await
        .map_err(cancel)?;

    // Step 6: Show next steps
    print_next_steps(config, &plan.target, &complete)?;

    Ok(())
}

fn resolve_options(partial: PartialConfig) -> Result<CompleteConfig> {
    let mut prompter = ClackPrompter;
    let complete = resolver::resolve(partial, &mut prompter).map_err(cancel)?;
    Ok(complete)
}

/// Close the cliclack frame and hand the error back to the caller
fn cancel(err: ScaffoldError) -> anyhow::Error {
    let _ = cliclack::outro_cancel(format!("Scaffolding failed during {}", err.stage()));
    err.into()
}

fn check_fetch_tool(fetcher: &DegitFetcher) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Checking for {}...", fetcher.program()));

    let info = runtime::check_program(fetcher.program());
    spinner.stop(format!("Fetch tool: {}", info));

    if !info.available {
        cliclack::log::warning(format!(
            "'{}' did not respond; copying the template will likely fail",
            fetcher.command_line()
        ))?;
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    complete: &CompleteConfig,
) -> Result<()> {
    let steps = config.next_steps(project_dir, complete);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Docs: {}", config.docs_url()))?;

    Ok(())
}
