//! Scaffold task tree and its fail-fast runner
//!
//! A run is a small tree: one group per template fetch, owning the directory
//! creation and copy steps. Tasks execute depth-first in declaration order and
//! the first failure at any depth stops the whole run. Nothing is rolled back.

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::options::Bundler;
use crate::resolver::{CompleteConfig, RenderMode};
use crate::templates::{TemplateFetch, TemplateId, TemplateTable};
use colored::Colorize;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::pin::Pin;

/// Everything the orchestrator needs to know about a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub template: TemplateId,
    pub target: PathBuf,
    pub overwrite: bool,
    pub render_mode: RenderMode,
    pub bundler: Bundler,
}

impl ScaffoldPlan {
    /// Select the template for `config` and place the app under `base_dir`
    pub fn new(
        config: &CompleteConfig,
        table: &TemplateTable,
        base_dir: &Path,
    ) -> ScaffoldResult<Self> {
        let template = table.select(config.render_mode, config.bundler)?.clone();
        Ok(Self {
            template,
            target: base_dir.join(&config.app_name),
            overwrite: config.overwrite,
            render_mode: config.render_mode,
            bundler: config.bundler,
        })
    }
}

/// Effect performed by a leaf task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create a directory and any missing parents
    CreateDirectory(PathBuf),
    /// Copy a template into `dest` through the fetch tool
    Materialize {
        template: TemplateId,
        dest: PathBuf,
        overwrite: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Step { title: String, action: Action },
    Group { title: String, children: Vec<Task> },
}

impl Task {
    pub fn title(&self) -> &str {
        match self {
            Task::Step { title, .. } | Task::Group { title, .. } => title,
        }
    }
}

/// Build the task tree for a plan
pub fn build_tasks(plan: &ScaffoldPlan) -> Task {
    Task::Group {
        title: format!("Fetch {} template with {}", plan.render_mode, plan.bundler),
        children: vec![
            Task::Step {
                title: "Create app directory".to_string(),
                action: Action::CreateDirectory(plan.target.clone()),
            },
            Task::Step {
                title: "Copy template files".to_string(),
                action: Action::Materialize {
                    template: plan.template.clone(),
                    dest: plan.target.clone(),
                    overwrite: plan.overwrite,
                },
            },
        ],
    }
}

/// Receives progress events. Purely informational: it cannot change the outcome.
pub trait TaskReporter {
    fn started(&mut self, title: &str, depth: usize);
    fn completed(&mut self, title: &str, depth: usize);
    fn failed(&mut self, title: &str, depth: usize, error: &ScaffoldError);

    /// Diagnostic text produced by a step
    fn note(&mut self, _depth: usize, _text: &str) {}
}

/// Writes indented, colored progress lines to any writer
pub struct PlainReporter<W: Write> {
    out: W,
}

impl<W: Write> PlainReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, depth: usize, marker: colored::ColoredString, text: &str) {
        // Write errors are ignored; reporting is advisory
        let _ = writeln!(self.out, "{}{} {}", "  ".repeat(depth), marker, text);
    }
}

impl<W: Write> TaskReporter for PlainReporter<W> {
    fn started(&mut self, title: &str, depth: usize) {
        self.line(depth, "->".blue(), title);
    }

    fn completed(&mut self, title: &str, depth: usize) {
        self.line(depth, "done".green(), title);
    }

    fn failed(&mut self, title: &str, depth: usize, error: &ScaffoldError) {
        self.line(depth, "failed".red(), &format!("{}: {}", title, error));
    }

    fn note(&mut self, depth: usize, text: &str) {
        for line in text.lines() {
            self.line(depth + 1, "|".dimmed(), line);
        }
    }
}

/// Run a task tree, stopping at the first failure
pub async fn run_tasks<F, R>(task: &Task, fetcher: &F, reporter: &mut R) -> ScaffoldResult<()>
where
    F: TemplateFetch,
    R: TaskReporter,
{
    run_at(task, 0, fetcher, reporter).await
}

fn run_at<'a, F, R>(
    task: &'a Task,
    depth: usize,
    fetcher: &'a F,
    reporter: &'a mut R,
) -> Pin<Box<dyn Future<Output = ScaffoldResult<()>> + 'a>>
where
    F: TemplateFetch + 'a,
    R: TaskReporter + 'a,
{
    Box::pin(async move {
        reporter.started(task.title(), depth);

        let result = match task {
            Task::Step { action, .. } => execute(action, fetcher)
                .await
                .map(|output| {
                    if !output.is_empty() {
                        reporter.note(depth, &output);
                    }
                }),
            Task::Group { children, .. } => {
                let mut result = Ok(());
                for child in children {
                    if let Err(e) = run_at(child, depth + 1, fetcher, &mut *reporter).await {
                        result = Err(e);
                        break;
                    }
                }
                result
            }
        };

        match &result {
            Ok(()) => reporter.completed(task.title(), depth),
            Err(e) => reporter.failed(task.title(), depth, e),
        }
        result
    })
}

async fn execute<F: TemplateFetch>(action: &Action, fetcher: &F) -> ScaffoldResult<String> {
    match action {
        Action::CreateDirectory(path) => {
            tokio::fs::create_dir_all(path)
                .await
                .map_err(|source| ScaffoldError::DirectoryCreateFailed {
                    path: path.clone(),
                    source,
                })?;
            Ok(String::new())
        }
        Action::Materialize {
            template,
            dest,
            overwrite,
        } => {
            if !overwrite && has_entries(template, dest).await? {
                return Err(ScaffoldError::fetch_failed(
                    template.as_str(),
                    format!(
                        "destination {} is not empty (use --force to overwrite)",
                        dest.display()
                    ),
                ));
            }
            fetcher.fetch(template, dest, *overwrite).await
        }
    }
}

async fn has_entries(template: &TemplateId, dir: &Path) -> ScaffoldResult<bool> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(ScaffoldError::fetch_failed(
                template.as_str(),
                format!("cannot read {}: {}", dir.display(), e),
            ))
        }
    };
    entries
        .next_entry()
        .await
        .map(|entry| entry.is_some())
        .map_err(|e| ScaffoldError::fetch_failed(template.as_str(), e.to_string()))
}
