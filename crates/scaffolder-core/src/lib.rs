//! Scaffolder Core - Shared library for project scaffolding CLIs
//!
//! This library resolves scaffold options and runs the scaffold itself. It is
//! designed to be used by CLI binaries that share the same flow but bring their
//! own product configuration.
//!
//! # Architecture
//!
//! Data flows in one direction:
//!
//! raw args → [`PartialConfig`] → [`CompleteConfig`] → [`TemplateId`] → [`Task`] tree
//!
//! - **Option intake** ([`options`]) - clap-based parsing into a partial configuration
//! - **Resolver** ([`resolver`], [`prompt`]) - prompts only for what is missing
//! - **Template selection** ([`templates`]) - fixed `(render mode, bundler)` table
//! - **Orchestration** ([`tasks`]) - depth-first, fail-fast task runner
//! - **CLI/TUI interface** - optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts, reporter and [`run`]
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{resolve, tasks, PlainReporter, ScaffoldPlan, TemplateTable};
//!
//! let partial = scaffolder_core::parse_options(std::env::args_os(), "myapp", "about")?;
//! let complete = resolve(partial, &mut my_prompter)?;
//! let plan = ScaffoldPlan::new(&complete, &TemplateTable::svelte(), &cwd)?;
//! let mut reporter = PlainReporter::new(std::io::stdout());
//! tasks::run_tasks(&tasks::build_tasks(&plan), &fetcher, &mut reporter).await?;
//! ```

pub mod error;
pub mod options;
pub mod product;
pub mod prompt;
pub mod resolver;
pub mod runtime;
pub mod tasks;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{ScaffoldError, ScaffoldResult};
pub use options::{parse_options, Bundler, Css, PartialConfig, Ui};
pub use product::ProductConfig;
pub use prompt::{Answer, Answers, Field, Prompter, Question, QuestionKind};
pub use resolver::{resolve, CompleteConfig, RenderMode};
pub use runtime::{check_program, RuntimeInfo};
pub use tasks::{build_tasks, run_tasks, PlainReporter, ScaffoldPlan, Task, TaskReporter};
pub use templates::{DegitFetcher, TemplateFetch, TemplateId, TemplateTable};

#[cfg(feature = "tui")]
pub use tui::run;
