//! Template materialization through an external fetch tool
//!
//! The default tool is `npx degit`, run as a subprocess. The command and an
//! optional timeout can be overridden through environment variables named by
//! the product config.

use super::table::TemplateId;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::product::ProductConfig;
use std::future::Future;
use std::env::VarError;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Capability to copy a template into a destination directory.
///
/// Returns the tool's diagnostic output on success.
pub trait TemplateFetch {
    fn fetch(
        &self,
        template: &TemplateId,
        dest: &Path,
        overwrite: bool,
    ) -> impl Future<Output = ScaffoldResult<String>>;
}

/// Runs `<program> <args..> <template> <dest> [--force]`
#[derive(Debug, Clone)]
pub struct DegitFetcher {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl DegitFetcher {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout: None,
        }
    }

    /// Parse a whitespace-separated command line such as `npx degit`
    pub fn from_command_line(command: &str) -> ScaffoldResult<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| {
            ScaffoldError::InvalidConfig("template fetch command is empty".to_string())
        })?;
        Ok(Self::new(program, parts))
    }

    /// Create a fetcher from a product config, honoring its env overrides
    pub fn from_config<C: ProductConfig>(config: &C) -> ScaffoldResult<Self> {
        let command = env_override(config.fetch_command_env())?
            .unwrap_or_else(|| config.default_fetch_command().to_string());
        let fetcher = Self::from_command_line(&command)?;

        match env_override(config.fetch_timeout_env())? {
            Some(secs) => Ok(fetcher.with_timeout(Some(parse_timeout(
                config.fetch_timeout_env(),
                &secs,
            )?))),
            None => Ok(fetcher),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Program the fetcher runs
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full command line for display
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    async fn run(
        &self,
        template: &TemplateId,
        dest: &Path,
        overwrite: bool,
    ) -> ScaffoldResult<String> {
        let mut command = TokioCommand::new(&self.program);
        command
            .args(&self.args)
            .arg(template.as_str())
            .arg(dest)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if overwrite {
            command.arg("--force");
        }

        let child = command.spawn().map_err(|e| {
            ScaffoldError::fetch_failed(
                template.as_str(),
                format!("could not start '{}': {}", self.command_line(), e),
            )
        })?;

        let output = match self.timeout {
            // Dropping the future on timeout kills the child
            Some(limit) => timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| {
                    ScaffoldError::fetch_failed(
                        template.as_str(),
                        format!("timed out after {} seconds", limit.as_secs_f32()),
                    )
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| ScaffoldError::fetch_failed(template.as_str(), e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            let detail = if stderr.is_empty() { stdout } else { stderr };
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Err(ScaffoldError::fetch_failed(
                template.as_str(),
                format!("'{}' exited with {}: {}", self.command_line(), code, detail),
            ));
        }

        Ok([stdout, stderr]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

impl TemplateFetch for DegitFetcher {
    async fn fetch(
        &self,
        template: &TemplateId,
        dest: &Path,
        overwrite: bool,
    ) -> ScaffoldResult<String> {
        self.run(template, dest, overwrite).await
    }
}

/// Read an override variable; unset is `None`, a non-UTF-8 value is an error
fn env_override(var: &str) -> ScaffoldResult<Option<String>> {
    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ScaffoldError::InvalidConfig(format!(
            "{var} is not valid UTF-8"
        ))),
    }
}

fn parse_timeout(var: &str, value: &str) -> ScaffoldResult<Duration> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| {
            ScaffoldError::InvalidConfig(format!(
                "{var} must be a positive number of seconds, got '{value}'"
            ))
        })
}
