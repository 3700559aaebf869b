//! Error types shared by every scaffolding stage

use crate::options::Bundler;
use crate::resolver::RenderMode;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that can occur while resolving options or running scaffold tasks.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// An unknown flag, extra positional or unparseable value was passed.
    #[error("Invalid argument '{token}': {reason}")]
    InvalidArgument { token: String, reason: String },

    /// `--help` or `--version` was requested; carries the rendered text.
    #[error("{0}")]
    HelpRequested(String),

    /// The app name prompt received an empty value.
    #[error("App name cannot be blank")]
    BlankInput,

    /// Interactive input could not be collected.
    #[error("Prompt aborted: {0}")]
    PromptAborted(String),

    /// No template is mapped for the resolved render mode and bundler.
    #[error("No template available for {render_mode} with {bundler}")]
    UnsupportedCombination {
        render_mode: RenderMode,
        bundler: Bundler,
    },

    /// The target directory could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The fetch tool failed or refused to write into the target.
    #[error("Failed to fetch template '{template}': {reason}")]
    FetchFailed { template: String, reason: String },

    /// An environment override holds a value that cannot be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScaffoldError {
    pub(crate) fn fetch_failed(template: impl Into<String>, reason: impl Into<String>) -> Self {
        ScaffoldError::FetchFailed {
            template: template.into(),
            reason: reason.into(),
        }
    }

    /// Short name of the stage that produced this error.
    pub fn stage(&self) -> &'static str {
        match self {
            ScaffoldError::InvalidArgument { .. } | ScaffoldError::HelpRequested(_) => {
                "argument parsing"
            }
            ScaffoldError::BlankInput | ScaffoldError::PromptAborted(_) => "prompting",
            ScaffoldError::UnsupportedCombination { .. } => "template selection",
            ScaffoldError::DirectoryCreateFailed { .. } => "directory creation",
            ScaffoldError::FetchFailed { .. } => "template fetch",
            ScaffoldError::InvalidConfig(_) => "configuration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_combination_names_both_inputs() {
        let err = ScaffoldError::UnsupportedCombination {
            render_mode: RenderMode::ServerRendered,
            bundler: Bundler::Webpack,
        };
        let message = err.to_string();
        assert!(message.contains("Sapper"));
        assert!(message.contains("Webpack"));
        assert_eq!(err.stage(), "template selection");
    }

    #[test]
    fn test_directory_error_mentions_path() {
        let err = ScaffoldError::DirectoryCreateFailed {
            path: PathBuf::from("/tmp/shop"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/tmp/shop"));
    }
}
