//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a scaffolding binary implements to
//! configure the shared flow for its own templates and messaging.

use crate::resolver::CompleteConfig;
use crate::templates::TemplateTable;
use std::path::Path;

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - The template table and fetch tool
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Binary name, used in help output
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Templates available for each render mode and bundler
    fn template_table(&self) -> TemplateTable;

    /// Command used to copy a template, before the template and destination arguments
    fn default_fetch_command(&self) -> &'static str {
        "npx degit"
    }

    /// Environment variable name for overriding the fetch command
    fn fetch_command_env(&self) -> &'static str;

    /// Environment variable name for an optional fetch timeout, in seconds
    fn fetch_timeout_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, config: &CompleteConfig) -> Vec<String>;
}
