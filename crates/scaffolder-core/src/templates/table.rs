//! Template lookup by render mode and bundler

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::options::Bundler;
use crate::resolver::RenderMode;
use std::fmt;

/// Opaque reference to a remote template (a degit source)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed mapping from `(render mode, bundler)` to a template.
///
/// Pairs that are not listed are unsupported; lookups never fall back to a
/// default.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    entries: Vec<((RenderMode, Bundler), TemplateId)>,
}

impl TemplateTable {
    /// Build a table from explicit entries. Later duplicates are ignored.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (RenderMode, Bundler, S)>,
        S: Into<String>,
    {
        let mut table = Self {
            entries: Vec::new(),
        };
        for (mode, bundler, id) in entries {
            if table.lookup(mode, bundler).is_none() {
                table.entries.push(((mode, bundler), TemplateId::new(id)));
            }
        }
        table
    }

    /// The official Svelte and Sapper starter templates
    pub fn svelte() -> Self {
        Self::new([
            (RenderMode::Standard, Bundler::Rollup, "sveltejs/template"),
            (
                RenderMode::Standard,
                Bundler::Webpack,
                "sveltejs/template-webpack",
            ),
            (
                RenderMode::ServerRendered,
                Bundler::Rollup,
                "sveltejs/sapper-template#rollup",
            ),
            (
                RenderMode::ServerRendered,
                Bundler::Webpack,
                "sveltejs/sapper-template#webpack",
            ),
        ])
    }

    fn lookup(&self, mode: RenderMode, bundler: Bundler) -> Option<&TemplateId> {
        self.entries
            .iter()
            .find(|((m, b), _)| *m == mode && *b == bundler)
            .map(|(_, id)| id)
    }

    /// Select the template for a render mode and bundler
    pub fn select(&self, mode: RenderMode, bundler: Bundler) -> ScaffoldResult<&TemplateId> {
        self.lookup(mode, bundler)
            .ok_or(ScaffoldError::UnsupportedCombination {
                render_mode: mode,
                bundler,
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TemplateTable {
    fn default() -> Self {
        Self::svelte()
    }
}
