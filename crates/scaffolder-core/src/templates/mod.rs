//! Template selection and materialization
//!
//! This module provides:
//! - The fixed `(render mode, bundler)` → template table
//! - The fetch capability used to copy a template into the target directory

pub mod fetcher;
pub mod table;

pub use fetcher::{DegitFetcher, TemplateFetch};
pub use table::{TemplateId, TemplateTable};
