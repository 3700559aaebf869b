//! Command-line option intake
//!
//! Turns the raw argument vector into a [`PartialConfig`]. Any field the user
//! did not pass stays `None` so the resolver knows what to ask for.

use crate::error::{ScaffoldError, ScaffoldResult};
use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, FromArgMatches, Parser, ValueEnum};
use std::ffi::OsString;
use std::fmt;

/// Bundler used by the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Bundler {
    Rollup,
    Webpack,
}

impl Bundler {
    pub fn display_name(&self) -> &'static str {
        match self {
            Bundler::Rollup => "Rollup",
            Bundler::Webpack => "Webpack",
        }
    }
}

impl fmt::Display for Bundler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// CSS preprocessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Css {
    None,
    Scss,
}

impl fmt::Display for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Css::None => write!(f, "None"),
            Css::Scss => write!(f, "SCSS"),
        }
    }
}

/// UI framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Ui {
    None,
    #[value(alias = "tailwindcss")]
    Tailwind,
}

impl fmt::Display for Ui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ui::None => write!(f, "None"),
            Ui::Tailwind => write!(f, "Tailwind"),
        }
    }
}

/// Options collected from the command line, possibly incomplete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConfig {
    pub app_name: Option<String>,
    pub bundler: Option<Bundler>,
    pub ssr: Option<bool>,
    pub css: Option<Css>,
    pub ui: Option<Ui>,
    /// Set only by `--force`
    pub overwrite: bool,
}

/// Raw clap surface; converted into [`PartialConfig`] right away
#[derive(Parser, Debug)]
#[command(version)]
struct CliArgs {
    /// Name of the app (also the directory it is created in)
    app_name: Option<String>,

    /// Bundler to use
    #[arg(short, long, value_enum, ignore_case = true)]
    bundler: Option<Bundler>,

    /// Use server-side rendering (Sapper)
    #[arg(short, long)]
    ssr: bool,

    /// CSS preprocessor
    #[arg(short, long, value_enum, ignore_case = true)]
    css: Option<Css>,

    /// UI framework
    #[arg(short, long, value_enum, ignore_case = true)]
    ui: Option<Ui>,

    /// Overwrite the target directory if it is not empty
    #[arg(short, long)]
    force: bool,
}

impl From<CliArgs> for PartialConfig {
    fn from(args: CliArgs) -> Self {
        PartialConfig {
            // A blank positional counts as missing so the prompt asks for it
            app_name: args.app_name.filter(|name| !name.is_empty()),
            bundler: args.bundler,
            ssr: args.ssr.then_some(true),
            css: args.css,
            ui: args.ui,
            overwrite: args.force,
        }
    }
}

/// Parse an argument vector (program name first) into a [`PartialConfig`].
///
/// `name` and `about` customize the help output for the calling binary.
pub fn parse_options<I, T>(
    args: I,
    name: &'static str,
    about: &'static str,
) -> ScaffoldResult<PartialConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let command = CliArgs::command().name(name).bin_name(name).about(about);
    let matches = command.try_get_matches_from(args).map_err(from_clap_error)?;
    let args = CliArgs::from_arg_matches(&matches).map_err(from_clap_error)?;
    Ok(args.into())
}

fn from_clap_error(err: clap::Error) -> ScaffoldError {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            ScaffoldError::HelpRequested(err.render().to_string())
        }
        kind => {
            // Prefer the bad value itself, then the flag it belongs to
            let token = err
                .get(ContextKind::InvalidValue)
                .or_else(|| err.get(ContextKind::InvalidArg))
                .map(|value| value.to_string())
                .unwrap_or_default();
            let reason = kind
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| {
                    let rendered = err.to_string();
                    rendered.lines().next().unwrap_or_default().to_string()
                });
            ScaffoldError::InvalidArgument { token, reason }
        }
    }
}
