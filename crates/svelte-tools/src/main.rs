//! Svelte CLI - Project scaffolding for Svelte and Sapper apps

use anyhow::Result;
use scaffolder_core::{CompleteConfig, Css, ProductConfig, TemplateTable, Ui};
use std::path::{Path, PathBuf};

/// Svelte product configuration
#[derive(Clone)]
pub struct SvelteConfig;

impl ProductConfig for SvelteConfig {
    fn name(&self) -> &'static str {
        "create-svelte-app"
    }

    fn display_name(&self) -> &'static str {
        "Svelte"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding Svelte and Sapper projects"
    }

    fn template_table(&self) -> TemplateTable {
        TemplateTable::svelte()
    }

    fn fetch_command_env(&self) -> &'static str {
        "SVELTE_DEGIT_COMMAND"
    }

    fn fetch_timeout_env(&self) -> &'static str {
        "SVELTE_FETCH_TIMEOUT"
    }

    fn docs_url(&self) -> &'static str {
        "https://svelte.dev/docs"
    }

    fn next_steps(&self, dir: &Path, config: &CompleteConfig) -> Vec<String> {
        // Step 1: cd into the new app; it is always a fresh subdirectory
        let mut steps = vec![format!("cd {}", dir.display())];

        // Step 2: Install dependencies
        steps.push("npm install".to_string());

        // Step 3: Optional styling setup
        if config.css == Css::Scss {
            steps.push(
                "Add SCSS support:\n\
                      npm install -D svelte-preprocess sass\n\
                      then enable svelte-preprocess in your bundler config"
                    .to_string(),
            );
        }
        if config.ui == Ui::Tailwind {
            steps.push("npx svelte-add tailwindcss".to_string());
        }

        // Step 4: Start dev server
        steps.push("npm run dev".to_string());

        steps
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = SvelteConfig;
    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let result = scaffolder_core::run(&config, std::env::args_os(), &base_dir).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffolder_core::{Bundler, RenderMode};

    fn complete(css: Css, ui: Ui) -> CompleteConfig {
        CompleteConfig {
            app_name: "shop".to_string(),
            bundler: Bundler::Rollup,
            render_mode: RenderMode::Standard,
            css,
            ui,
            overwrite: false,
        }
    }

    #[test]
    fn test_next_steps_plain_project() {
        let steps =
            SvelteConfig.next_steps(Path::new("/nowhere/shop"), &complete(Css::None, Ui::None));
        assert_eq!(
            steps,
            vec![
                "cd /nowhere/shop".to_string(),
                "npm install".to_string(),
                "npm run dev".to_string(),
            ]
        );
    }

    #[test]
    fn test_next_steps_always_start_with_cd() {
        let dir = std::env::current_dir().unwrap();
        let steps = SvelteConfig.next_steps(&dir, &complete(Css::None, Ui::None));
        assert_eq!(steps[0], format!("cd {}", dir.display()));
    }

    #[test]
    fn test_next_steps_with_scss_and_tailwind() {
        let steps = SvelteConfig.next_steps(
            Path::new("/nowhere/shop"),
            &complete(Css::Scss, Ui::Tailwind),
        );
        assert_eq!(steps.len(), 5);
        assert!(steps[2].contains("svelte-preprocess"));
        assert_eq!(steps[3], "npx svelte-add tailwindcss");
        assert_eq!(steps.last().map(String::as_str), Some("npm run dev"));
    }

    #[test]
    fn test_template_table_covers_all_pairs() {
        let table = SvelteConfig.template_table();
        assert_eq!(table.len(), 4);
        assert!(table
            .select(RenderMode::ServerRendered, Bundler::Webpack)
            .is_ok());
    }
}
