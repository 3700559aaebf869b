//! cliclack-backed task progress

use crate::error::ScaffoldError;
use crate::tasks::TaskReporter;

/// Shows top-level tasks as log steps and nested tasks as spinners
#[derive(Default)]
pub struct ClackReporter {
    spinner: Option<cliclack::ProgressBar>,
    // Held until the spinner stops so the remark is not drawn over it
    pending_note: Option<String>,
}

impl ClackReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn stop_spinner(&mut self, message: String) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(message);
        }
        if let Some(note) = self.pending_note.take() {
            let _ = cliclack::log::remark(note);
        }
    }
}

// Terminal write failures are ignored throughout; progress output never
// decides the outcome of a run.
impl TaskReporter for ClackReporter {
    fn started(&mut self, title: &str, depth: usize) {
        if depth == 0 {
            let _ = cliclack::log::step(title);
            return;
        }
        self.stop_spinner(String::new());
        let spinner = cliclack::spinner();
        spinner.start(format!("{}...", title));
        self.spinner = Some(spinner);
    }

    fn completed(&mut self, title: &str, depth: usize) {
        if depth == 0 {
            let _ = cliclack::log::success(title);
        } else {
            self.stop_spinner(title.to_string());
        }
    }

    fn failed(&mut self, title: &str, depth: usize, error: &ScaffoldError) {
        if depth == 0 {
            let _ = cliclack::log::error(format!("{} failed", title));
        } else {
            if let Some(spinner) = self.spinner.take() {
                spinner.error(format!("{} failed", title));
            }
            if let Some(note) = self.pending_note.take() {
                let _ = cliclack::log::remark(note);
            }
            let _ = cliclack::log::error(error.to_string());
        }
    }

    fn note(&mut self, _depth: usize, text: &str) {
        if self.spinner.is_some() {
            self.pending_note = Some(text.to_string());
        } else {
            let _ = cliclack::log::remark(text);
        }
    }
}
