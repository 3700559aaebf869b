//! Interactive resolution of a partial configuration
//!
//! Asks only for the fields the command line left out, in a fixed order, and
//! overlays the answers onto what was already given.

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::options::{Bundler, Css, PartialConfig, Ui};
use crate::prompt::{Answer, Answers, Choice, Field, Prompter, Question, QuestionKind};
use clap::ValueEnum;
use std::fmt;

/// Rendering mode of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Plain client-side Svelte
    Standard,
    /// Server-rendered via Sapper
    ServerRendered,
}

impl RenderMode {
    /// User-facing name: the framework that implements the mode, so
    /// `Standard` shows as "Svelte" and `ServerRendered` as "Sapper"
    pub fn display_name(&self) -> &'static str {
        match self {
            RenderMode::Standard => "Svelte",
            RenderMode::ServerRendered => "Sapper",
        }
    }
}

impl From<bool> for RenderMode {
    fn from(ssr: bool) -> Self {
        if ssr {
            RenderMode::ServerRendered
        } else {
            RenderMode::Standard
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Fully resolved configuration; read-only for the rest of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteConfig {
    pub app_name: String,
    pub bundler: Bundler,
    pub render_mode: RenderMode,
    pub css: Css,
    pub ui: Ui,
    pub overwrite: bool,
}

impl fmt::Display for CompleteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} + {}, CSS: {}, UI: {}{})",
            self.app_name,
            self.render_mode,
            self.bundler,
            self.css,
            self.ui,
            if self.overwrite { ", overwrite" } else { "" }
        )
    }
}

/// Rejects empty app names
pub fn validate_app_name(name: &str) -> ScaffoldResult<()> {
    if name.is_empty() {
        return Err(ScaffoldError::BlankInput);
    }
    Ok(())
}

/// Questions for every field `partial` leaves unset, in prompt order
pub fn questions_for(partial: &PartialConfig) -> Vec<Question> {
    let mut questions = Vec::new();

    if given_app_name(partial).is_none() {
        questions.push(Question {
            field: Field::AppName,
            message: "Enter a name for your app",
            kind: QuestionKind::Input {
                validate: validate_app_name,
            },
        });
    }

    if partial.bundler.is_none() {
        questions.push(Question {
            field: Field::Bundler,
            message: "Choose bundler",
            kind: QuestionKind::Select {
                choices: Choice::all::<Bundler>(),
                default: Choice::value_of(&Bundler::Rollup),
            },
        });
    }

    if partial.ssr.is_none() {
        questions.push(Question {
            field: Field::Ssr,
            message: "Would you like to use SSR (Sapper)?",
            kind: QuestionKind::Confirm { default: false },
        });
    }

    if partial.css.is_none() {
        questions.push(Question {
            field: Field::Css,
            message: "Choose CSS preprocessor",
            kind: QuestionKind::Select {
                choices: Choice::all::<Css>(),
                default: Choice::value_of(&Css::None),
            },
        });
    }

    if partial.ui.is_none() {
        questions.push(Question {
            field: Field::Ui,
            message: "Choose UI framework",
            kind: QuestionKind::Select {
                choices: Choice::all::<Ui>(),
                default: Choice::value_of(&Ui::None),
            },
        });
    }

    questions
}

/// Prompt for whatever `partial` is missing and merge the answers in.
pub fn resolve<P: Prompter>(
    partial: PartialConfig,
    prompter: &mut P,
) -> ScaffoldResult<CompleteConfig> {
    let questions = questions_for(&partial);
    if questions.is_empty() {
        return merge(partial, Answers::new());
    }

    let mut answers = prompter.prompt(&questions)?;

    // Re-ask free-text questions until their validator passes
    for question in &questions {
        let QuestionKind::Input { validate } = &question.kind else {
            continue;
        };
        loop {
            match answers.get(&question.field) {
                Some(Answer::Text(text)) if validate(text).is_ok() => break,
                Some(Answer::Text(_)) => {
                    let retry = prompter.prompt(std::slice::from_ref(question))?;
                    answers.extend(retry);
                }
                _ => {
                    return Err(ScaffoldError::PromptAborted(format!(
                        "no answer for {}",
                        question.field
                    )))
                }
            }
        }
    }

    merge(partial, answers)
}

fn given_app_name(partial: &PartialConfig) -> Option<&str> {
    partial.app_name.as_deref().filter(|name| !name.is_empty())
}

fn merge(partial: PartialConfig, mut answers: Answers) -> ScaffoldResult<CompleteConfig> {
    let app_name = match given_app_name(&partial) {
        Some(name) => name.to_string(),
        None => take_text(&mut answers, Field::AppName)?,
    };
    let bundler = match partial.bundler {
        Some(bundler) => bundler,
        None => take_choice(&mut answers, Field::Bundler)?,
    };
    let ssr = match partial.ssr {
        Some(ssr) => ssr,
        None => take_flag(&mut answers, Field::Ssr)?,
    };
    let css = match partial.css {
        Some(css) => css,
        None => take_choice(&mut answers, Field::Css)?,
    };
    let ui = match partial.ui {
        Some(ui) => ui,
        None => take_choice(&mut answers, Field::Ui)?,
    };

    Ok(CompleteConfig {
        app_name,
        bundler,
        render_mode: RenderMode::from(ssr),
        css,
        ui,
        overwrite: partial.overwrite,
    })
}

fn take_text(answers: &mut Answers, field: Field) -> ScaffoldResult<String> {
    match answers.remove(&field) {
        Some(Answer::Text(text)) => Ok(text),
        other => Err(unexpected_answer(field, other)),
    }
}

fn take_flag(answers: &mut Answers, field: Field) -> ScaffoldResult<bool> {
    match answers.remove(&field) {
        Some(Answer::Flag(flag)) => Ok(flag),
        other => Err(unexpected_answer(field, other)),
    }
}

fn take_choice<E: ValueEnum>(answers: &mut Answers, field: Field) -> ScaffoldResult<E> {
    match answers.remove(&field) {
        Some(Answer::Choice(value)) => E::from_str(&value, true).map_err(|_| {
            ScaffoldError::PromptAborted(format!("'{value}' is not a valid {field}"))
        }),
        other => Err(unexpected_answer(field, other)),
    }
}

fn unexpected_answer(field: Field, answer: Option<Answer>) -> ScaffoldError {
    match answer {
        Some(answer) => {
            ScaffoldError::PromptAborted(format!("unexpected answer for {field}: {answer:?}"))
        }
        None => ScaffoldError::PromptAborted(format!("no answer for {field}")),
    }
}
