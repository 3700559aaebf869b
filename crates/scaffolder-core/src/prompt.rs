//! Prompt descriptors and the provider interface
//!
//! The resolver describes what it needs as an ordered list of [`Question`]s and
//! hands them to a [`Prompter`]. The cliclack implementation lives in the
//! `tui` module; tests plug in scripted providers.

use crate::error::ScaffoldResult;
use clap::ValueEnum;
use std::collections::HashMap;
use std::fmt;

/// Configuration field a question fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AppName,
    Bundler,
    Ssr,
    Css,
    Ui,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::AppName => "appName",
            Field::Bundler => "bundler",
            Field::Ssr => "ssr",
            Field::Css => "css",
            Field::Ui => "ui",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One selectable option in a [`QuestionKind::Select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Value returned in [`Answer::Choice`]
    pub value: String,
    /// Label shown to the user
    pub label: String,
}

impl Choice {
    /// Build the choice list for every variant of a clap value enum
    pub fn all<E: ValueEnum + fmt::Display>() -> Vec<Choice> {
        E::value_variants()
            .iter()
            .filter_map(|variant| {
                variant.to_possible_value().map(|value| Choice {
                    value: value.get_name().to_string(),
                    label: variant.to_string(),
                })
            })
            .collect()
    }

    /// Value string for a single variant
    pub fn value_of<E: ValueEnum>(variant: &E) -> String {
        variant
            .to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }
}

/// Validator for free-text input
pub type Validator = fn(&str) -> ScaffoldResult<()>;

#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Free text, checked by `validate`
    Input { validate: Validator },
    /// Single choice; `default` is one of the choice values
    Select { choices: Vec<Choice>, default: String },
    /// Yes/no
    Confirm { default: bool },
}

/// A single prompt descriptor
#[derive(Debug, Clone)]
pub struct Question {
    pub field: Field,
    pub message: &'static str,
    pub kind: QuestionKind,
}

/// A collected answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Choice(String),
    Flag(bool),
}

pub type Answers = HashMap<Field, Answer>;

/// Something that can ask the user questions.
///
/// Implementations block until every question has an answer, or fail with
/// [`ScaffoldError::PromptAborted`](crate::ScaffoldError::PromptAborted).
pub trait Prompter {
    fn prompt(&mut self, questions: &[Question]) -> ScaffoldResult<Answers>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Bundler, Ui};

    #[test]
    fn test_choices_follow_variant_order() {
        let choices = Choice::all::<Bundler>();
        let values: Vec<&str> = choices.iter().map(|c| c.value.as_str()).collect();
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(values, vec!["rollup", "webpack"]);
        assert_eq!(labels, vec!["Rollup", "Webpack"]);
    }

    #[test]
    fn test_value_of_matches_choice_value() {
        assert_eq!(Choice::value_of(&Ui::Tailwind), "tailwind");
        assert_eq!(Choice::value_of(&Ui::None), "none");
    }
}
