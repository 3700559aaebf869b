//! cliclack-backed prompt provider

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::prompt::{Answer, Answers, Prompter, Question, QuestionKind};
use std::io;

/// Asks each question inline on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn prompt(&mut self, questions: &[Question]) -> ScaffoldResult<Answers> {
        let mut answers = Answers::new();
        for question in questions {
            let answer = ask(question).map_err(aborted)?;
            answers.insert(question.field, answer);
        }
        Ok(answers)
    }
}

fn ask(question: &Question) -> io::Result<Answer> {
    match &question.kind {
        QuestionKind::Input { validate } => {
            let validate = *validate;
            cliclack::input(question.message)
                .validate(move |input: &String| validate(input))
                .interact::<String>()
                .map(Answer::Text)
        }
        QuestionKind::Select { choices, default } => {
            let mut select = cliclack::select(question.message);
            for choice in choices {
                select = select.item(choice.value.clone(), &choice.label, "");
            }
            select
                .initial_value(default.clone())
                .interact()
                .map(Answer::Choice)
        }
        QuestionKind::Confirm { default } => cliclack::confirm(question.message)
            .initial_value(*default)
            .interact()
            .map(Answer::Flag),
    }
}

fn aborted(err: io::Error) -> ScaffoldError {
    if err.kind() == io::ErrorKind::Interrupted {
        ScaffoldError::PromptAborted("cancelled".to_string())
    } else {
        ScaffoldError::PromptAborted(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_maps_to_cancelled() {
        let err = aborted(io::Error::from(io::ErrorKind::Interrupted));
        assert_eq!(err.to_string(), "Prompt aborted: cancelled");
    }

    #[test]
    fn test_other_io_errors_keep_their_message() {
        let err = aborted(io::Error::new(io::ErrorKind::Other, "not a terminal"));
        assert!(matches!(err, ScaffoldError::PromptAborted(ref msg) if msg == "not a terminal"));
    }
}
